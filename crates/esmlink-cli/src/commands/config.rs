//! Config command implementation.

use esmlink_config::EsmlinkConfig;

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Print the configuration after defaults, file and environment are layered.
pub fn execute(args: ConfigArgs, config: &EsmlinkConfig) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.to_value()?)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

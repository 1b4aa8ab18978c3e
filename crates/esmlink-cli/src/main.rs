//! esmlink CLI entry point: argument parsing, config, logging, dispatch.

use clap::Parser;
use esmlink_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = commands::load_config(args.config.as_deref()).map_err(error::cli_error_to_miette)?;
    let level = config.log_level().map_err(|e| error::cli_error_to_miette(e.into()))?;

    let colors = !args.no_color && config.settings.color.unwrap_or_else(ui::should_use_color);
    logger::init_logger(args.verbose, args.quiet, !colors, level);
    ui::init_colors(colors);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Link(link_args) => commands::link_execute(link_args, &config),
        cli::Command::Namespace(ns_args) => commands::namespace_execute(ns_args, &config),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &config),
        cli::Command::Config(config_args) => commands::config_execute(config_args, &config),
    };

    result.map_err(error::cli_error_to_miette)
}

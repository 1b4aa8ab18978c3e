use esmlink::ModuleId;

/// Parse a module id argument.
///
/// # Errors
///
/// Returns an error string if the id is empty or names no module.
pub fn parse_module_id(s: &str) -> Result<ModuleId, String> {
    ModuleId::new(s).map_err(|e| e.to_string())
}

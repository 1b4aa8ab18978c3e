//! Interop switches shared by record construction and configuration.

use serde::{Deserialize, Serialize};

/// CommonJS interop behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteropOptions {
    /// Expose own properties of `module.exports` as named exports.
    pub cjs_named_exports: bool,

    /// Honour `__esModule`: when set on `module.exports`, its `default`
    /// property becomes the default export instead of `module.exports` itself.
    pub cjs_interop: bool,
}

impl Default for InteropOptions {
    fn default() -> Self {
        Self {
            cjs_named_exports: true,
            cjs_interop: true,
        }
    }
}

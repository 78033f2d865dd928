//! Run configuration.
//!
//! The debug toggles can come from a TOML file (`--config`) as well as
//! from command-line flags; flags win by OR-ing on top of the file.
//!
//! ```toml
//! [debug]
//! trace-execution = true
//! print-code = false
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Effective VM toggles after merging configuration and flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct VmOptions {
    /// Dump the stack and next instruction to stderr before each
    /// dispatch.
    pub trace_execution: bool,
    /// Disassemble each function's chunk to stderr at end of
    /// compilation.
    pub print_code: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DebugConfig {
    pub trace_execution: bool,
    pub print_code: bool,
}

impl RunConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse run config: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Collapse into [`VmOptions`], OR-ing in flags set on the command
    /// line.
    pub fn options(&self, trace_flag: bool, print_code_flag: bool) -> VmOptions {
        VmOptions {
            trace_execution: self.debug.trace_execution || trace_flag,
            print_code: self.debug.print_code || print_code_flag,
        }
    }
}

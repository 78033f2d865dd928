//! Interpreter error types.
//!
//! Both variants are terminal for the current `interpret` call: compile
//! errors before anything runs, runtime errors after the stacks have
//! been reset. The CLI maps them to the conventional interpreter exit
//! codes.

use larkc::CompileError;
use std::fmt;

/// A runtime failure: the error message plus one stack-trace line per
/// call frame that was active, newest first.
#[derive(Debug)]
pub struct RuntimeError {
    message: String,
    trace: Vec<String>,
}

impl RuntimeError {
    pub(crate) fn new(message: String, trace: Vec<String>) -> Self {
        RuntimeError { message, trace }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `[line N] in script` / `[line N] in name()` lines, innermost
    /// frame first.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for line in &self.trace {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RuntimeError {}

#[derive(Debug)]
pub enum InterpretError {
    Compile(CompileError),
    Runtime(RuntimeError),
}

impl InterpretError {
    /// Conventional interpreter exit codes: 65 (EX_DATAERR) for compile
    /// errors, 70 (EX_SOFTWARE) for runtime errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            InterpretError::Compile(_) => 65,
            InterpretError::Runtime(_) => 70,
        }
    }
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::Compile(e) => e.fmt(f),
            InterpretError::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for InterpretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InterpretError::Compile(e) => Some(e),
            InterpretError::Runtime(e) => Some(e),
        }
    }
}

impl From<CompileError> for InterpretError {
    fn from(e: CompileError) -> Self {
        InterpretError::Compile(e)
    }
}

impl From<RuntimeError> for InterpretError {
    fn from(e: RuntimeError) -> Self {
        InterpretError::Runtime(e)
    }
}

//! Lark runtime library
//!
//! The stack-based virtual machine executing `larkc` bytecode, the
//! native-function bridge, run configuration, and the interactive REPL.
//!
//! ```rust,ignore
//! use lark_runtime::Vm;
//!
//! let mut vm = Vm::new();
//! vm.interpret("print \"hello\";")?;
//! ```

pub mod config;
pub mod error;
mod natives;
pub mod repl;
pub mod vm;

pub use config::{DebugConfig, RunConfig, VmOptions};
pub use error::{InterpretError, RuntimeError};
pub use vm::{FRAMES_MAX, STACK_MAX, Vm};

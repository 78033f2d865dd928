//! Lark compiler library
//!
//! Compiles Lark source text straight to bytecode: a hand-written
//! scanner feeds a single-pass Pratt parser that emits into a chunk as
//! it parses. The result is a script [`Function`](lark_core::Function)
//! allocated in the caller's [`Heap`](lark_core::Heap), ready for the
//! VM.
//!
//! ```rust,ignore
//! use lark_core::Heap;
//!
//! let mut heap = Heap::new();
//! let script = larkc::compile("print 1 + 2;", &mut heap)?;
//! ```

pub mod compiler;
pub mod scanner;

pub use compiler::{CompileError, CompileOptions, compile, compile_with_options};
pub use scanner::{Scanner, Token, TokenKind};

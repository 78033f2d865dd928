//! Lark core library
//!
//! Shared foundation for the Lark compiler and VM: the tagged value
//! representation, the object heap with string interning, the
//! open-addressed globals table, the bytecode chunk format, and the
//! disassembler.

pub mod chunk;
pub mod debug;
pub mod object;
pub mod table;
pub mod value;

pub use chunk::{Chunk, OpCode};
pub use object::{FnRef, Function, Heap, NativeFn, NativeRef, StrRef};
pub use table::Table;
pub use value::Value;

//! Native (host) functions.
//!
//! Installed into the globals table when a VM is constructed. A native
//! receives the argument window of the value stack and returns a single
//! value; natives do not raise runtime errors.

use lark_core::object::{Heap, NativeFn};
use lark_core::table::Table;
use lark_core::value::Value;

pub(crate) fn install(heap: &mut Heap, globals: &mut Table) {
    define_native(heap, globals, "clock", clock_native);
}

fn define_native(heap: &mut Heap, globals: &mut Table, name: &str, function: NativeFn) {
    let name = heap.intern(name);
    let native = heap.alloc_native(function);
    globals.set(name, Value::Native(native));
}

const CLOCKS_PER_SEC: libc::c_long = 1_000_000;

unsafe extern "C" {
    fn clock() -> libc::c_long;
}

/// Seconds of CPU time used by the process.
fn clock_native(_args: &[Value]) -> Value {
    let ticks = unsafe { clock() };
    Value::Number(ticks as f64 / CLOCKS_PER_SEC as f64)
}

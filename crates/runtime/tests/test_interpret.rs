//! End-to-end interpreter tests: source in, stdout out.

use lark_runtime::{InterpretError, Vm};

fn run(source: &str) -> (Result<(), InterpretError>, String) {
    let mut vm = Vm::with_output(Vec::new());
    let result = vm.interpret(source);
    let output = String::from_utf8(vm.into_output()).expect("output is valid utf-8");
    (result, output)
}

fn run_ok(source: &str) -> String {
    let (result, output) = run(source);
    if let Err(e) = result {
        panic!("interpret failed: {e}\noutput so far: {output:?}");
    }
    output
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run_ok("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run_ok("print (1 + 2) * 3;"), "9\n");
    assert_eq!(run_ok("print 10 - 2 - 3;"), "5\n");
    assert_eq!(run_ok("print 1 - -2;"), "3\n");
}

#[test]
fn division_follows_ieee() {
    assert_eq!(run_ok("print 7 / 2;"), "3.5\n");
    assert_eq!(run_ok("print 1 / 0;"), "inf\n");
    assert_eq!(run_ok("print -1 / 0;"), "-inf\n");
    assert_eq!(run_ok("print 0 / 0;"), "NaN\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(run_ok("var a = \"hi\"; var b = \"!\"; print a + b;"), "hi!\n");
    assert_eq!(run_ok("print \"\" + \"x\" + \"\";"), "x\n");
}

#[test]
fn string_equality_via_interning() {
    assert_eq!(run_ok("print \"a\" == \"a\";"), "true\n");
    assert_eq!(run_ok("print \"a\" == \"b\";"), "false\n");
    assert_eq!(run_ok("print \"ab\" == \"a\" + \"b\";"), "true\n");
}

#[test]
fn equality_across_kinds_is_false() {
    assert_eq!(run_ok("print 1 == \"1\";"), "false\n");
    assert_eq!(run_ok("print nil == false;"), "false\n");
    assert_eq!(run_ok("print nil == nil;"), "true\n");
    assert_eq!(run_ok("print true == true;"), "true\n");
}

#[test]
fn comparison_operators() {
    assert_eq!(run_ok("print 1 < 2;"), "true\n");
    assert_eq!(run_ok("print 2 < 1;"), "false\n");
    assert_eq!(run_ok("print 2 > 1;"), "true\n");
    assert_eq!(run_ok("print 1 <= 1;"), "true\n");
    assert_eq!(run_ok("print 1 >= 2;"), "false\n");
    assert_eq!(run_ok("print 1 != 2;"), "true\n");
}

#[test]
fn falsey_rule() {
    assert_eq!(run_ok("print !(nil);"), "true\n");
    assert_eq!(run_ok("print !false;"), "true\n");
    // Zero and the empty string are truthy.
    assert_eq!(run_ok("print !0;"), "false\n");
    assert_eq!(run_ok("print !\"\";"), "false\n");
}

#[test]
fn uninitialised_global_is_nil() {
    assert_eq!(run_ok("var x; print x;"), "nil\n");
}

#[test]
fn global_assignment_round_trips() {
    assert_eq!(run_ok("var x = 1; x = 2; print x;"), "2\n");
    // Assignment is an expression yielding the assigned value.
    assert_eq!(run_ok("var x = 1; print x = 2;"), "2\n");
}

#[test]
fn block_scoping_shadows_and_restores() {
    assert_eq!(
        run_ok("{ var a = 1; { var a = 2; print a; } print a; }"),
        "2\n1\n"
    );
}

#[test]
fn locals_assign_in_place() {
    assert_eq!(
        run_ok("{ var a = 1; a = a + 10; print a; }"),
        "11\n"
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        run_ok("var n = 0; while (n < 3) { print n; n = n + 1; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn while_false_never_runs() {
    assert_eq!(run_ok("while (false) print 1; print 2;"), "2\n");
}

#[test]
fn for_loop_all_clauses() {
    assert_eq!(
        run_ok("for (var i = 0; i < 3; i = i + 1) print i;"),
        "0\n1\n2\n"
    );
}

#[test]
fn for_loop_without_increment() {
    assert_eq!(
        run_ok("for (var i = 0; i < 2;) { print i; i = i + 1; }"),
        "0\n1\n"
    );
}

#[test]
fn if_else_branches() {
    assert_eq!(run_ok("if (true) print 1; else print 2;"), "1\n");
    assert_eq!(run_ok("if (false) print 1; else print 2;"), "2\n");
    assert_eq!(run_ok("if (false) print 1; print 3;"), "3\n");
}

#[test]
fn and_or_short_circuit_values() {
    assert_eq!(run_ok("print nil and 1;"), "nil\n");
    assert_eq!(run_ok("print 1 and 2;"), "2\n");
    assert_eq!(run_ok("print nil or \"x\";"), "x\n");
    assert_eq!(run_ok("print 1 or 2;"), "1\n");
    assert_eq!(run_ok("print false or false;"), "false\n");
}

#[test]
fn short_circuit_skips_side_effects() {
    assert_eq!(
        run_ok("fun hit() { print \"hit\"; return true; } false and hit(); print \"done\";"),
        "done\n"
    );
    assert_eq!(
        run_ok("fun hit() { print \"hit\"; return true; } true or hit(); print \"done\";"),
        "done\n"
    );
}

#[test]
fn function_call_returns_value() {
    assert_eq!(run_ok("fun make(x) { return x; } print make(\"ok\");"), "ok\n");
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(run_ok("fun f() {} print f();"), "nil\n");
    assert_eq!(run_ok("fun f() { return; } print f();"), "nil\n");
}

#[test]
fn recursion_fibonacci() {
    assert_eq!(
        run_ok("fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } print fib(10);"),
        "55\n"
    );
}

#[test]
fn arguments_bind_to_parameter_slots() {
    assert_eq!(
        run_ok("fun sub(a, b) { return a - b; } print sub(10, 4);"),
        "6\n"
    );
}

#[test]
fn nested_calls_share_the_stack() {
    assert_eq!(
        run_ok("fun twice(x) { return x + x; } fun inc(x) { return x + 1; } print twice(inc(3));"),
        "8\n"
    );
}

#[test]
fn functions_print_their_names() {
    assert_eq!(run_ok("fun f() {} print f;"), "<fn f>\n");
    assert_eq!(run_ok("print clock;"), "<native fn>\n");
}

#[test]
fn clock_native_returns_seconds() {
    assert_eq!(run_ok("print clock() >= 0;"), "true\n");
    assert_eq!(run_ok("var t = clock(); print t == t;"), "true\n");
}

#[test]
fn addition_commutes_for_numbers() {
    assert_eq!(run_ok("print 1.5 + 2.25;"), run_ok("print 2.25 + 1.5;"));
}

#[test]
fn deep_call_chain_within_frame_limit() {
    // Script frame + 63 function frames fills all 64 frames exactly.
    assert_eq!(
        run_ok("fun r(n) { if (n > 0) { return r(n - 1); } return n; } print r(62);"),
        "0\n"
    );
}

//! Error reporting and recovery tests
//!
//! The grid drops one token at a time from a canonical well-formed program
//! and checks that each omission yields exactly one diagnostic naming the
//! missing construct.

use brookc::driver::compile_source;
use rstest::rstest;

#[rstest]
#[case::omit_func("f() -> int { return 0; }", "expected declaration")]
#[case::omit_name("func () -> int { return 0; }", "expected identifier")]
#[case::omit_left_paren("func f) -> int { return 0; }", "expected '(' to begin parameter list")]
#[case::omit_right_paren("func f( -> int { return 0; }", "expected ')' to end parameter list")]
#[case::omit_arrow("func f() int { return 0; }", "expected '->'")]
#[case::omit_return_type("func f() -> { return 0; }", "expected type")]
#[case::omit_left_brace("func f() -> int return 0; }", "expected '{' to begin block")]
#[case::omit_return("func f() -> int { 0; }", "expected statement")]
#[case::omit_value("func f() -> int { return ; }", "expected expression")]
#[case::omit_semicolon("func f() -> int { return 0 }", "expected ';'")]
#[case::omit_right_brace("func f() -> int { return 0;", "expected '}' to end block")]
fn test_each_omission_is_one_diagnostic(#[case] src: &str, #[case] expected: &str) {
    let compilation = compile_source(src);

    assert_eq!(
        compilation.diagnostics.count(),
        1,
        "input {:?} should produce exactly one diagnostic",
        src
    );

    let message = compilation.diagnostics.get(0).unwrap().message();
    assert!(
        message.contains(expected),
        "input {:?}: message {:?} should contain {:?}",
        src,
        message,
        expected
    );
}

#[test]
fn test_declaration_recovery_resumes_at_next_func() {
    let src = "\
func broken( -> int { return 1; }
func ok() -> int { return 2; }
";
    let compilation = compile_source(src);

    assert_eq!(compilation.diagnostics.count(), 1);
    let source_file = compilation.source_file.unwrap();
    assert_eq!(source_file.decls.len(), 1);

    let brookc::ast::Decl::Func(func_decl) = &source_file.decls[0];
    assert_eq!(func_decl.signature.name.name, "ok");
}

#[test]
fn test_statement_recovery_keeps_surrounding_statements() {
    let src = "func f() -> int { return 1; oops return 2; }";
    let compilation = compile_source(src);

    assert_eq!(compilation.diagnostics.count(), 1);
    let source_file = compilation.source_file.unwrap();
    let brookc::ast::Decl::Func(func_decl) = &source_file.decls[0];
    assert_eq!(func_decl.body.stmts.len(), 2);
}

#[test]
fn test_statement_recovery_does_not_cross_block_end() {
    // The malformed statement is the last thing in f's body; recovery must
    // stop at '}' and leave g untouched.
    let src = "func f() -> int { oops } func g() -> int { return 0; }";
    let compilation = compile_source(src);

    assert_eq!(compilation.diagnostics.count(), 1);
    let source_file = compilation.source_file.unwrap();
    assert_eq!(source_file.decls.len(), 2);
}

#[test]
fn test_diagnostic_locations_are_one_based() {
    let src = "func f() -> int {\n    oops\n}";
    let compilation = compile_source(src);

    assert_eq!(
        compilation.diagnostics.get(0).unwrap().message(),
        "error @ 2:5: expected statement, found 'oops'"
    );
}

#[test]
fn test_empty_input_produces_no_diagnostics() {
    let compilation = compile_source("");

    assert!(compilation.succeeded());
    assert!(compilation.source_file.unwrap().decls.is_empty());
}

#[test]
fn test_garbage_input_never_panics_and_reports_once_per_construct() {
    // All-garbage input is one malformed declaration: everything after the
    // first diagnostic is consumed during recovery.
    let compilation = compile_source("} ; ) ( -> { return");

    assert_eq!(compilation.diagnostics.count(), 1);
    assert!(compilation.source_file.unwrap().decls.is_empty());
}

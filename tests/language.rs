use std::fs;

use shark::{
    Session, SharkError, evaluate_source,
    error::{LexError, ParseError, RuntimeError},
};
use walkdir::WalkDir;

/// Evaluates a script in a fresh session and returns the display form of
/// its last expression statement.
fn last_value(src: &str) -> Option<String> {
    Session::new().evaluate_line(src)
                  .unwrap_or_else(|e| panic!("script failed: {src}\nerror: {e}"))
}

fn assert_evaluates(src: &str, expected: &str) {
    assert_eq!(last_value(src).as_deref(), Some(expected), "script: {src}");
}

fn assert_fails(src: &str) -> SharkError {
    match evaluate_source(src) {
        Ok(()) => panic!("script succeeded but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "shark"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = evaluate_source(&content) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn integer_arithmetic_stays_exact() {
    assert_evaluates("1 + 2;", "3");
    assert_evaluates("7 * 9;", "63");
    assert_evaluates("8 - 5;", "3");
    assert_evaluates("2 ** 10;", "1024");
    assert_evaluates("0 ** 0;", "1");
    assert_evaluates("7 % 3;", "1");
}

#[test]
fn division_always_produces_float() {
    assert_evaluates("10 / 2;", "5.0");
    assert_evaluates("10 / 4;", "2.5");
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_evaluates("1 + 2.5;", "3.5");
    assert_evaluates("2 ** -1;", "0.5");
    assert_evaluates("2.0 ** 2;", "4.0");
}

#[test]
fn float_display_trims_but_keeps_point() {
    assert_evaluates("55.0;", "55.0");
    assert_evaluates("1.50 + 0.0;", "1.5");
    assert_evaluates("-0.5;", "-0.5");
}

#[test]
fn string_literals_and_concatenation() {
    assert_evaluates(r#""Hello, Shark! 🦈";"#, "Hello, Shark! 🦈");
    assert_evaluates(r#""ab" + "cd";"#, "abcd");
    assert_evaluates(r#""tab:\t|newline:\n|";"#, "tab:\t|newline:\n|");

    let err = assert_fails(r#"var s = "a" + 1;"#);
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Type { .. })));
}

#[test]
fn vectorized_arithmetic_broadcasts() {
    assert_evaluates("var v = [1, 2, 3, 4, 5];\nv * 2;", "[2, 4, 6, 8, 10]");
    assert_evaluates("var v = [1, 2, 3, 4, 5];\nv ** 2;", "[1, 4, 9, 16, 25]");
    assert_evaluates("[1, 2, 3] + [4, 5, 6];", "[5, 7, 9]");
    assert_evaluates("2 * [3, 4, 5];", "[6, 8, 10]");
    assert_evaluates("[2, 4, 6] / 2;", "[1.0, 2.0, 3.0]");
}

#[test]
fn shape_mismatch_reports_both_lengths() {
    let err = assert_fails("var x = [1, 2, 3] + [1, 2];");
    assert!(matches!(err,
                     SharkError::Runtime(RuntimeError::ShapeMismatch { left: 3,
                                                                       right: 2,
                                                                       .. })));
}

#[test]
fn comparisons_and_equality() {
    assert_evaluates("2 < 3;", "true");
    assert_evaluates("3 >= 3;", "true");
    assert_evaluates("2 != 3;", "true");
    assert_evaluates("1 == 1.0;", "true");
    assert_evaluates(r#""a" < "b";"#, "true");
    assert_evaluates("[1, 2] == [1, 2];", "true");
    assert_evaluates("[1, 2] == [1, 3];", "false");
    assert_evaluates("[1, 2] == [1, 2, 3];", "false");
    assert_evaluates(r#"1 == "1";"#, "false");

    // Ordering does not broadcast over arrays.
    let err = assert_fails("var x = [1] < [2];");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Type { .. })));
}

#[test]
fn logic_is_truthy_and_returns_operands() {
    assert_evaluates("1 and 2;", "2");
    assert_evaluates("0 and 2;", "0");
    assert_evaluates(r#"0 or "fallback";"#, "fallback");
    assert_evaluates("3 or 4;", "3");
    assert_evaluates("not [];", "true");
    assert_evaluates(r#"not "text";"#, "false");

    // The right side must not be evaluated when short-circuiting.
    assert_evaluates("false and undefined_name;", "false");
    assert_evaluates("1 or undefined_name;", "1");
}

#[test]
fn variable_declaration_and_assignment() {
    assert_evaluates("var x = 10;\nx = x + 5;\nx;", "15");

    let err = assert_fails("y = 1;");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Name { .. })));

    let err = assert_fails("var z = missing;");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Name { .. })));
}

#[test]
fn var_shadows_and_assignment_updates_outer() {
    assert_evaluates("var x = 1;\n? true { var x = 2; }\nx;", "1");
    assert_evaluates("var x = 1;\n? true { x = 2; }\nx;", "2");
}

#[test]
fn type_annotations_are_parsed_and_ignored() {
    assert_evaluates("var x: int = 10;\nvar y: float = 3.14;\nx + y * 2;", "16.28");
    assert_evaluates("media(a: float, b: float): float => (a + b) / 2;\nmedia(10, 20);",
                     "15.0");
}

#[test]
fn conditional_chain_picks_middle_branch() {
    assert_evaluates(r#"
        var nota = 8.5;
        var faixa = "";
        ? nota >= 9.0 { faixa = "A"; } otherwise {
            ? nota >= 7.0 { faixa = "B"; } otherwise { faixa = "C"; }
        }
        faixa;
    "#,
                     "B");
}

#[test]
fn otherwise_question_chains_without_nesting() {
    assert_evaluates(r#"
        classifica(nota) => {
            ? nota >= 9.0 { return "A"; }
            otherwise ? nota >= 7.0 { return "B"; }
            otherwise { return "C"; }
        }
        classifica(6.0) + classifica(7.5) + classifica(9.5);
    "#,
                     "CBA");
}

#[test]
fn while_and_for_loops() {
    assert_evaluates("var s = 0;\nfor i in 1..11 { s = s + i; }\ns;", "55");
    assert_evaluates("var c = 0;\nwhile c < 5 { c = c + 1; }\nc;", "5");
    assert_evaluates("var total = 0;\nfor x in [2, 3, 4] { total = total + x; }\ntotal;",
                     "9");
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let err = assert_fails("for i in 1..3 { }\nprint(i);");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Name { .. })));
}

#[test]
fn iterating_a_string_is_a_type_error() {
    let err = assert_fails(r#"for c in "abc" { }"#);
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Type { .. })));
}

#[test]
fn range_expression_materializes_outside_for() {
    assert_evaluates("var r = 2..6;\nr;", "[2, 3, 4, 5]");
    assert_evaluates("len(5..5);", "0");
}

#[test]
fn range_builtin_builds_half_open_arrays() {
    assert_evaluates("range(2, 5);", "[2, 3, 4]");
    assert_evaluates("range(5);", "[0, 1, 2, 3, 4]");
    assert_evaluates("range(5, 2);", "[]");
    assert_evaluates("len(range(0, 10));", "10");
}

#[test]
fn functions_single_expression_and_block_forms() {
    assert_evaluates("square(x) => x * x;\nsquare(7);", "49");
    assert_evaluates("add(a, b) => a + b;\nadd(2, 5);", "7");
    assert_evaluates(r#"
        fatorial(n) => {
            ? n <= 1 { return 1; }
            return n * fatorial(n - 1);
        }
        fatorial(5);
    "#,
                     "120");
}

#[test]
fn function_without_return_yields_no_value() {
    let result = Session::new().evaluate_line("f() => { var x = 1; }\nf();")
                               .unwrap();
    assert_eq!(result, None);
}

#[test]
fn closures_capture_their_environment_by_reference() {
    // Rebinding an unrelated global does not disturb the closure.
    assert_evaluates("var y = 1;\nf(x) => x + 1;\ny = 100;\nf(10);", "11");
    // The captured environment is live, not a snapshot.
    assert_evaluates("var y = 1;\ng(x) => x + y;\ny = 5;\ng(1);", "6");
    // Mutual recursion through the global frame.
    assert_evaluates(r#"
        is_even(n) => {
            ? n == 0 { return true; }
            return is_odd(n - 1);
        }
        is_odd(n) => {
            ? n == 0 { return false; }
            return is_even(n - 1);
        }
        is_even(10);
    "#,
                     "true");
}

#[test]
fn function_locals_do_not_leak() {
    let err = assert_fails("f() => { var secret = 1; return secret; }\nf();\nprint(secret);");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Name { .. })));
}

#[test]
fn wrong_function_arity_is_an_error() {
    let err = assert_fails("f(x, y) => x + y;\nf(3);");
    assert!(matches!(err,
                     SharkError::Runtime(RuntimeError::Arity { found: 1, .. })));

    let err = assert_fails("var x = mean([1], [2]);");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Arity { .. })));
}

#[test]
fn calling_a_non_function_is_a_type_error() {
    let err = assert_fails("var x = 5;\nx(1);");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Type { .. })));
}

#[test]
fn return_at_top_level_is_an_error() {
    let err = assert_fails("return 1;");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Type { .. })));
}

#[test]
fn statistics_match_the_sample_data() {
    let prelude = "var d = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];\n";
    assert_evaluates(&format!("{prelude}mean(d);"), "55.0");
    assert_evaluates(&format!("{prelude}round(stdev(d) * 100) / 100;"), "30.28");
    assert_evaluates(&format!("{prelude}sum(d);"), "550");
    assert_evaluates(&format!("{prelude}median(d);"), "55.0");
    assert_evaluates(&format!("{prelude}min(d);"), "10");
    assert_evaluates(&format!("{prelude}max(d);"), "100");
}

#[test]
fn greek_aliases_are_plain_bindings() {
    assert_evaluates("Σ([1, 2, 3]);", "6");
    assert_evaluates("μ([1, 2, 3]);", "2.0");
    assert_evaluates("var d = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];\nround(σ(d) * 10);",
                     "21");
    // The letters are ordinary identifiers and can name anything.
    assert_evaluates("var μ = mean([10, 20]);\nμ;", "15.0");
}

#[test]
fn sum_stays_int_only_when_all_elements_are_int() {
    assert_evaluates("sum([1, 2, 3]);", "6");
    assert_evaluates("sum([1, 2.0]);", "3.0");
    assert_evaluates("sum([]);", "0");
}

#[test]
fn sum_scales_linearly() {
    assert_evaluates("var a = [3, 1, 4, 1, 5];\nsum(a * 7) == sum(a) * 7;", "true");
}

#[test]
fn mean_lies_between_min_and_max() {
    assert_evaluates("var a = [2.5, 9.0, 4.0, 7.5];\nmean(a) >= min(a) and mean(a) <= max(a);",
                     "true");
}

#[test]
fn variance_is_stdev_squared() {
    assert_evaluates("var a = [1.0, 2.0, 4.0, 8.0];\nabs(variance(a) - stdev(a) ** 2) < 0.000000001;",
                     "true");
}

#[test]
fn median_handles_odd_and_even_lengths() {
    assert_evaluates("median([3, 1, 2]);", "2");
    assert_evaluates("median([4, 1, 3, 2]);", "2.5");
}

#[test]
fn mode_breaks_ties_by_first_occurrence() {
    assert_evaluates("mode([1, 2, 2, 3]);", "2");
    assert_evaluates("mode([3, 1, 3, 1]);", "3");
    assert_evaluates("mode([5, 6, 7]);", "5");
    assert_evaluates(r#"mode(["b", "a", "b"]);"#, "b");
}

#[test]
fn empty_reductions_fail() {
    for src in ["var x = mean([]);",
                "var x = median([]);",
                "var x = mode([]);",
                "var x = stdev([1]);",
                "var x = variance([1]);",
                "var x = min([]);"]
    {
        let err = assert_fails(src);
        assert!(matches!(err, SharkError::Runtime(RuntimeError::EmptyReduction { .. })),
                "expected EmptyReduction for: {src}");
    }
}

#[test]
fn min_max_accept_scalars_or_an_array() {
    assert_evaluates("min(3, 1, 2);", "1");
    assert_evaluates("max(3, 1, 2);", "3");
    assert_evaluates("min([1, 2.5]);", "1");
    assert_evaluates(r#"max("a", "b");"#, "b");
}

#[test]
fn scalar_math_builtins() {
    assert_evaluates("sqrt(9);", "3.0");
    assert_evaluates("abs(-5);", "5");
    assert_evaluates("abs(-2.5);", "2.5");
    assert_evaluates("floor(3.8);", "3");
    assert_evaluates("ceil(3.2);", "4");
    assert_evaluates("round(2.6);", "3");
    assert_evaluates("floor(4);", "4");
    assert_evaluates("pow(2, 8);", "256");

    let err = assert_fails("var x = sqrt(-1);");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Type { .. })));
}

#[test]
fn len_counts_elements_and_code_points() {
    assert_evaluates("len([1, 2, 3]);", "3");
    assert_evaluates(r#"len("héllo");"#, "5");
    assert_evaluates(r#"len("🦈");"#, "1");
}

#[test]
fn division_by_zero_fails() {
    for src in ["var x = 1 / 0;", "var x = 1.0 / 0.0;", "var x = 5 % 0;"] {
        let err = assert_fails(src);
        assert!(matches!(err, SharkError::Runtime(RuntimeError::DivisionByZero { .. })),
                "expected DivisionByZero for: {src}");
    }
}

#[test]
fn integer_overflow_is_reported() {
    let err = assert_fails("var x = 9223372036854775807 + 1;");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Overflow { .. })));

    let err = assert_fails("var x = 2 ** 64;");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn indexing_arrays() {
    assert_evaluates("[10, 20, 30][1];", "20");
    assert_evaluates("var m = [[1, 2], [3, 4]];\nm[1][0];", "3");

    let err = assert_fails("var x = [1, 2][5];");
    assert!(matches!(err,
                     SharkError::Runtime(RuntimeError::IndexOutOfBounds { index: 5,
                                                                          len: 2,
                                                                          .. })));

    let err = assert_fails("var x = [1, 2][-1];");
    assert!(matches!(err, SharkError::Runtime(RuntimeError::IndexOutOfBounds { .. })));
}

#[test]
fn every_builtin_is_installed_in_a_fresh_session() {
    use shark::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    let mut session = Session::new();
    for name in BUILTIN_FUNCTIONS {
        let display = session.evaluate_line(&format!("{name};"))
                             .unwrap_or_else(|e| panic!("builtin '{name}' failed: {e}"));
        assert_eq!(display, Some(format!("<builtin:{name}>")));
    }
}

#[test]
fn function_and_builtin_display_forms() {
    assert_evaluates("f(x) => x;\nf;", "<function>");
    assert_evaluates("print;", "<builtin:print>");
    assert_evaluates("μ;", "<builtin:mean>");
}

#[test]
fn print_produces_no_repl_value() {
    let result = Session::new().evaluate_line(r#"print("side effect only");"#)
                               .unwrap();
    assert_eq!(result, None);
}

#[test]
fn lex_errors_carry_their_line() {
    let err = assert_fails("var x = 1;\nvar s = \"open ended;");
    assert_eq!(err,
               SharkError::Lex(LexError::UnterminatedString { line: 2 }));

    let err = assert_fails("var x = @;");
    assert!(matches!(err,
                     SharkError::Lex(LexError::UnexpectedCharacter { found: '@', .. })));
}

#[test]
fn parse_errors_abort_at_first_mismatch() {
    let err = assert_fails("var = 3;");
    assert!(matches!(err, SharkError::Parse(ParseError::UnexpectedToken { .. })));

    let err = assert_fails("var x = 1");
    assert!(matches!(err, SharkError::Parse(ParseError::UnexpectedEndOfInput { .. })));

    // Comparisons are non-associative.
    let err = assert_fails("var x = 1 < 2 < 3;");
    assert!(matches!(err, SharkError::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn call_statements_are_not_function_declarations() {
    // `print(x);` at statement position must stay a call even though it
    // starts with IDENT '('.
    assert_evaluates("var x = 1;\nprint(x);\nx + 1;", "2");
}

#[test]
fn session_keeps_state_across_lines() {
    let mut session = Session::new();
    session.evaluate_line("var acc = 0;").unwrap();
    session.evaluate_line("soma(a, b) => a + b;").unwrap();
    session.evaluate_line("acc = soma(acc, 40);").unwrap();
    assert_eq!(session.evaluate_line("acc + 2;").unwrap(),
               Some("42".to_string()));
}

#[test]
fn failed_statements_roll_back_the_session() {
    let mut session = Session::new();
    session.evaluate_line("var stable = 1;").unwrap();

    // The whole statement fails, so its declaration must not survive.
    assert!(session.evaluate_line("var broken = 1 / 0;").is_err());
    assert!(session.evaluate_line("broken;").is_err());

    // Later statements in the same line are not reached after an error.
    assert!(session.evaluate_line("var a = 1; var b = missing; var c = 3;")
                   .is_err());
    assert_eq!(session.evaluate_line("a;").unwrap(), Some("1".to_string()));
    assert!(session.evaluate_line("c;").is_err());

    assert_eq!(session.evaluate_line("stable;").unwrap(),
               Some("1".to_string()));
}

#[test]
fn parse_errors_leave_the_session_untouched() {
    let mut session = Session::new();
    session.evaluate_line("var x = 7;").unwrap();
    assert!(session.evaluate_line("var y = ;").is_err());
    assert_eq!(session.evaluate_line("x;").unwrap(), Some("7".to_string()));
}

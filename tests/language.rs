use std::{
    fs,
    io::{self, Write},
};

use tally::{
    Outcome,
    Settings,
    interpreter::{cursor::TokenCursor, parser::core::parse_expression, reporter::Reporter},
    run,
};
use walkdir::WalkDir;

#[test]
fn scripted_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "tally"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let (out, diagnostics, _) = interpret_with(&source, &Settings::default());
        assert_eq!(out, expected,
                   "Program {path:?} printed unexpected values.\nDiagnostics:\n{diagnostics}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn interpret_with(src: &str, settings: &Settings) -> (String, String, Outcome) {
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    let outcome = run(src, settings, &mut out, &mut diagnostics).unwrap_or_else(|e| {
                                                                  panic!("Script failed: {e}")
                                                              });
    (String::from_utf8(out).unwrap(), String::from_utf8(diagnostics).unwrap(), outcome)
}

fn interpret(src: &str) -> (String, String, Outcome) {
    interpret_with(src, &Settings::default())
}

fn assert_values(src: &str, expected: &str) {
    let (out, diagnostics, outcome) = interpret(src);
    assert_eq!(out, expected, "Unexpected values for {src:?}");
    assert_eq!(outcome.diagnostics, 0, "Unexpected diagnostics for {src:?}:\n{diagnostics}");
}

fn tree(src: &str) -> String {
    let mut reporter = Reporter::new(Vec::new(), &Settings::default());
    let source = format!("{src} ;");
    let mut cursor = TokenCursor::new(&source);
    parse_expression(&mut cursor, &mut reporter, &Settings::default()).to_string()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_values("a = 2 + 3 * 4 ;", "val=14\n");
    assert_values("a = 2 * 3 + 4 ;", "val=10\n");
    assert_values("a = 2 * 3 - 4 / 2 + 1 ;", "val=5\n");
    assert_eq!(tree("a * b + c / d"), "((a * b) + (c / d))");
}

#[test]
fn operators_are_left_associative() {
    assert_values("a = 10 - 3 - 2 ;", "val=5\n");
    assert_values("a = 64 / 4 / 2 ;", "val=8\n");
    assert_eq!(tree("10 - 3 - 2"), "((10 - 3) - 2)");
    assert_eq!(tree("1 + 2 * 3 * 4 - 5"), "((1 + ((2 * 3) * 4)) - 5)");
}

#[test]
fn prefix_signs() {
    assert_values("a = -5 + 2 ;", "val=-3\n");
    assert_values("a = - - 5 ;", "val=5\n");
    assert_values("a = +7 ;", "val=7\n");
    assert_values("a = 2 * -3 ;", "val=-6\n");
    assert_eq!(tree("- - 5"), "--5");
}

#[test]
fn assignments_are_visible_to_later_statements() {
    assert_values("a = 4 ; b = a * 2 ;", "val=4\nval=8\n");
    assert_values("a = 1 ; a = a + 1 ; a = a * 10 ;", "val=1\nval=2\nval=20\n");

    let (_, _, outcome) = interpret("x = 3 ; y = x - 1 ; x = y ;");
    assert_eq!(outcome.environment.get("x"), Some(2.0));
    assert_eq!(outcome.environment.get("y"), Some(2.0));
    assert_eq!(outcome.environment.len(), 2);
}

#[test]
fn variable_names_are_case_sensitive() {
    let (out, diagnostics, outcome) = interpret("abc = 1 ; b = ABC ;");
    assert_eq!(out, "val=1\nval=0\n");
    assert!(diagnostics.contains("ABC"));
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn undefined_variable_reads_as_zero() {
    let (out, diagnostics, outcome) = interpret("b = undefinedVar + 1 ;");
    assert_eq!(out, "val=1\n");
    assert_eq!(diagnostics,
               "Error on line 1: Invalid variable undefinedVar, using 0.\n");
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn a_later_assignment_is_not_visible_earlier() {
    let (out, _, outcome) = interpret("a = b ; b = 5 ;");
    assert_eq!(out, "val=0\nval=5\n");
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn trailing_letters_after_a_number_do_not_abort_the_run() {
    let (out, _, outcome) = interpret("a = 12x ; b = a + 1 ;");
    assert_eq!(out, "val=12\nval=13\n");
    assert_eq!(outcome.environment.get("a"), Some(12.0));
    assert!(outcome.diagnostics > 0);
}

#[test]
fn decimal_points_are_not_part_of_numbers() {
    let (out, diagnostics, _) = interpret("a = 1.5 ;");
    assert_eq!(out, "val=1\n");
    assert!(diagnostics.contains("'.'"));
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_values("a = 1 / 0 ;", "val=inf\n");
    assert_values("a = 0 - 1 / 0 ;", "val=-inf\n");
    assert_values("a = 0 / 0 ;", "val=NaN\n");
}

#[test]
fn end_of_input_mid_expression_stops_gracefully() {
    let (out, diagnostics, outcome) = interpret("a = 3 +");
    assert_eq!(out, "val=-1\n");
    assert!(diagnostics.contains("Unexpected end of input"));
    assert_eq!(outcome.diagnostics, 1);
    assert_eq!(outcome.environment.get("a"), Some(-1.0));

    let (out, _, _) = interpret("a = 1 ; b = 2");
    assert_eq!(out, "val=1\nval=-1\n");
}

#[test]
fn empty_right_hand_sides_yield_zero() {
    assert_values("a = ;", "val=0\n");
    assert_values("a =", "val=0\n");
    assert_values("a", "val=0\n");
}

#[test]
fn empty_input_prints_nothing() {
    assert_values("", "");
    assert_values("  \n\t ", "");
}

#[test]
fn stray_characters_are_skipped() {
    let (out, diagnostics, outcome) = interpret("a = 2 # + 3 ;");
    assert_eq!(out, "val=5\n");
    assert_eq!(diagnostics,
               "Error on line 1: Found character '#' which doesn't seem to be useful here.\n");
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn equals_inside_an_expression_is_skipped() {
    let (out, diagnostics, outcome) = interpret("a = 2 = + 3 ;");
    assert_eq!(out, "val=5\n");
    assert_eq!(diagnostics, "Error on line 1: Unexpected '='.\n");
    assert_eq!(outcome.diagnostics, 1);

    let (out, _, _) = interpret("a = = 4 ;");
    assert_eq!(out, "val=4\n");
}

#[test]
fn missing_equals_abandons_the_statement() {
    let (out, diagnostics, outcome) = interpret("a 5 ; b = 2 ;");
    assert_eq!(out, "val=2\n");
    assert!(diagnostics.starts_with("Error on line 1: Expected '=', found number 5."));
    assert_eq!(outcome.diagnostics, 2);
    assert_eq!(outcome.environment.get("a"), None);
}

#[test]
fn junk_before_a_statement_is_dropped() {
    let (out, diagnostics, outcome) = interpret("; 7 a = 1 ;");
    assert_eq!(out, "val=1\n");
    assert_eq!(diagnostics,
               "Error on line 1: Expected a variable name, found ';'.\nError on line 1: Expected a variable name, found number 7.\n");
    assert_eq!(outcome.diagnostics, 2);
}

#[test]
fn parentheses_are_not_supported() {
    let (out, diagnostics, _) = interpret("a = (1) ; b = 2 ;");
    assert_eq!(out, "val=0\nval=2\n");
    assert!(diagnostics.contains("Expected a number, variable or sign, found '('."));
}

#[test]
fn diagnostics_name_the_source_line() {
    let (out, diagnostics, _) = interpret("a = 1 ;\n\nb = c ;");
    assert_eq!(out, "val=1\nval=0\n");
    assert_eq!(diagnostics, "Error on line 3: Invalid variable c, using 0.\n");
}

#[test]
fn stray_characters_name_their_line() {
    let (out, diagnostics, _) = interpret("a = 1 ;\r\n\r\nb = 2 @ ;\n");
    assert_eq!(out, "val=1\nval=2\n");
    assert_eq!(diagnostics,
               "Error on line 3: Found character '@' which doesn't seem to be useful here.\n");
}

#[test]
fn sign_nesting_is_capped() {
    let settings = Settings::default().with_max_depth(2);

    let (out, _, outcome) = interpret_with("a = - - 5 ;", &settings);
    assert_eq!(out, "val=5\n");
    assert_eq!(outcome.diagnostics, 0);

    let (out, diagnostics, outcome) = interpret_with("a = - - - - 5 ; b = 1 ;", &settings);
    assert_eq!(out, "val=0\nval=1\n");
    assert_eq!(diagnostics,
               "Error on line 1: Expression nested deeper than 2 levels, using 0.\n");
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn operator_chains_are_capped() {
    let settings = Settings::default().with_max_depth(3);

    let (out, _, outcome) = interpret_with("a = 1 + 1 + 1 + 1 ;", &settings);
    assert_eq!(out, "val=4\n");
    assert_eq!(outcome.diagnostics, 0);

    let (out, diagnostics, outcome) =
        interpret_with("a = 1 + 1 + 1 + 1 + 1 * 2 ; b = a ;", &settings);
    assert_eq!(out, "val=4\nval=4\n");
    assert!(diagnostics.contains("nested deeper than 3 levels"));
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn deep_sign_chains_do_not_overflow() {
    let source = format!("a = {}5 ; b = 2 ;", "- ".repeat(100_000));
    let (out, diagnostics, outcome) = interpret(&source);
    assert_eq!(out, "val=0\nval=2\n");
    assert!(diagnostics.contains("nested deeper than 256 levels"));
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn long_operator_chains_do_not_overflow() {
    let source = format!("a = 1{} ;", " + 1".repeat(200));
    assert_values(&source, "val=201\n");

    let source = format!("a = 1{} ; b = a * 2 ;", " + 1".repeat(200_000));
    let (out, diagnostics, outcome) = interpret(&source);
    assert_eq!(out, "val=257\nval=514\n");
    assert!(diagnostics.contains("nested deeper than 256 levels"));
    assert_eq!(outcome.diagnostics, 1);

    let source = format!("a = 2{} ;", " * 1 + 1".repeat(200_000));
    let (out, _, outcome) = interpret(&source);
    assert!(out.starts_with("val="));
    assert_eq!(outcome.diagnostics, 1);
}

#[test]
fn verbose_mode_traces_every_token() {
    let settings = Settings::default().with_verbose(true);
    let (out, diagnostics, outcome) = interpret_with("a = 1 ;", &settings);

    assert_eq!(out, "val=1\n");
    assert_eq!(outcome.diagnostics, 0);
    assert_eq!(diagnostics,
               "Token: Identifier value: a (line 1)\n\
                Token: Equals (line 1)\n\
                Token: Number value: 1 (line 1)\n\
                Token: Semicolon (line 1)\n\
                Token: EndOfStream (line 1)\n");
}

#[test]
fn reruns_print_the_same_values() {
    let source = "a = 4 ; b = a * a - 1 ; c = b / a ; a = c ;";
    let (first, _, _) = interpret(source);
    let (second, _, _) = interpret(source);
    assert_eq!(first, second);
    assert_eq!(first, "val=4\nval=15\nval=3.75\nval=3.75\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_are_returned() {
    let result = run("a = 1 ;", &Settings::default(), BrokenPipe, Vec::new());
    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);

    let result = run("a = b ;", &Settings::default(), Vec::new(), BrokenPipe);
    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
}

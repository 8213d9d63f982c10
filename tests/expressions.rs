use std::fs;

use calc::{
    calculate,
    error::{ParseError, ScanError, SyntaxError},
    evaluate_source,
    interpreter::{
        lexer::{Operator, Token},
        parser::core::MAX_NESTING_DEPTH,
        scanner::Scanner,
    },
    parse_source,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate_source(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn syntax_error(src: &str) -> SyntaxError {
    match parse_source(src) {
        Err(ParseError::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {src:?}, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("16 / 4 / 2", 2.0);
    assert_eq!(parse_source("8 - 3 - 2").unwrap().to_string(), "((8 - 3) - 2)");
    assert_eq!(parse_source("16 / 4 / 2").unwrap().to_string(), "((16 / 4) / 2)");
    assert_eq!(parse_source("1 - 2 + 3").unwrap().to_string(), "((1 - 2) + 3)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 6 / 2", 7.0);
    assert_eq!(parse_source("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
}

#[test]
fn nested_parentheses() {
    assert_value("((1 + 2))", 3.0);
    assert_value("(((((7)))))", 7.0);
    assert_value("2 * (3 + (4 - 1) * 2)", 18.0);
    assert_value("((2 + 3) * (4 - 1)) / 5", 3.0);

    let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_value(&deep, 1.0);
}

#[test]
fn long_operator_chains_evaluate() {
    let sum = format!("{}1", "1 + ".repeat(100_000));
    assert_value(&sum, 100_001.0);

    let difference = format!("200000{}", " - 1".repeat(150_000));
    assert_value(&difference, 50_000.0);

    let product = format!("1{}", " * 1".repeat(100_000));
    let expr = parse_source(&product).unwrap();
    assert_eq!(expr.depth(), 100_001);
    assert!(expr.to_string().starts_with("((((("));
    drop(expr);
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let src = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_value(&src, 1.0);
}

#[test]
fn nesting_past_the_limit_is_error() {
    let over = MAX_NESTING_DEPTH + 1;
    let src = format!("{}1{}", "(".repeat(over), ")".repeat(over));
    match syntax_error(&src) {
        SyntaxError::NestingTooDeep { limit, offset } => {
            assert_eq!(limit, MAX_NESTING_DEPTH);
            assert_eq!(offset, MAX_NESTING_DEPTH);
        },
        other => panic!("Unexpected error {other:?}"),
    }

    let src = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(matches!(syntax_error(&src), SyntaxError::NestingTooDeep { .. }));
}

#[test]
fn tree_depth_follows_nesting() {
    assert_eq!(parse_source("5").unwrap().depth(), 1);
    assert_eq!(parse_source("((5))").unwrap().depth(), 1);
    assert_eq!(parse_source("1 + 2 + 3 + 4").unwrap().depth(), 4);
    assert_eq!(parse_source("1 + (2 + (3 + 4))").unwrap().depth(), 4);
}

#[test]
fn decimal_literals() {
    assert_value("1.5 * 2", 3.0);
    assert_value(".5 + .25", 0.75);
    assert_value("2. * 3", 6.0);
    assert_value("0.1 + 0.2", 0.3);
}

#[test]
fn whitespace_is_optional_and_skipped() {
    assert_value("2+3*4", 14.0);
    assert_value("  ( 2 +3 )*  4  ", 20.0);
    assert_value("1\t+\n2", 3.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(evaluate_source("1 / 0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate_source("(0 - 1) / 0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate_source("0 / 0").unwrap().is_nan());
    assert_eq!(calculate("(0 - 1) / 0").unwrap().to_string(), "(0 - 1) / 0 = -Inf");
    assert_eq!(calculate("0 / 0").unwrap().to_string(), "0 / 0 = NaN");
}

#[test]
fn missing_closing_paren_is_error() {
    let error = syntax_error("(1 + 2");
    assert!(matches!(error, SyntaxError::MissingClosingParen { offset: 6 }));
    assert!(error.to_string().contains("missing closing parenthesis"));

    assert!(matches!(syntax_error("((1)"), SyntaxError::MissingClosingParen { .. }));
    assert!(matches!(syntax_error("(1 2)"), SyntaxError::MissingClosingParen { offset: 3 }));
}

#[test]
fn factor_must_be_number_or_paren() {
    let error = syntax_error("* 3");
    assert!(matches!(error, SyntaxError::ExpectedNumberOrParen { offset: 0, .. }));
    assert!(error.to_string().contains("expected number or '('"));

    assert!(matches!(syntax_error(""), SyntaxError::ExpectedNumberOrParen { .. }));
    assert!(matches!(syntax_error("1 +"), SyntaxError::ExpectedNumberOrParen { offset: 3, .. }));
    assert!(matches!(syntax_error("()"), SyntaxError::ExpectedNumberOrParen { offset: 1, .. }));
    assert!(matches!(syntax_error("x + 1"), SyntaxError::ExpectedNumberOrParen { .. }));
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(syntax_error("-3"), SyntaxError::ExpectedNumberOrParen { .. }));
    assert!(matches!(syntax_error("+3"), SyntaxError::ExpectedNumberOrParen { .. }));
    assert!(matches!(syntax_error("2 * -3"), SyntaxError::ExpectedNumberOrParen { .. }));
}

#[test]
fn trailing_input_is_error() {
    match syntax_error("1 + 2)") {
        SyntaxError::UnexpectedTrailingInput { input, offset } => {
            assert_eq!(input, ")");
            assert_eq!(offset, 5);
        },
        other => panic!("Unexpected error {other:?}"),
    }
    assert!(matches!(syntax_error("1 2"), SyntaxError::UnexpectedTrailingInput { .. }));
    assert!(matches!(syntax_error("3 $"), SyntaxError::UnexpectedTrailingInput { .. }));
    assert!(matches!(syntax_error("1.2.3"), SyntaxError::UnexpectedTrailingInput { .. }));
    assert!(matches!(syntax_error("."), SyntaxError::ExpectedNumberOrParen { offset: 0, .. }));
    assert_value("3   ", 3.0);
}

#[test]
fn errors_compare_equal_across_attempts() {
    let first = parse_source("(1 + * 2").unwrap_err();
    assert_eq!(parse_source("(1 + * 2").unwrap_err(), first);
    assert_ne!(parse_source("(1 + 2").unwrap_err(), first);
}

#[test]
fn evaluation_is_repeatable() {
    let src = "(1.5 + 2.25) * 4 / 3 - 0.5";
    let first = evaluate_source(src).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate_source(src).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn calculation_pairs_input_and_result() {
    let calculation = calculate("(2 + 3) * 4").unwrap();
    assert_eq!(calculation.expression, "(2 + 3) * 4");
    assert_eq!(calculation.value, 20.0);
    assert_eq!(calculation.to_string(), "(2 + 3) * 4 = 20");

    assert_eq!(calculate("1 / 3").unwrap().to_string(), "1 / 3 = 0.333333");
    assert_eq!(calculate("1 / 0").unwrap().to_string(), "1 / 0 = Inf");
    assert_eq!(calculate("1000 * 1000").unwrap().to_string(), "1000 * 1000 = 1e+06");
}

#[test]
fn scanner_produces_tokens_in_order() {
    let mut scanner = Scanner::new("(1.5+2)");
    assert_eq!(scanner.next_token(), Token::Operator(Operator::LeftParen));
    assert_eq!(scanner.next_token(), Token::Number(1.5));
    assert_eq!(scanner.next_token(), Token::Operator(Operator::Add));
    assert_eq!(scanner.next_token(), Token::Number(2.0));
    assert_eq!(scanner.next_token(), Token::Operator(Operator::RightParen));
    assert_eq!(scanner.next_token(), Token::EndOfInput);
    assert_eq!(scanner.next_token(), Token::EndOfInput);
    assert!(scanner.is_exhausted());
}

#[test]
fn scanner_stops_at_unknown_character() {
    let mut scanner = Scanner::new("4 # 5");
    assert_eq!(scanner.next_token(), Token::Number(4.0));
    assert_eq!(scanner.next_token(), Token::EndOfInput);
    assert_eq!(scanner.remainder(), "# 5");
    assert_eq!(scanner.remainder_offset(), 2);
    assert!(!scanner.is_exhausted());
}

#[test]
fn scanner_push_back_holds_one_token() {
    let mut scanner = Scanner::new("1 - 2");
    assert_eq!(scanner.push_back(), Err(ScanError::NothingToPushBack));

    assert_eq!(scanner.next_token(), Token::Number(1.0));
    assert_eq!(scanner.next_token(), Token::Operator(Operator::Sub));
    assert_eq!(scanner.token_start(), 2);
    assert_eq!(scanner.push_back(), Ok(()));
    assert!(matches!(scanner.push_back(), Err(ScanError::DoublePushBack { .. })));

    assert_eq!(scanner.next_token(), Token::Operator(Operator::Sub));
    assert_eq!(scanner.next_token(), Token::Number(2.0));
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/example.calc").expect("missing file");
    assert_value(&contents, 10.5);
}

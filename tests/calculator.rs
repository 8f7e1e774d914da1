use std::fs;

use linecalc::{
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn assert_evaluates(line: &str, expected: i64) {
    match evaluate(line) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {line:?}"),
        Err(e) => panic!("{line:?} failed unexpectedly: {e:?}"),
    }
}

/// Pulls tokens until (and including) the first `EndOfInput`.
fn tokens_of(line: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(line);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token().unwrap_or_else(|e| panic!("lexing {line:?} failed: {e:?}"));
        let done = token == Token::EndOfInput;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

#[test]
fn tokenizing_splits_literals_and_operators() {
    assert_eq!(tokens_of("12+7"),
               vec![Token::Integer(12), Token::Plus, Token::Integer(7), Token::EndOfInput]);
}

#[test]
fn terminal_state_is_sticky() {
    let mut lexer = Lexer::new("12+7");
    while lexer.next_token().unwrap() != Token::EndOfInput {}

    assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
}

#[test]
fn whitespace_is_transparent() {
    assert_eq!(tokens_of("3 + 5"), tokens_of("3+5"));
    assert_eq!(tokens_of("  10 *\t2  "), tokens_of("10*2"));
}

#[test]
fn line_terminator_ends_the_stream() {
    // Nothing after the first newline is tokenized, even more input.
    assert_eq!(tokens_of("1+1\n2+2"), tokens_of("1+1"));
    assert_eq!(tokens_of("3+5\r\n"), tokens_of("3+5"));
}

#[test]
fn single_operator_expressions() {
    assert_evaluates("3+5", 8);
    assert_evaluates("8-5", 3);
    assert_evaluates("7*9", 63);
    assert_evaluates("10/2", 5);
    assert_evaluates("42", 42);
}

#[test]
fn multi_digit_integers_and_spaces() {
    assert_evaluates("12+7", 19);
    assert_evaluates("  100 + 250 ", 350);
    assert_evaluates("3 + 5\n", 8);
}

#[test]
fn operators_apply_left_to_right() {
    // (7 - 3) * 2, not 7 - (3 * 2): there is no precedence.
    assert_evaluates("7-3*2", 8);
    assert_evaluates("10/2/5", 1);
    assert_evaluates("9 - 5 + 3 + 11", 18);
    assert_evaluates("1+2*3-4/5", 1);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("0-7/2", -3);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate("5/0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(evaluate("1/0*3"),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn unrecognized_character_is_error() {
    assert_eq!(evaluate("3+a"),
               Err(Error::Lex(LexError::UnrecognizedCharacter { found:    "a".to_string(),
                                                                position: 2, })));
    assert!(matches!(evaluate("(1+2)"), Err(Error::Lex(_))));
}

#[test]
fn line_must_start_with_integer() {
    // A leading sign is an operator, never part of a number.
    assert!(matches!(evaluate("+3"), Err(Error::Parse(_))));
    assert!(matches!(evaluate("-3"), Err(Error::Parse(_))));

    // An empty line's first token is already EndOfInput.
    assert_eq!(evaluate(""),
               Err(Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    TokenKind::EndOfInput, })));
    assert!(matches!(evaluate("   "), Err(Error::Parse(_))));
}

#[test]
fn incomplete_and_trailing_input_is_error() {
    assert!(matches!(evaluate("3+"), Err(Error::Parse(_))));
    assert!(matches!(evaluate("3 5"), Err(Error::Parse(_))));
    assert!(matches!(evaluate("3+5 7"), Err(Error::Parse(_))));
}

#[test]
fn overlong_integer_literal_is_error() {
    assert!(matches!(evaluate("99999999999999999999"),
                     Err(Error::Lex(LexError::IntegerOverflow { .. }))));

    // The largest i64 still lexes.
    assert_evaluates("9223372036854775807", i64::MAX);
}

#[test]
fn arithmetic_overflow_is_error() {
    assert_eq!(evaluate("9223372036854775807+1"),
               Err(Error::Runtime(RuntimeError::Overflow)));
    assert_eq!(evaluate("9223372036854775807*2"),
               Err(Error::Runtime(RuntimeError::Overflow)));
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(evaluate("3+a").unwrap_err().to_string(), "Syntax Error");
    assert_eq!(evaluate("+3").unwrap_err().to_string(), "Error parsing input");
    assert_eq!(evaluate("5/0").unwrap_err().to_string(), "Division by zero.");
}

#[test]
fn re_evaluation_is_deterministic() {
    for line in ["3+5", "7-3*2", "5/0", "3+a", "+3", ""] {
        assert_eq!(evaluate(line), evaluate(line), "two runs of {line:?} disagreed");
    }
}

#[test]
fn expression_fixtures_work() {
    let fixtures = fs::read_to_string("tests/expressions.calc").expect("missing file");
    let mut count = 0;

    for line in fixtures.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (expression, expected) =
            line.split_once("->").unwrap_or_else(|| panic!("malformed fixture line {line:?}"));
        let expected: i64 = expected.trim().parse().expect("fixture expectation is not an integer");

        count += 1;
        assert_evaluates(expression, expected);
    }

    assert!(count > 0, "No fixtures found in tests/expressions.calc");
}

use std::rc::Rc;

use crate::error::*;
use crate::scanner::*;
use crate::token::*;

#[test]
fn test_lexical_error_display() {
    let error = LexicalError::new(3, "Unexpected character.");
    assert_eq!(error.to_string(), "[line 3] Error: Unexpected character.");

    let error = LexicalError::new(12, "Unterminated string.");
    assert_eq!(error.to_string(), "[line 12] Error: Unterminated string.");
}

#[test]
fn test_default_reporter_latches_had_error() {
    let reporter = DefaultReporter::new();
    assert!(! reporter.had_error());

    reporter.report(LexicalError::new(1, "Unterminated string."));
    assert!(reporter.had_error());

    // Stays latched across further reports.
    reporter.report(LexicalError::new(2, "Unexpected character."));
    assert!(reporter.had_error());
}

// The file driver keeps the concrete reporter handle for the exit-code
// check and hands the scanner a trait-object clone of it.
#[test]
fn test_default_reporter_shared_with_scanner() {
    let reporter = DefaultReporter::new();
    let mut scanner = Scanner::new("+ @", Rc::clone(&reporter) as Rc<dyn Reporter>);
    let tokens = scanner.scan_tokens();

    assert_eq!(tokens, vec![Token::new(TokenType::Plus, "+", None, None, 1),
                            Token::new(TokenType::Eof, "", None, None, 1)]);
    assert!(reporter.had_error());
}

#[test]
fn test_default_reporter_accumulates_across_scanners() {
    let reporter = DefaultReporter::new();

    let mut scanner = Scanner::new("+", Rc::clone(&reporter) as Rc<dyn Reporter>);
    scanner.scan_tokens();
    assert!(! reporter.had_error());

    let mut scanner = Scanner::new("@", Rc::clone(&reporter) as Rc<dyn Reporter>);
    scanner.scan_tokens();
    assert!(reporter.had_error());
}

use crate::token::*;

// The driver prints scanned tokens with this rendering.
#[test]
fn test_token_display() {
    let token = Token::new(TokenType::LeftParen, "(", None, None, 1);
    assert_eq!(token.to_string(), "LeftParen (");

    let token = Token::new(TokenType::String, "\"hi\"", Some("hi"), None, 2);
    assert_eq!(token.to_string(), "String \"hi\" hi");

    let token = Token::new(TokenType::Number, "9.5", None, Some(9.5), 1);
    assert_eq!(token.to_string(), "Number 9.5 9.5");

    let token = Token::new(TokenType::Number, "7", None, Some(7.0), 1);
    assert_eq!(token.to_string(), "Number 7 7");

    let token = Token::new(TokenType::Eof, "", None, None, 3);
    assert_eq!(token.to_string(), "Eof ");
}

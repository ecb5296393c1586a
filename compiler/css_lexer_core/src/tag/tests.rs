use super::*;
use pretty_assertions::assert_eq;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Names & values: 0-15
    assert_eq!(TokenKind::Ident as u8, 0);
    assert_eq!(TokenKind::Percentage as u8, 8);

    // Punctuation: 32-47
    assert_eq!(TokenKind::LeftParen as u8, 32);
    assert_eq!(TokenKind::At as u8, 39);

    // Trivia: 64-79
    assert_eq!(TokenKind::Whitespace as u8, 64);
    assert_eq!(TokenKind::Comment as u8, 65);

    // Reserved markers: 80-95
    assert_eq!(TokenKind::Cdo as u8, 80);
    assert_eq!(TokenKind::Cdc as u8, 81);

    // Soft failures: 240-254
    assert_eq!(TokenKind::BadString as u8, 240);
    assert_eq!(TokenKind::Unmatched as u8, 241);

    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn all_is_sorted_and_complete() {
    let mut sorted = TokenKind::ALL;
    sorted.sort();
    assert_eq!(sorted, TokenKind::ALL);

    let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

// === Names ===

#[test]
fn names_are_stable() {
    assert_eq!(TokenKind::Ident.name(), "Ident");
    assert_eq!(TokenKind::AtKeyword.name(), "AtKeyword");
    assert_eq!(TokenKind::BadString.name(), "BadString");
    assert_eq!(TokenKind::LeftParen.name(), "LeftParenthesis");
    assert_eq!(TokenKind::RightParen.name(), "RightParenthesis");
    assert_eq!(TokenKind::Cdo.name(), "CDO");
    assert_eq!(TokenKind::Cdc.name(), "CDC");
    assert_eq!(TokenKind::Unmatched.name(), "Unmatched");
    assert_eq!(TokenKind::Eof.name(), "EOF");
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::Dimension.to_string(), "Dimension");
    assert_eq!(format!("{}", TokenKind::Eof), "EOF");
}

// === Lexeme ===

#[test]
fn fixed_lexeme_punctuation() {
    assert_eq!(TokenKind::LeftParen.lexeme(), Some("("));
    assert_eq!(TokenKind::RightParen.lexeme(), Some(")"));
    assert_eq!(TokenKind::LeftBrace.lexeme(), Some("{"));
    assert_eq!(TokenKind::RightBrace.lexeme(), Some("}"));
    assert_eq!(TokenKind::Colon.lexeme(), Some(":"));
    assert_eq!(TokenKind::Semicolon.lexeme(), Some(";"));
    assert_eq!(TokenKind::Comma.lexeme(), Some(","));
    assert_eq!(TokenKind::Cdo.lexeme(), Some("<!--"));
    assert_eq!(TokenKind::Cdc.lexeme(), Some("-->"));
    assert_eq!(TokenKind::Eof.lexeme(), Some(""));
}

#[test]
fn variable_lexeme_returns_none() {
    for kind in [
        TokenKind::Ident,
        TokenKind::Function,
        TokenKind::Hash,
        TokenKind::String,
        TokenKind::BadString,
        TokenKind::Number,
        TokenKind::Whitespace,
        TokenKind::Unmatched,
    ] {
        assert_eq!(kind.lexeme(), None, "{kind} should have variable text");
    }
}

// === Classification ===

#[test]
fn trivia_classification() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(!TokenKind::Ident.is_trivia());
    assert!(!TokenKind::Eof.is_trivia());
}

#[test]
fn exactly_two_soft_error_kinds() {
    let soft: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_soft_error())
        .collect();
    assert_eq!(soft, vec![TokenKind::BadString, TokenKind::Unmatched]);
}

#[test]
fn reserved_kinds() {
    let reserved: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_reserved())
        .collect();
    assert_eq!(
        reserved,
        vec![
            TokenKind::At,
            TokenKind::Comment,
            TokenKind::Cdo,
            TokenKind::Cdc
        ]
    );
}

// === Token ===

#[test]
fn token_accessors() {
    let tok = Token::new(TokenKind::Dimension, "20px");
    assert_eq!(tok.len(), 4);
    assert!(!tok.is_empty());
    assert!(!tok.is_eof());

    let eof = Token::new(TokenKind::Eof, "");
    assert!(eof.is_empty());
    assert!(eof.is_eof());
}

#[test]
fn token_is_copy() {
    let tok = Token::new(TokenKind::Colon, ":");
    let tok2 = tok;
    assert_eq!(tok, tok2);
}

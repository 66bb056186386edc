//! Lexer for matrix literals.

use logos::Logos;

/// Tokens of a matrix literal such as `[1 0; 0 -1j]`.
///
/// Whitespace is kept as a token because it separates entries: `1 -1` is
/// two entries while `1-1j` is one.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[regex(r"[ \t]+")]
    Space,

    // Literals
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[jJ]", |lex| {
        let s = lex.slice();
        s[..s.len() - 1].parse::<f64>().ok()
    })]
    Imaginary(f64),

    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Real(f64),

    // Punctuation
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Space => write!(f, "whitespace"),
            Token::Imaginary(v) => write!(f, "{v}j"),
            Token::Real(v) => write!(f, "{v}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
        }
    }
}

/// Tokenize a matrix literal.
pub fn tokenize(source: &str) -> Result<Vec<Token>, String> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(format!("invalid token '{}'", lexer.slice())),
        }
    }

    Ok(tokens)
}

//! Lexer for model group notation.
//!
//! Produces span-based tokens without storing text; text is sliced from source only when needed.
//! Consecutive unrecognized characters are coalesced into a single `Garbage` token.

use std::ops::Range;

use logos::Logos;

/// Token kinds of the model group notation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token("|")]
    Pipe,

    #[token("&")]
    Ampersand,

    #[token("?")]
    Question,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    /// Reserved name indicator + `PCDATA`, any ASCII case.
    #[regex(r"#[Pp][Cc][Dd][Aa][Tt][Aa]")]
    Pcdata,

    #[regex(r"[A-Za-z][A-Za-z0-9._\-]*")]
    Name,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == Self::Whitespace
    }
}

/// Zero-copy token: kind + byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Tokenizes source, dropping whitespace.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: start..end,
                    });
                }
                if !kind.is_trivia() {
                    tokens.push(Token {
                        kind,
                        span: lexer.span(),
                    });
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Garbage,
                        span: start..source.len(),
                    });
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.clone()]
}

//! Compact model group notation.
//!
//! Parses the familiar declaration syntax into a [`ModelGroup`]:
//!
//! ```text
//! (title, (para | list)*, appendix?)
//! (front & body & back?)
//! (#PCDATA | em | strong)*
//! ```
//!
//! The top level must be a parenthesized group. A group uses a single
//! connector kind; `#PCDATA` takes no occurrence indicator. Element names are
//! interned into the caller's [`ElementTypes`] table.

pub mod lexer;

#[cfg(test)]
mod lexer_tests;

use contentmodel_core::{Connector, ElementTypes, Occurrence};

use crate::model::{ContentToken, ModelGroup};

use self::lexer::{Token, TokenKind, lex, token_text};

/// Errors produced while parsing model group notation.
///
/// Offsets are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("unexpected `{found}` at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        found: String,
        expected: &'static str,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("connector `{found}` at offset {offset} differs from the group's `{connector}`")]
    MixedConnectors {
        offset: usize,
        found: &'static str,
        connector: &'static str,
    },

    #[error("#PCDATA cannot take an occurrence indicator (offset {offset})")]
    PcdataOccurrence { offset: usize },

    #[error("invalid character sequence `{text}` at offset {offset}")]
    InvalidCharacter { offset: usize, text: String },

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("group at offset {offset} is nested deeper than {limit} levels")]
    NestingTooDeep { offset: usize, limit: usize },
}

/// Nesting depth accepted by [`parse_model`].
pub const DEFAULT_NESTING_LIMIT: usize = 256;

/// Parse a model group, interning element names into `types`.
pub fn parse_model(source: &str, types: &mut ElementTypes) -> Result<ModelGroup, NotationError> {
    parse_model_with_nesting_limit(source, types, DEFAULT_NESTING_LIMIT)
}

/// Like [`parse_model`], rejecting groups nested more than `limit` deep.
///
/// The bound keeps the recursive descent off the end of the stack. Nesting
/// limits of the document type (GRPLVL) are checked at compile time.
pub fn parse_model_with_nesting_limit(
    source: &str,
    types: &mut ElementTypes,
    limit: usize,
) -> Result<ModelGroup, NotationError> {
    let mut parser = Parser {
        source,
        tokens: lex(source),
        pos: 0,
        depth: 0,
        nesting_limit: limit,
        types,
    };

    let group = match parser.peek() {
        Some(token) if token.kind == TokenKind::ParenOpen => parser.group()?,
        Some(token) => return Err(parser.unexpected(token, "`(`")),
        None => return Err(NotationError::UnexpectedEnd { expected: "`(`" }),
    };

    if let Some(token) = parser.peek() {
        return Err(NotationError::TrailingInput {
            offset: token.span.start,
        });
    }

    Ok(group)
}

struct Parser<'s, 't> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    nesting_limit: usize,
    types: &'t mut ElementTypes,
}

impl Parser<'_, '_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).cloned()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self, token: Token, expected: &'static str) -> NotationError {
        let text = token_text(self.source, &token).to_string();
        if token.kind == TokenKind::Garbage {
            return NotationError::InvalidCharacter {
                offset: token.span.start,
                text,
            };
        }
        NotationError::UnexpectedToken {
            offset: token.span.start,
            found: text,
            expected,
        }
    }

    /// `( token (connector token)* ) occurrence?` - caller has checked the `(`.
    fn group(&mut self) -> Result<ModelGroup, NotationError> {
        if self.depth >= self.nesting_limit {
            let offset = self.peek().map_or(self.source.len(), |token| token.span.start);
            return Err(NotationError::NestingTooDeep {
                offset,
                limit: self.nesting_limit,
            });
        }

        self.depth += 1;
        let group = self.group_body();
        self.depth -= 1;
        group
    }

    fn group_body(&mut self) -> Result<ModelGroup, NotationError> {
        self.bump();

        let mut members = vec![self.token()?];
        let mut connector: Option<Connector> = None;

        loop {
            const EXPECTED: &str = "connector or `)`";
            let Some(token) = self.peek() else {
                return Err(NotationError::UnexpectedEnd { expected: EXPECTED });
            };

            let found = match token.kind {
                TokenKind::ParenClose => {
                    self.bump();
                    break;
                }
                TokenKind::Comma => Connector::Seq,
                TokenKind::Pipe => Connector::Or,
                TokenKind::Ampersand => Connector::And,
                _ => return Err(self.unexpected(token, EXPECTED)),
            };

            match connector {
                Some(existing) if existing != found => {
                    return Err(NotationError::MixedConnectors {
                        offset: token.span.start,
                        found: found.symbol(),
                        connector: existing.symbol(),
                    });
                }
                _ => connector = Some(found),
            }

            self.bump();
            members.push(self.token()?);
        }

        let occurrence = self.occurrence();
        Ok(ModelGroup {
            connector: connector.unwrap_or(Connector::Seq),
            occurrence,
            members,
        })
    }

    fn token(&mut self) -> Result<ContentToken, NotationError> {
        const EXPECTED: &str = "element name, `#PCDATA` or `(`";
        let Some(token) = self.peek() else {
            return Err(NotationError::UnexpectedEnd { expected: EXPECTED });
        };

        match token.kind {
            TokenKind::ParenOpen => Ok(ContentToken::Group(self.group()?)),
            TokenKind::Name => {
                self.bump();
                let id = self.types.intern(token_text(self.source, &token));
                let occurrence = self.occurrence();
                Ok(ContentToken::element(id).with_occurrence(occurrence))
            }
            TokenKind::Pcdata => {
                self.bump();
                if let Some(next) = self.peek()
                    && occurrence_of(next.kind).is_some()
                {
                    return Err(NotationError::PcdataOccurrence {
                        offset: next.span.start,
                    });
                }
                Ok(ContentToken::pcdata())
            }
            _ => Err(self.unexpected(token, EXPECTED)),
        }
    }

    fn occurrence(&mut self) -> Occurrence {
        match self.peek().and_then(|token| occurrence_of(token.kind)) {
            Some(occurrence) => {
                self.bump();
                occurrence
            }
            None => Occurrence::None,
        }
    }
}

fn occurrence_of(kind: TokenKind) -> Option<Occurrence> {
    match kind {
        TokenKind::Question => Some(Occurrence::Opt),
        TokenKind::Plus => Some(Occurrence::Plus),
        TokenKind::Star => Some(Occurrence::Rep),
        _ => None,
    }
}

use crate::{
    ast::operator::Operator,
    lexer::{
        error::LexError,
        token::{Token, TokenKind},
    },
    settings::KeywordMode,
};
use tracing::{debug, trace, warn};

pub mod error;
pub mod token;

/// Tokenizes `input` with strict keyword matching.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// Single-pass scanner over the raw filter text.
///
/// Characters that are not part of any token (whitespace, stray punctuation)
/// are skipped. The scanner never backtracks; the only lookahead is one
/// character after a backslash inside a string literal.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    keyword_mode: KeywordMode,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            keyword_mode: KeywordMode::default(),
            tokens: Vec::new(),
        }
    }

    pub fn with_keyword_mode(mut self, mode: KeywordMode) -> Self {
        self.keyword_mode = mode;
        self
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.peek_char() {
            let start = self.position;
            match ch {
                '[' => self.single(TokenKind::OpenBracket),
                ']' => self.single(TokenKind::CloseBracket),
                ':' => self.single(TokenKind::Colon),
                ',' => self.single(TokenKind::Comma),
                '\'' | '"' => self.consume_string(ch)?,
                '$' => self.consume_keyword()?,
                c if c.is_ascii_digit() => self.consume_integer(start)?,
                '-' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                    self.advance();
                    self.consume_integer(start)?
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.consume_identifier(),
                other => {
                    trace!(character = ?other, position = start, "Skipping character");
                    self.advance();
                }
            }
        }

        debug!(
            tokens = self.tokens.len(),
            length = self.input.len(),
            "Filter tokenized"
        );
        Ok(self.tokens)
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.position;
        self.advance();
        self.push(kind, start);
    }

    fn consume_integer(&mut self, start: usize) -> Result<(), LexError> {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let literal = &self.input[start..self.position];
        let value = literal
            .parse::<i64>()
            .map_err(|_| LexError::IntegerOutOfRange {
                literal: literal.to_string(),
                position: start,
            })?;
        self.push(TokenKind::Integer(value), start);
        Ok(())
    }

    fn consume_string(&mut self, quote: char) -> Result<(), LexError> {
        let start = self.position;
        self.advance();

        let mut content = String::new();
        loop {
            let Some(ch) = self.peek_char() else {
                return Err(LexError::UnterminatedString { position: start });
            };
            self.advance();

            if ch == quote {
                break;
            }

            if ch == '\\' {
                match self.peek_char() {
                    Some(escaped @ ('\'' | '"' | '\\')) => {
                        content.push(escaped);
                        self.advance();
                    }
                    _ => content.push('\\'),
                }
                continue;
            }

            content.push(ch);
        }

        self.push(TokenKind::String(content), start);
        Ok(())
    }

    fn consume_keyword(&mut self) -> Result<(), LexError> {
        let start = self.position;
        self.advance();

        let word_start = self.position;
        while self.peek_char().is_some_and(|c| c.is_ascii_lowercase()) {
            self.advance();
        }
        let word = &self.input[word_start..self.position];

        match Operator::from_keyword(word) {
            Some(op) => {
                self.push(TokenKind::Operator(op), start);
                Ok(())
            }
            None => match self.keyword_mode {
                KeywordMode::Strict => Err(LexError::UnknownKeyword {
                    keyword: word.to_string(),
                    position: start,
                }),
                KeywordMode::Lenient => {
                    warn!(keyword = word, position = start, "Dropping unknown operator keyword");
                    Ok(())
                }
            },
        }
    }

    fn consume_identifier(&mut self) {
        let start = self.position;
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.advance();
        }
        let name = self.input[start..self.position].to_string();
        self.push(TokenKind::Identifier(name), start);
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        trace!(token = %kind, start, end = self.position, "Token");
        self.tokens.push(Token::new(kind, start, self.position));
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.position += ch.len_utf8();
        }
    }
}

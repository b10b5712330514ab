//! Lexer (scanner) for Lox source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Scanning never fails as a whole: a malformed lexeme is reported to the
//! [`Reporter`], no token is produced for it, and scanning resumes right after it.
//! The stream always ends with exactly one `Eof` token.

use super::token::{Literal, Token, TokenKind};
use crate::diagnostics::Reporter;
use log::debug;
use std::fmt;

/// A recoverable lexical error.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for LexError {}

/// Scan `source` into tokens, reporting lexical errors to `reporter`.
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Lexer::new(source, reporter).tokenize()
}

/// Lexer for a single source text.
///
/// `tokenize` consumes the lexer, so an instance cannot be restarted.
pub struct Lexer<'r> {
    input: Vec<char>,
    /// First character of the lexeme being scanned
    start: usize,
    position: usize,
    /// Line of `start`
    start_line: usize,
    line: usize,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Lexer<'r> {
    pub fn new(input: &str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            input: input.chars().collect(),
            start: 0,
            position: 0,
            start_line: 1,
            line: 1,
            reporter,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut errors = 0;

        while !self.is_at_end() {
            self.start = self.position;
            self.start_line = self.line;

            match self.next_token() {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => {}
                Err(err) => {
                    errors += 1;
                    self.reporter.report(err.line, "", &err.message);
                }
            }
        }

        tokens.push(Token::eof(self.line));
        debug!(
            "scanned {} tokens over {} lines ({} errors)",
            tokens.len(),
            self.line,
            errors
        );
        tokens
    }

    /// Scan one lexeme. `Ok(None)` means it was whitespace or a comment.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(ch) = self.advance() else {
            return Ok(None);
        };

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,

            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                    return Ok(None);
                }
                TokenKind::Slash
            }

            // `advance` already counted the newline
            ' ' | '\t' | '\r' | '\n' => return Ok(None),

            '"' => return self.string_literal().map(Some),
            c if c.is_ascii_digit() => return self.number_literal().map(Some),
            c if is_identifier_start(c) => return Ok(Some(self.identifier_or_keyword())),

            _ => {
                return Err(LexError {
                    message: format!("Unexpected character '{}'.", ch),
                    line: self.line,
                });
            }
        };

        Ok(Some(self.make_token(kind, None)))
    }

    /// Two-character operator merge: `second` if the next char is `next`, else `first`.
    fn either(&mut self, next: char, second: TokenKind, first: TokenKind) -> TokenKind {
        if self.match_char(next) {
            second
        } else {
            first
        }
    }

    /// Parse string literal. The value is the raw text between the quotes.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError {
                message: "Unterminated string.".to_string(),
                line: self.line,
            });
        }

        self.advance(); // closing quote

        let body = &self.input[self.start + 1..self.position - 1];
        let literal = Literal::Str(body.iter().collect());
        Ok(self.make_token(TokenKind::String, Some(literal)))
    }

    /// Parse numeric literal: digits, optionally `.` and more digits.
    fn number_literal(&mut self) -> Result<Token, LexError> {
        self.skip_digits();

        // A '.' only belongs to the number when a digit follows it
        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
        }

        let text = self.lexeme();
        let value = text.parse::<f64>().map_err(|_| LexError {
            message: format!("Invalid number literal '{}'.", text),
            line: self.line,
        })?;

        let literal = Literal::Number(value);
        Ok(self.make_token(TokenKind::Number, Some(literal)))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self) -> Token {
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, None)
    }

    /// Skip to the end of the line, leaving the newline for the main loop.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(kind, self.lexeme(), literal, self.start_line)
    }

    fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character, counting newlines
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

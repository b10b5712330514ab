//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error type, the token cursor
//! helpers and the two entry points:
//!
//! - [`Parser::parse`] parses a single expression and returns `None` on a syntax
//!   error.
//! - [`Parser::parse_script`] parses `;`-separated expressions until end of input,
//!   resynchronizing after each error so one pass reports all of them.
//!
//! # Implementation
//!
//! The grammar levels live in `expressions` as a separate `impl Parser` block.
//! A syntax error is an `Err(ParseError)` threaded back through every level with
//! `?`. It is reported to the [`Reporter`] once, when it is created.
//!
//! Recursion is bounded: at most [`MAX_NESTING`] groupings, unary operators and
//! conditional branches may be open at once, and no tree grows taller than
//! [`MAX_HEIGHT`]. Input past either limit is a syntax error, so parsing and
//! every later walk over the tree stay within the stack.

use super::ast::Expr;
use super::token::{Token, TokenKind};
use crate::diagnostics::Reporter;
use log::{debug, trace};
use std::fmt;

/// Groupings, unary operators and conditional branches open at the same time.
pub const MAX_NESTING: usize = 64;

/// Tallest tree a parse may produce, counted in nodes from root to leaf.
pub const MAX_HEIGHT: usize = 512;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    /// `" at end"` or `" at '<lexeme>'"`
    pub location: String,
}

impl ParseError {
    /// Error located at `token`.
    pub fn at(token: &Token, message: &str) -> Self {
        let location = if token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };

        ParseError {
            message: message.to_string(),
            line: token.line,
            location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}{}: {}",
            self.line, self.location, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser over one token sequence.
///
/// The cursor always points at the next unconsumed token, which is the single
/// token of lookahead.
pub struct Parser<'r> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Parser<'r> {
    pub fn new(mut tokens: Vec<Token>, reporter: &'r mut dyn Reporter) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }

        Self {
            tokens,
            position: 0,
            depth: 0,
            reporter,
        }
    }

    /// Parse one expression. Syntax errors are reported and yield `None`.
    pub fn parse(&mut self) -> Option<Expr> {
        debug!("parsing expression from {} tokens", self.tokens.len());
        self.parse_expression().ok()
    }

    /// Parse `expression (";" expression)* ";"?` up to end of input.
    ///
    /// Returns the expressions that parsed cleanly. After an error the parser
    /// skips to the next statement boundary and carries on.
    pub fn parse_script(&mut self) -> Vec<Expr> {
        let mut exprs = Vec::new();
        let mut errors = 0;

        while !self.is_at_end() {
            match self.parse_script_item() {
                Ok(expr) => exprs.push(expr),
                Err(_) => {
                    errors += 1;
                    self.synchronize();
                }
            }
        }

        debug!("parsed {} expressions ({} errors)", exprs.len(), errors);
        exprs
    }

    fn parse_script_item(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;

        if !self.match_token(TokenKind::Semicolon) && !self.is_at_end() {
            return Err(self.error_at_current("Expect ';' after expression."));
        }

        Ok(expr)
    }

    /// Discard tokens until just after a `;` or just before a statement keyword.
    pub(crate) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }

            if self.peek().kind.starts_statement() {
                break;
            }

            self.advance();
        }

        trace!("resynchronized at token {}", self.position);
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Consume the current token. The `Eof` token is never consumed.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume and return the current token if its kind is one of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.peek().kind) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Run `parse` one nesting level deeper, or fail if the limit is reached.
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error_at_current("Too much nesting."));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Report an error at the current token and return it for propagation.
    pub(crate) fn error_at_current(&mut self, message: &str) -> ParseError {
        let err = ParseError::at(self.peek(), message);
        self.report(err)
    }

    pub(crate) fn error_at(&mut self, token: &Token, message: &str) -> ParseError {
        self.report(ParseError::at(token, message))
    }

    fn report(&mut self, err: ParseError) -> ParseError {
        self.reporter.report(err.line, &err.location, &err.message);
        err
    }
}

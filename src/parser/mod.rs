//! Lox source code front end
//!
//! This module transforms Lox source text into an expression tree:
//! - [`token`]: the token model shared by both stages
//! - [`lexer`]: tokenization (source text → tokens)
//! - [`parse`] and `expressions`: parsing (tokens → tree)
//! - [`ast`]: tree node definitions and the [`ast::ExprVisitor`] trait
//! - [`printer`]: prefix-form rendering, the reference visitor
//!
//! # Supported grammar
//!
//! Expressions only: number, string, `true`, `false` and `nil` literals,
//! grouping, unary `!` and `-`, binary arithmetic, comparison and equality,
//! the ternary conditional and the comma operator.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one function per precedence level.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod printer;
pub mod token;

use crate::diagnostics::Reporter;

/// Scan and parse `source` as a single expression.
pub fn parse_expression(source: &str, reporter: &mut dyn Reporter) -> Option<ast::Expr> {
    let tokens = lexer::scan(source, reporter);
    parse::Parser::new(tokens, reporter).parse()
}

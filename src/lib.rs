//! # Introduction
//!
//! rlox is the front end of a Lox implementation: it turns source text into
//! tokens, parses an expression grammar into a syntax tree, and prints trees in
//! a parenthesized prefix form.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Expr → AstPrinter → "(* (- 123) (group 45.67))"
//! ```
//!
//! 1. [`parser`]: tokens, the lexer, the syntax tree with its visitor, the
//!    recursive descent parser and the prefix printer.
//! 2. [`diagnostics`]: the [`diagnostics::Reporter`] sink both stages hand
//!    their errors to.
//! 3. [`runner`]: the file and prompt modes used by the binary.
//! 4. [`ui`]: ratatui inspector; not part of the stable library API.
//!
//! ## Expression grammar
//!
//! Comma (lowest), conditional `?:`, equality, comparison, term, factor, unary,
//! primary. Binary levels are left associative, the conditional is right
//! associative.
//!
//! ```
//! use rlox::diagnostics::CollectingReporter;
//! use rlox::parser::{parse_expression, printer::print};
//!
//! let mut reporter = CollectingReporter::new();
//! let expr = parse_expression("-123 * (45.67)", &mut reporter).unwrap();
//! assert_eq!(print(&expr), "(* (- 123) (group 45.67))");
//! ```

pub mod diagnostics;
pub mod parser;
pub mod runner;
pub mod ui;

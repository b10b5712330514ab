//! Expression parsing implementation
//!
//! Each grammar level owns one precedence tier and recurses into the next
//! tighter one, so a level only ever sees fully reduced operands:
//!
//! ```text
//! expression  → comma
//! comma       → conditional ( "," conditional )*
//! conditional → equality ( "?" expression ":" conditional )?
//! equality    → comparison ( ( "!=" | "==" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "+" | "-" ) factor )*
//! factor      → unary ( ( "*" | "/" ) unary )*
//! unary       → ( "!" | "-" ) unary | primary
//! primary     → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```
//!
//! Binary levels build left-associative chains. The conditional recurses into
//! itself for the else branch, which makes it right-associative.
//!
//! Every place the grammar recurses on itself (grouping, unary, both conditional
//! branches) goes through [`Parser::nested`], and each left-associative fold
//! checks the height of the tree it builds against [`MAX_HEIGHT`].

use super::ast::{Expr, LiteralValue};
use super::parse::{ParseError, Parser, MAX_HEIGHT};
use super::token::{Literal, TokenKind};

const EQUALITY: &[TokenKind] = &[TokenKind::BangEqual, TokenKind::EqualEqual];
const COMPARISON: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
];
const TERM: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const FACTOR: &[TokenKind] = &[TokenKind::Star, TokenKind::Slash];
const UNARY: &[TokenKind] = &[TokenKind::Bang, TokenKind::Minus];

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_comma()
    }

    /// Parse comma operator (lowest precedence)
    fn parse_comma(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(&[TokenKind::Comma], Self::parse_conditional)
    }

    /// Parse conditional: condition ? then_branch : else_branch
    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_equality()?;

        if self.match_token(TokenKind::Question) {
            let then_branch = self.nested(Self::parse_expression)?;
            self.expect_token(
                TokenKind::Colon,
                "Expect ':' after then branch of conditional expression.",
            )?;
            let else_branch = self.nested(Self::parse_conditional)?;

            return Ok(Expr::conditional(condition, then_branch, else_branch));
        }

        Ok(condition)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(EQUALITY, Self::parse_comparison)
    }

    /// Parse comparison (> >= < <=)
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(COMPARISON, Self::parse_term)
    }

    /// Parse additive (+ -)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TERM, Self::parse_factor)
    }

    /// Parse multiplicative (* /)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(FACTOR, Self::parse_unary)
    }

    /// One binary precedence level: `operand ( op operand )*`, folded to the left.
    fn parse_left_assoc(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        let mut height = left.height();

        while let Some(operator) = self.match_any(operators) {
            let right = operand(self)?;
            height = 1 + height.max(right.height());
            if height > MAX_HEIGHT {
                return Err(self.error_at(&operator, "Too much nesting."));
            }
            left = Expr::binary(left, operator, right);
        }

        Ok(left)
    }

    /// Parse unary (! -)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(operator) = self.match_any(UNARY) {
            let operand = self.nested(Self::parse_unary)?;
            return Ok(Expr::unary(operator, operand));
        }

        self.parse_primary()
    }

    /// Parse primary: literals and parenthesized groups
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let value = match self.peek().kind {
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::Nil => LiteralValue::Nil,
            TokenKind::Number | TokenKind::String => match self.peek().literal.clone() {
                Some(Literal::Number(n)) => LiteralValue::Number(n),
                Some(Literal::Str(s)) => LiteralValue::Str(s),
                None => return Err(self.error_at_current("Expect expression.")),
            },
            TokenKind::LeftParen => {
                let inner = self.nested(|parser| {
                    parser.advance();
                    let inner = parser.parse_expression()?;
                    parser.expect_token(TokenKind::RightParen, "Expect ')' after expression.")?;
                    Ok(inner)
                })?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.error_at_current("Expect expression.")),
        };

        self.advance();
        Ok(Expr::literal(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::CollectingReporter;
    use crate::parser::ast::{Expr, LiteralValue};
    use crate::parser::lexer::scan;
    use crate::parser::parse::{Parser, MAX_HEIGHT, MAX_NESTING};
    use crate::parser::token::TokenKind;

    fn parse(source: &str) -> (Option<Expr>, CollectingReporter) {
        let mut reporter = CollectingReporter::new();
        let tokens = scan(source, &mut reporter);
        let expr = Parser::new(tokens, &mut reporter).parse();
        (expr, reporter)
    }

    fn number(expr: &Expr) -> f64 {
        match expr {
            Expr::Literal(LiteralValue::Number(n)) => *n,
            other => panic!("Expected number literal, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence() {
        let (expr, _) = parse("1 + 2 * 3");

        match expr.unwrap() {
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                assert_eq!(operator.kind, TokenKind::Plus);
                assert_eq!(number(&left), 1.0);
                match *right {
                    Expr::Binary { operator, .. } => assert_eq!(operator.kind, TokenKind::Star),
                    other => panic!("Expected product, got {:?}", other),
                }
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associativity() {
        let (expr, _) = parse("1 - 2 - 3");

        match expr.unwrap() {
            Expr::Binary { left, right, .. } => {
                assert_eq!(number(&right), 3.0);
                match *left {
                    Expr::Binary { left, right, .. } => {
                        assert_eq!(number(&left), 1.0);
                        assert_eq!(number(&right), 2.0);
                    }
                    other => panic!("Expected nested difference, got {:?}", other),
                }
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_conditional_right_associativity() {
        let (expr, _) = parse("true ? 1 : false ? 2 : 3");

        match expr.unwrap() {
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                assert_eq!(*condition, Expr::Literal(LiteralValue::Bool(true)));
                assert_eq!(number(&then_branch), 1.0);
                assert!(matches!(*else_branch, Expr::Conditional { .. }));
            }
            other => panic!("Expected conditional, got {:?}", other),
        }
    }

    #[test]
    fn test_conditional_then_branch_takes_comma() {
        let (expr, reporter) = parse("a ? 1, 2 : 3");
        // `a` is an identifier, which is not a primary expression
        assert!(expr.is_none());
        assert_eq!(reporter.messages(), vec!["Expect expression."]);

        let (expr, _) = parse("nil ? 1, 2 : 3");
        match expr.unwrap() {
            Expr::Conditional { then_branch, .. } => match *then_branch {
                Expr::Binary { operator, .. } => assert_eq!(operator.kind, TokenKind::Comma),
                other => panic!("Expected comma expression, got {:?}", other),
            },
            other => panic!("Expected conditional, got {:?}", other),
        }
    }

    #[test]
    fn test_comma_is_lowest() {
        let (expr, _) = parse("1 == 2, 3 ? 4 : 5");

        match expr.unwrap() {
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                assert_eq!(operator.kind, TokenKind::Comma);
                assert!(matches!(*left, Expr::Binary { .. }));
                assert!(matches!(*right, Expr::Conditional { .. }));
            }
            other => panic!("Expected comma expression, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_unary() {
        let (expr, _) = parse("!!-4");

        match expr.unwrap() {
            Expr::Unary { operator, operand } => {
                assert_eq!(operator.kind, TokenKind::Bang);
                assert!(matches!(*operand, Expr::Unary { .. }));
            }
            other => panic!("Expected unary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("nil").0, Some(Expr::Literal(LiteralValue::Nil)));
        assert_eq!(
            parse("false").0,
            Some(Expr::Literal(LiteralValue::Bool(false)))
        );
        assert_eq!(
            parse("\"text\"").0,
            Some(Expr::Literal(LiteralValue::Str("text".to_string())))
        );
    }

    #[test]
    fn test_missing_right_paren() {
        let (expr, reporter) = parse("(1 + 2");

        assert!(expr.is_none());
        assert_eq!(reporter.messages(), vec!["Expect ')' after expression."]);
        assert_eq!(reporter.diagnostics[0].location, " at end");
    }

    #[test]
    fn test_missing_colon() {
        let (expr, reporter) = parse("true ? 1 ; 2");

        assert!(expr.is_none());
        assert_eq!(
            reporter.messages(),
            vec!["Expect ':' after then branch of conditional expression."]
        );
        assert_eq!(reporter.diagnostics[0].location, " at ';'");
    }

    #[test]
    fn test_no_expression() {
        let (expr, reporter) = parse(")");

        assert!(expr.is_none());
        assert_eq!(reporter.diagnostics.len(), 1);
        assert_eq!(reporter.messages(), vec!["Expect expression."]);
        assert_eq!(reporter.diagnostics[0].location, " at ')'");
    }

    #[test]
    fn test_dangling_operator() {
        let (expr, reporter) = parse("1 *");

        assert!(expr.is_none());
        assert_eq!(reporter.diagnostics[0].location, " at end");
    }

    fn grouped(depth: usize) -> String {
        format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_grouping_up_to_the_limit() {
        let (expr, reporter) = parse(&grouped(MAX_NESTING));

        assert!(!reporter.had_error());
        assert_eq!(expr.unwrap().height(), MAX_NESTING + 1);
    }

    #[test]
    fn test_grouping_past_the_limit() {
        let (expr, reporter) = parse(&grouped(MAX_NESTING + 1));

        assert!(expr.is_none());
        assert_eq!(reporter.messages(), vec!["Too much nesting."]);
        assert_eq!(reporter.diagnostics[0].location, " at '('");
    }

    #[test]
    fn test_deep_unary_and_conditional_chains() {
        let (expr, reporter) = parse(&format!("{}1", "-".repeat(10_000)));
        assert!(expr.is_none());
        assert_eq!(reporter.messages(), vec!["Too much nesting."]);

        let (expr, reporter) = parse(&format!("{}1", "true ? 1 : ".repeat(10_000)));
        assert!(expr.is_none());
        assert_eq!(reporter.messages(), vec!["Too much nesting."]);
    }

    #[test]
    fn test_long_operator_chain() {
        let (expr, reporter) = parse(&vec!["1"; MAX_HEIGHT].join(" + "));
        assert!(!reporter.had_error());
        assert_eq!(expr.unwrap().height(), MAX_HEIGHT);

        let (expr, reporter) = parse(&vec!["1"; 10_000].join(" + "));
        assert!(expr.is_none());
        assert_eq!(reporter.messages(), vec!["Too much nesting."]);
        assert_eq!(reporter.diagnostics[0].location, " at '+'");
    }
}

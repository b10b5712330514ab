//! Fully parenthesized prefix rendering of expression trees
//!
//! `(1 + 2) * 3` prints as `(* (group (+ 1 2)) 3)`. Conditionals print as
//! `(?: <condition> <then> <else>)`.

use super::ast::{Expr, ExprVisitor, LiteralValue};
use super::token::Token;

/// Render `expr` in prefix form.
pub fn print(expr: &Expr) -> String {
    AstPrinter.print(expr)
}

/// Reference visitor used for diagnostics and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::from("(");
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[operand])
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_conditional(
        &mut self,
        condition: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
    ) -> String {
        self.parenthesize("?:", &[condition, then_branch, else_branch])
    }
}

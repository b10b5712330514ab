// Syntax tree definitions for Lox expressions

use super::token::Token;
use std::fmt;

/// Value of a literal expression.
///
/// `true`, `false` and `nil` are typed values, so consumers never re-parse text.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Str(s) => write!(f, "{}", s),
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

/// Expression nodes. Each composite node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Grouping(Box<Expr>),
    Unary {
        operator: Token,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `condition ? then_branch : else_branch`
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn conditional(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Grouping(inner) => 1 + inner.height(),
            Expr::Unary { operand, .. } => 1 + operand.height(),
            Expr::Binary { left, right, .. } => 1 + left.height().max(right.height()),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let tallest = condition.height().max(then_branch.height());
                1 + tallest.max(else_branch.height())
            }
        }
    }

    /// Dispatch to the visitor method for this variant.
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: ExprVisitor + ?Sized,
    {
        match self {
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Unary { operator, operand } => visitor.visit_unary(operator, operand),
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_conditional(condition, then_branch, else_branch),
        }
    }
}

/// A traversal over expression trees.
///
/// New traversals implement this trait; [`Expr`] itself does not change.
pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, value: &LiteralValue) -> Self::Output;
    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;
    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> Self::Output;
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;
    fn visit_conditional(
        &mut self,
        condition: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
    ) -> Self::Output;
}

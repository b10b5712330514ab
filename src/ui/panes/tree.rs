//! Syntax tree pane rendering
//!
//! Trees are flattened into an indented outline by [`Outline`], a second
//! [`ExprVisitor`] next to the prefix printer.

use super::utils::{pane_block, render_scrolled_list};
use crate::parser::ast::{Expr, ExprVisitor, LiteralValue};
use crate::parser::token::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

/// One row of the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineRow {
    pub depth: usize,
    pub node: &'static str,
    pub detail: String,
}

/// Flattens a tree into pre-order rows, children indented one level deeper.
#[derive(Debug, Default)]
pub struct Outline {
    depth: usize,
    rows: Vec<OutlineRow>,
}

impl Outline {
    pub fn rows(expr: &Expr) -> Vec<OutlineRow> {
        let mut outline = Outline::default();
        expr.accept(&mut outline);
        outline.rows
    }

    fn node(&mut self, node: &'static str, detail: String, children: &[&Expr]) {
        self.rows.push(OutlineRow {
            depth: self.depth,
            node,
            detail,
        });

        self.depth += 1;
        for child in children {
            child.accept(self);
        }
        self.depth -= 1;
    }
}

impl ExprVisitor for Outline {
    type Output = ();

    fn visit_literal(&mut self, value: &LiteralValue) {
        let detail = match value {
            LiteralValue::Str(s) => format!("{:?}", s),
            other => other.to_string(),
        };
        self.node("Literal", detail, &[]);
    }

    fn visit_grouping(&mut self, inner: &Expr) {
        self.node("Grouping", String::new(), &[inner]);
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) {
        self.node("Unary", operator.lexeme.clone(), &[operand]);
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) {
        self.node("Binary", operator.lexeme.clone(), &[left, right]);
    }

    fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
        self.node(
            "Conditional",
            "?:".to_string(),
            &[condition, then_branch, else_branch],
        );
    }
}

fn detail_color(row: &OutlineRow) -> Color {
    if row.node != "Literal" {
        DEFAULT_THEME.operator
    } else if row.detail.starts_with('"') {
        DEFAULT_THEME.string
    } else {
        DEFAULT_THEME.number
    }
}

fn outline_item(row: OutlineRow) -> ListItem<'static> {
    let color = detail_color(&row);
    ListItem::new(Line::from(vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(
            row.node,
            Style::default()
                .fg(DEFAULT_THEME.node)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(row.detail, Style::default().fg(color)),
    ]))
}

/// Render the syntax tree pane. Each parsed expression gets a numbered header.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    trees: &[Expr],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let mut items = Vec::new();
    for (idx, tree) in trees.iter().enumerate() {
        items.push(ListItem::new(Span::styled(
            format!("#{}", idx + 1),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        items.extend(Outline::rows(tree).into_iter().map(outline_item));
    }

    let title = format!(" Syntax Tree ({}) ", trees.len());
    render_scrolled_list(
        frame,
        area,
        pane_block(&title, is_focused),
        items,
        "(no expressions parsed)",
        scroll_offset,
    );
}

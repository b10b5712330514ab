//! Token stream pane rendering

use super::utils::{pane_block, render_scrolled_list};
use crate::parser::token::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

fn kind_color(kind: TokenKind) -> Color {
    match kind {
        TokenKind::Number => DEFAULT_THEME.number,
        TokenKind::String => DEFAULT_THEME.string,
        TokenKind::Identifier => DEFAULT_THEME.fg,
        TokenKind::Eof => DEFAULT_THEME.comment,
        kind if kind.is_keyword() => DEFAULT_THEME.keyword,
        _ => DEFAULT_THEME.operator,
    }
}

fn token_item(token: &Token) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:4} ", token.line),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("{:<13}", format!("{:?}", token.kind)),
            Style::default().fg(kind_color(token.kind)),
        ),
        Span::styled(token.lexeme.clone(), Style::default().fg(DEFAULT_THEME.fg)),
    ];

    if let Some(literal) = &token.literal {
        spans.push(Span::styled(
            format!("  = {}", literal),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    ListItem::new(Line::from(spans))
}

/// Render the token pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let items = tokens.iter().map(token_item).collect();
    render_scrolled_list(
        frame,
        area,
        pane_block(&title, is_focused),
        items,
        "(no tokens)",
        scroll_offset,
    );
}

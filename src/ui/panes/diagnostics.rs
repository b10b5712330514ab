//! Diagnostics pane rendering

use super::utils::{pane_block, render_scrolled_list};
use crate::diagnostics::Diagnostic;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[Diagnostic],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let items = diagnostics
        .iter()
        .map(|d| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[line {}] ", d.line),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("Error{}: {}", d.location, d.message),
                    Style::default().fg(DEFAULT_THEME.error),
                ),
            ]))
        })
        .collect();

    let title = format!(" Diagnostics ({}) ", diagnostics.len());
    render_scrolled_list(
        frame,
        area,
        pane_block(&title, is_focused),
        items,
        "(no errors)",
        scroll_offset,
    );
}

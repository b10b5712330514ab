//! Helpers shared by the list-style panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
}

/// Rows that fit inside a bordered pane, at least one.
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `offset` so the last page of `total` rows is never scrolled past.
pub(crate) fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}

/// Render `items` as a scrollable list, or `empty` when there are none.
pub(crate) fn render_scrolled_list(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    items: Vec<ListItem<'_>>,
    empty: &str,
    scroll_offset: &mut usize,
) {
    if items.is_empty() {
        let paragraph = Paragraph::new(empty.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = visible_height(area);
    *scroll_offset = clamp_scroll(*scroll_offset, items.len(), visible);

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(10, 5, 20), 0);
        assert_eq!(clamp_scroll(usize::MAX, 30, 10), 20);
        assert_eq!(clamp_scroll(3, 30, 10), 3);
    }

    #[test]
    fn test_visible_height() {
        assert_eq!(visible_height(Rect::new(0, 0, 10, 12)), 10);
        assert_eq!(visible_height(Rect::new(0, 0, 10, 1)), 1);
    }
}

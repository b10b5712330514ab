//! Source code pane rendering with syntax highlighting
//!
//! Lines that carry at least one diagnostic are drawn on the error colour so
//! they stand out while scrolling. Highlighting is a per-line approximation: a
//! string that spans lines is only coloured on its first line.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::token::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for one line of Lox
fn highlight_source_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        // Comment runs to the end of the line
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            spans.push(Span::styled(&line[start..], Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        let mut end = i + 1;
        let style = if c == '"' {
            while end < chars.len() && chars[end].1 != '"' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            Style::default().fg(DEFAULT_THEME.string)
        } else if c.is_ascii_digit() {
            while end < chars.len() && (chars[end].1.is_ascii_digit() || chars[end].1 == '.') {
                end += 1;
            }
            Style::default().fg(DEFAULT_THEME.number)
        } else if c.is_ascii_alphabetic() || c == '_' {
            while end < chars.len() && is_word_char(chars[end].1) {
                end += 1;
            }
            let byte_end = chars.get(end).map_or(line.len(), |&(b, _)| b);
            word_style(&line[start..byte_end])
        } else if "!=<>+-*/?:,".contains(c) {
            Style::default().fg(DEFAULT_THEME.operator)
        } else if "(){}".contains(c) {
            Style::default().fg(DEFAULT_THEME.primary)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        let byte_end = chars.get(end).map_or(line.len(), |&(b, _)| b);
        spans.push(Span::styled(&line[start..byte_end], style));
        i = end;
    }

    Line::from(spans)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn word_style(word: &str) -> Style {
    match TokenKind::keyword(word) {
        Some(TokenKind::True | TokenKind::False | TokenKind::Nil) => {
            Style::default().fg(DEFAULT_THEME.number) // Constants
        }
        Some(_) => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_lines: &[usize],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible = visible_height(area);
    *scroll_offset = clamp_scroll(*scroll_offset, lines.len(), visible);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let has_error = error_lines.contains(&line_num);
            let mut content = highlight_source_line(line);

            let num_style = if has_error {
                // White text on red for visibility
                for span in &mut content.spans {
                    span.style = Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD);
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        highlight_source_line(line)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_highlight_splits_lexemes() {
        assert_eq!(
            texts("print 1.5 + \"a\" // done"),
            vec!["print", " ", "1.5", " ", "+", " ", "\"a\"", " ", "// done"]
        );
    }

    #[test]
    fn test_highlight_keeps_text() {
        let line = "(nil ? größe : 2) @";
        assert_eq!(texts(line).concat(), line);
    }

    #[test]
    fn test_keyword_styles() {
        assert_eq!(word_style("nil").fg, Some(DEFAULT_THEME.number));
        assert_eq!(word_style("while").fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(word_style("value").fg, Some(DEFAULT_THEME.fg));
    }
}

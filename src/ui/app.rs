//! Inspector application state and logic

use crate::diagnostics::{CollectingReporter, Diagnostic};
use crate::parser::ast::Expr;
use crate::parser::lexer::scan;
use crate::parser::parse::Parser;
use crate::parser::token::Token;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> tree -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Diagnostics => FocusedPane::Tree,
        }
    }
}

/// The inspector state: one scan and one parse of a script, kept for display.
pub struct App {
    pub source_code: String,
    pub file_name: String,

    pub tokens: Vec<Token>,
    pub trees: Vec<Expr>,
    pub diagnostics: Vec<Diagnostic>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Scan and parse `source_code`, collecting every diagnostic on the way.
    pub fn new(source_code: String, file_name: String) -> Self {
        let mut reporter = CollectingReporter::new();
        let tokens = scan(&source_code, &mut reporter);
        let trees = Parser::new(tokens.clone(), &mut reporter).parse_script();
        let diagnostics = reporter.diagnostics;

        debug!(
            "inspecting {}: {} tokens, {} trees, {} errors",
            file_name,
            tokens.len(),
            trees.len(),
            diagnostics.len()
        );

        let status_message = format!("{} tokens, {} expressions", tokens.len(), trees.len());

        App {
            source_code,
            file_name,
            tokens,
            trees,
            diagnostics,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            tokens_scroll: 0,
            tree_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Lines that carry at least one diagnostic, in ascending order.
    pub fn error_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.diagnostics.iter().map(|d| d.line).collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Tokens (top) | Tree (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let error_lines = self.error_lines();
        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            &error_lines,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[1],
            &self.trees,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.file_name,
            &self.status_message,
            self.diagnostics.len(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            // Offsets past the end are clamped when the pane renders
            KeyCode::Up | KeyCode::Char('k') => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }
}

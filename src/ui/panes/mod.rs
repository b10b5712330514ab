//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code with syntax highlighting and error lines marked
//! - [`tokens`]: The scanned token stream
//! - [`tree`]: Every parsed expression as an indented outline
//! - [`diagnostics`]: Lexical and syntax errors
//! - [`status`]: Status bar with keybindings and error count
//! - `utils`: Shared border, scrolling and list helpers
//!
//! Each pane module exports a `render_*` function taking the pane's data, its
//! focus flag and its scroll offset.

mod utils;

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

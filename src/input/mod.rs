//! Where command lines come from: a plain reader or the line editor.

mod completer;
mod editor;
mod plain;

pub use completer::{CommandCompleter, ShellCompleter};
pub use editor::EditorSource;
pub use plain::PlainSource;

use crate::core::theme::Theme;
use std::io::IsTerminal;

pub const PROMPT: &str = "> ";

/// Yields one raw line per call until input is exhausted.
///
/// `None` ends the session; read errors are reported the same way.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Called before each read so the prompt can follow `theme`.
    fn set_theme(&mut self, _theme: &'static Theme) {}

    /// Flushes anything worth keeping, such as history.
    fn finish(&mut self) {}
}

pub fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}

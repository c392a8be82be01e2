use inksac::prelude::*;
use std::io::IsTerminal;

use crate::core::theme::{Attr, Role, Theme, Tint};

/// True when stdout is a terminal that understands colour escapes.
pub fn color_enabled() -> bool {
    stdout_is_terminal() && !matches!(check_color_support(), Ok(ColorSupport::NoColor) | Err(_))
}

fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Colours the command word of the line being edited.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    enabled: bool,
}

impl SyntaxHighlighter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Paints the first word with the prompt colour when it names a builtin
    /// and with the error colour otherwise. Everything else, including
    /// whitespace, is left as typed so the cursor stays aligned.
    pub fn highlight_command(
        &self,
        line: &str,
        theme: &Theme,
        is_builtin: impl Fn(&str) -> bool,
    ) -> String {
        if !self.enabled {
            return line.to_string();
        }

        let start = line.len() - line.trim_start().len();
        let end = line[start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |offset| start + offset);
        if start == end {
            return line.to_string();
        }

        let word = &line[start..end];
        let role = if is_builtin(word) {
            Role::Prompt
        } else {
            Role::Error
        };
        format!(
            "{}{}{}",
            &line[..start],
            theme.attr(role).paint(word),
            &line[end..]
        )
    }

    pub fn highlight_prompt(&self, prompt: &str, theme: &Theme) -> String {
        if !self.enabled {
            return prompt.to_string();
        }
        theme.attr(Role::Prompt).paint(prompt)
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.enabled {
            return hint.to_string();
        }
        Attr::new(Tint::Gray, false).paint(hint)
    }
}

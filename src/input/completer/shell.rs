use std::borrow::Cow;

use super::command::CommandCompleter;
use crate::core::theme::{self, Theme};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Line editor helper: builtin completion plus themed highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    highlighter: SyntaxHighlighter,
    theme: &'static Theme,
}

impl ShellCompleter {
    pub fn new(commands: Vec<&'static str>, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands),
            highlighter,
            theme: theme::default_theme(),
        }
    }

    pub fn set_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
    }

    /// Start offset and candidates for the text before the cursor. Only the
    /// first word is completed; arguments get nothing.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before_cursor = &line[..pos];
        let start = before_cursor.len() - before_cursor.trim_start().len();
        let partial = &before_cursor[start..];

        if partial.contains(char::is_whitespace) {
            return (pos, Vec::new());
        }
        (start, self.command_completer.complete_command(partial))
    }

    /// Rest of the first builtin the typed word is a prefix of. Only offered
    /// with the cursor at the end of a lone first word.
    pub fn hint_for(&self, line: &str, pos: usize) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let partial = line.trim_start();
        if partial.is_empty() || partial.contains(char::is_whitespace) {
            return None;
        }
        self.command_completer
            .matches(partial)
            .into_iter()
            .find(|name| name.len() > partial.len() && name.starts_with(partial))
            .map(|name| name[partial.len()..].to_string())
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.is_enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(self.highlighter.highlight_command(line, self.theme, |word| {
            self.command_completer.is_builtin(word)
        }))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(self.highlighter.highlight_prompt(prompt, self.theme))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        self.hint_for(line, pos)
    }
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

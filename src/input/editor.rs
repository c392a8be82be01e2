use std::path::PathBuf;

use rustyline::{
    config::Configurer, error::ReadlineError, history::FileHistory, CompletionType, Config,
    Editor,
};

use super::{LineSource, ShellCompleter};
use crate::core::theme::Theme;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;

/// Interactive source backed by rustyline: editing, history, completion.
pub struct EditorSource {
    editor: Editor<ShellCompleter, FileHistory>,
    history_file: Option<PathBuf>,
}

impl EditorSource {
    pub fn new(
        commands: Vec<&'static str>,
        highlighter: SyntaxHighlighter,
        history_file: Option<PathBuf>,
        history_size: usize,
    ) -> Result<Self, ShellError> {
        let config = Config::builder()
            .max_history_size(history_size)?
            .completion_type(CompletionType::List)
            .build();
        let mut editor = Editor::<ShellCompleter, FileHistory>::with_config(config)?;

        editor.set_helper(Some(ShellCompleter::new(commands, highlighter)));
        editor.set_auto_add_history(true);

        if let Some(path) = &history_file {
            if let Err(e) = editor.load_history(path) {
                log::debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(EditorSource {
            editor,
            history_file,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => return Some(line),
                // Ctrl-C drops the current line.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return None,
                Err(e) => {
                    log::debug!("readline failed: {}", e);
                    return None;
                }
            }
        }
    }

    fn set_theme(&mut self, theme: &'static Theme) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_theme(theme);
        }
    }

    fn finish(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                log::warn!("could not save history to {}: {}", path.display(), e);
            }
        }
    }
}

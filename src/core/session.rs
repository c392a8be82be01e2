use std::env;
use std::path::{Path, PathBuf};

use super::commands::CommandError;
use super::theme::{self, Theme};
use crate::path::PathExpander;

/// Mutable state shared by every command in one shell run.
///
/// The working directory lives here rather than in the process, so several
/// sessions can coexist and handlers never touch `std::env::set_current_dir`.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
    theme: &'static Theme,
    path_expander: PathExpander,
}

impl Session {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            theme: theme::default_theme(),
            path_expander: PathExpander::new(),
        }
    }

    /// Starts in the directory the process was launched from.
    pub fn from_process() -> std::io::Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    pub fn with_path_expander(mut self, path_expander: PathExpander) -> Self {
        self.path_expander = path_expander;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn set_cwd(&mut self, dir: PathBuf) {
        log::debug!("working directory: {}", dir.display());
        self.cwd = dir;
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Switches the active theme; an unknown name leaves it unchanged.
    pub fn set_theme(&mut self, name: &str) -> Result<(), CommandError> {
        let theme = theme::find(name).ok_or_else(|| CommandError::ThemeNotFound(name.to_string()))?;
        self.theme = theme;
        Ok(())
    }

    /// Turns a user supplied path into one anchored at the session directory.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, CommandError> {
        Ok(self.path_expander.resolve(&self.cwd, raw)?)
    }
}

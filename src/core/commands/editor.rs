//! Builtins that hand the terminal to an external program.

use super::{required, Command, CommandError, Outcome};
use crate::core::session::Session;
use crate::process::{ProcessError, ProcessExecutor};

pub const DEFAULT_EDITOR: &str = "vim";

/// Opens a file in the configured editor and blocks until it exits.
#[derive(Debug, Clone)]
pub struct VimCommand {
    editor: String,
    executor: ProcessExecutor,
}

impl VimCommand {
    pub fn new(editor: String, executor: ProcessExecutor) -> Self {
        Self { editor, executor }
    }
}

impl Command for VimCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let file = required(args, "vim", "file name")?;
        let status = self
            .executor
            .run_attached(&self.editor, &[file], session.cwd())?;

        if !status.success() {
            return Err(ProcessError::Failed(self.editor.clone(), status).into());
        }
        Ok(Outcome::Nothing)
    }
}

#[derive(Debug, Clone)]
pub struct ClearCommand {
    executor: ProcessExecutor,
}

impl ClearCommand {
    pub fn new(executor: ProcessExecutor) -> Self {
        Self { executor }
    }

    fn program() -> (&'static str, &'static [&'static str]) {
        #[cfg(windows)]
        const CLEAR: (&str, &[&str]) = ("cmd", &["/c", "cls"]);
        #[cfg(not(windows))]
        const CLEAR: (&str, &[&str]) = ("clear", &[]);
        CLEAR
    }
}

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        let (program, args) = Self::program();
        let status = self.executor.run_attached(program, args, session.cwd())?;
        if !status.success() {
            log::debug!("{} exited with {}", program, status);
        }
        Ok(Outcome::Nothing)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_vim_requires_file() {
        let mut session = Session::new(std::env::temp_dir());
        let cmd = VimCommand::new(DEFAULT_EDITOR.to_string(), ProcessExecutor::default());

        let err = cmd.execute(&[], &mut session).unwrap_err();
        assert_eq!(err.to_string(), "vim: missing file name");
    }

    #[test]
    fn test_editor_runs_in_session_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = Session::new(tmp.path().to_path_buf());
        let cmd = VimCommand::new("touch".to_string(), ProcessExecutor::default());

        let outcome = cmd.execute(&["edited.txt".to_string()], &mut session);
        assert_eq!(outcome.unwrap(), Outcome::Nothing);
        assert!(fs::metadata(tmp.path().join("edited.txt")).is_ok());
    }

    #[test]
    fn test_editor_failure_is_reported() {
        let mut session = Session::new(std::env::temp_dir());
        let cmd = VimCommand::new("false".to_string(), ProcessExecutor::default());

        let result = cmd.execute(&["x".to_string()], &mut session);
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::Failed(_, _)))
        ));
    }

    #[test]
    fn test_missing_editor() {
        let mut session = Session::new(std::env::temp_dir());
        let cmd = VimCommand::new("sprig-missing-editor".to_string(), ProcessExecutor::default());

        let err = cmd.execute(&["x".to_string()], &mut session).unwrap_err();
        assert_eq!(err.to_string(), "command not found: sprig-missing-editor");
    }
}

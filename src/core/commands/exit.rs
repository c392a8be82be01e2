use super::{Command, CommandError, Outcome};
use crate::core::session::Session;

pub const FAREWELL: &str = "Exiting...";

#[derive(Debug, Clone, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit(FAREWELL.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_command() {
        let mut session = Session::new(PathBuf::from("/"));
        let result = ExitCommand.execute(&["ignored".to_string()], &mut session);
        assert_eq!(result.unwrap(), Outcome::Exit(FAREWELL.to_string()));
    }
}

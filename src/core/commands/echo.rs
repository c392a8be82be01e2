use super::{Command, CommandError, Outcome};
use crate::core::session::Session;

#[derive(Debug, Clone, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print(args.join(" ")))
    }
}

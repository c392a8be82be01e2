use super::{Command, CommandError, Outcome};
use crate::core::session::Session;
use chrono::Local;

/// `Mon Jan 2 15:04:05 +00:00 2006`
const DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %:z %Y";

#[derive(Debug, Clone, Default)]
pub struct PingCommand;

impl Command for PingCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print("pong".to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DateCommand;

impl Command for DateCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print(Local::now().format(DATE_FORMAT).to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct HelpCommand {
    names: Vec<&'static str>,
}

impl HelpCommand {
    pub fn new(names: Vec<&'static str>) -> Self {
        Self { names }
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print(format!("builtins: {}", self.names.join(" "))))
    }
}

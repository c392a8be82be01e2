use super::commands::{CommandError, Outcome, Registry};
use super::session::Session;

/// Splits a raw line into the command name and its arguments.
///
/// Whitespace runs separate tokens; there is no quoting or escaping.
/// Returns `None` for blank input.
pub fn tokenize(line: &str) -> Option<(&str, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    Some((name, parts.map(String::from).collect()))
}

#[derive(Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn dispatch(&self, line: &str, session: &mut Session) -> Result<Outcome, CommandError> {
        let Some((name, args)) = tokenize(line) else {
            return Ok(Outcome::Nothing);
        };

        let command = self
            .registry
            .get(name)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        log::debug!("dispatch {} {:?}", name, args);
        command.execute(&args, session)
    }
}

use super::{Command, CommandError, Outcome};
use crate::core::session::Session;
use crate::core::theme;

/// Lists themes, or switches to the named one.
#[derive(Debug, Clone, Default)]
pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        match args {
            [] => {
                let active = session.theme().name;
                let listing: Vec<String> = theme::names()
                    .map(|name| {
                        let marker = if name == active { '*' } else { ' ' };
                        format!("{} {}", marker, name)
                    })
                    .collect();
                Ok(Outcome::Print(listing.join("\n")))
            }
            [name] => {
                session.set_theme(name)?;
                Ok(Outcome::Nothing)
            }
            _ => Err(CommandError::InvalidArguments(
                "theme: too many arguments".to_string(),
            )),
        }
    }
}

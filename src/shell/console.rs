use std::io::{self, Stderr, Stdout, Write};

use crate::core::commands::{CommandError, Outcome};
use crate::core::theme::{Role, Theme};

/// Writes command results to the info and error channels, styled with the
/// active theme when colour is enabled.
pub struct Console<O, E> {
    out: O,
    err: E,
    color: bool,
}

impl Console<Stdout, Stderr> {
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn paint(&self, theme: &Theme, role: Role, text: &str) -> String {
        if self.color {
            theme.attr(role).paint(text)
        } else {
            text.to_string()
        }
    }

    pub fn info(&mut self, theme: &Theme, text: &str) -> io::Result<()> {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let painted = self.paint(theme, Role::Info, body);
        writeln!(self.out, "{}", painted)?;
        self.out.flush()
    }

    pub fn error(&mut self, theme: &Theme, text: &str) -> io::Result<()> {
        let painted = self.paint(theme, Role::Error, text);
        writeln!(self.err, "{}", painted)?;
        self.err.flush()
    }

    /// Displays one dispatch result. Returns `true` when the session should end.
    pub fn render(
        &mut self,
        result: &Result<Outcome, CommandError>,
        theme: &Theme,
    ) -> io::Result<bool> {
        match result {
            Ok(Outcome::Nothing) => Ok(false),
            Ok(Outcome::Print(text)) => self.info(theme, text).map(|_| false),
            Ok(Outcome::Exit(farewell)) => self.info(theme, farewell).map(|_| true),
            Err(e) => self.error(theme, &e.to_string()).map(|_| false),
        }
    }
}

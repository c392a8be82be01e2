use std::io::Write;

mod console;

pub use console::Console;

use crate::{
    core::{config::Config, Dispatcher, Registry, Session},
    error::ShellError,
    flags::Flags,
    highlight::{self, SyntaxHighlighter},
    input::{self, EditorSource, LineSource, PlainSource, PROMPT},
    process::CancelToken,
};

pub struct Shell {
    source: Box<dyn LineSource>,
    dispatcher: Dispatcher,
    session: Session,
    console: Console<std::io::Stdout, std::io::Stderr>,
    interrupt: CancelToken,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let config = Config::load(&flags)?;

        let mut session = Session::from_process()?;
        // Config validated the name already.
        if let Err(e) = session.set_theme(&config.theme) {
            log::warn!("{}", e);
        }

        // Ctrl-C raises this flag instead of killing the shell.
        let interrupt = CancelToken::on_interrupt()?;
        let dispatcher = Dispatcher::new(Registry::builtin(&config, interrupt.clone()));

        let interactive = !flags.is_set("plain") && input::stdin_is_terminal();
        let color = interactive && highlight::color_enabled();

        let source: Box<dyn LineSource> = if interactive {
            Box::new(EditorSource::new(
                dispatcher.registry().names(),
                SyntaxHighlighter::new(color),
                config.history_file.clone(),
                config.history_size,
            )?)
        } else {
            Box::new(PlainSource::stdin())
        };
        log::debug!("interactive: {}, colour: {}", interactive, color);

        Ok(Shell {
            source,
            dispatcher,
            session,
            console: Console::stdio(color),
            interrupt,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let result = drive(
            self.source.as_mut(),
            &self.dispatcher,
            &mut self.session,
            &mut self.console,
            Some(&self.interrupt),
        );
        self.source.finish();
        result
    }
}

/// The read-dispatch-print loop. Runs until the source is exhausted or a
/// command asks to exit; command failures are printed and never end it.
pub fn drive<S, O, E>(
    source: &mut S,
    dispatcher: &Dispatcher,
    session: &mut Session,
    console: &mut Console<O, E>,
    interrupt: Option<&CancelToken>,
) -> Result<(), ShellError>
where
    S: LineSource + ?Sized,
    O: Write,
    E: Write,
{
    loop {
        source.set_theme(session.theme());
        let Some(line) = source.read_line(PROMPT) else {
            break;
        };

        if let Some(interrupt) = interrupt {
            interrupt.reset();
        }

        let result = dispatcher.dispatch(&line, session);
        if let Err(e) = &result {
            log::debug!("{:?}", e);
        }
        match console.render(&result, session.theme()) {
            Ok(false) => {}
            Ok(true) => break,
            // A closed pipe on stdout or stderr ends the session quietly.
            Err(e) => {
                log::debug!("output failed: {}", e);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_output_ends_loop_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        let dispatcher = Dispatcher::new(Registry::builtin(&Config::default(), CancelToken::new()));
        let mut session = Session::new(tmp.path().to_path_buf());
        let mut source = PlainSource::new(Cursor::new("ping\ntouch after\n"), io::sink());
        let mut console = Console::new(ClosedPipe, io::sink(), false);

        let result = drive(&mut source, &dispatcher, &mut session, &mut console, None);
        assert!(result.is_ok());
        assert!(!tmp.path().join("after").exists());
    }
}

use std::collections::HashMap;
use std::io;

mod cd;
mod echo;
mod editor;
mod exit;
mod fs;
mod info;
mod net;
mod theme;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use editor::{ClearCommand, VimCommand, DEFAULT_EDITOR};
pub use exit::ExitCommand;
pub use fs::{CatCommand, LsCommand, MkdirCommand, PwdCommand, RmCommand, TouchCommand};
pub use info::{DateCommand, HelpCommand, PingCommand};
pub use net::{CurlCommand, IpCommand, IP_ECHO_URL};
pub use theme::ThemeCommand;

use super::config::Config;
use super::session::Session;
use crate::net::{HttpClient, NetError};
use crate::path::PathError;
use crate::process::{CancelToken, ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    InvalidArguments(String),
    Io {
        command: &'static str,
        source: io::Error,
    },
    Path(PathError),
    Network(NetError),
    Process(ProcessError),
    ThemeNotFound(String),
}

impl CommandError {
    /// Tags an OS error with the command that hit it, for use with `map_err`.
    pub fn io(command: &'static str) -> impl FnOnce(io::Error) -> CommandError {
        move |source| CommandError::Io { command, source }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "unknown command: {}", cmd),
            CommandError::MissingArgument { command, what } => {
                write!(f, "{}: missing {}", command, what)
            }
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::Io { command, source } => write!(f, "{}: {}", command, source),
            CommandError::Path(err) => write!(f, "{}", err),
            CommandError::Network(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
            CommandError::ThemeNotFound(name) => write!(f, "theme not found: {}", name),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<PathError> for CommandError {
    fn from(err: PathError) -> Self {
        CommandError::Path(err)
    }
}

impl From<NetError> for CommandError {
    fn from(err: NetError) -> Self {
        CommandError::Network(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// What a command produced, left to the caller to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Print(String),
    Exit(String),
}

pub trait Command {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError>;
}

/// First argument, or the error naming what was expected.
pub(crate) fn required<'a>(
    args: &'a [String],
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument { command, what })
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Ping(PingCommand),
    Pwd(PwdCommand),
    Ls(LsCommand),
    Cd(CdCommand),
    Echo(EchoCommand),
    Mkdir(MkdirCommand),
    Touch(TouchCommand),
    Rm(RmCommand),
    Cat(CatCommand),
    Clear(ClearCommand),
    Date(DateCommand),
    Curl(CurlCommand),
    Ip(IpCommand),
    Vim(VimCommand),
    Theme(ThemeCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, session),
            CommandType::Ping(cmd) => cmd.execute(args, session),
            CommandType::Pwd(cmd) => cmd.execute(args, session),
            CommandType::Ls(cmd) => cmd.execute(args, session),
            CommandType::Cd(cmd) => cmd.execute(args, session),
            CommandType::Echo(cmd) => cmd.execute(args, session),
            CommandType::Mkdir(cmd) => cmd.execute(args, session),
            CommandType::Touch(cmd) => cmd.execute(args, session),
            CommandType::Rm(cmd) => cmd.execute(args, session),
            CommandType::Cat(cmd) => cmd.execute(args, session),
            CommandType::Clear(cmd) => cmd.execute(args, session),
            CommandType::Date(cmd) => cmd.execute(args, session),
            CommandType::Curl(cmd) => cmd.execute(args, session),
            CommandType::Ip(cmd) => cmd.execute(args, session),
            CommandType::Vim(cmd) => cmd.execute(args, session),
            CommandType::Theme(cmd) => cmd.execute(args, session),
            CommandType::Help(cmd) => cmd.execute(args, session),
        }
    }
}

/// Builtin name to handler table. Filled once by [`Registry::builtin`] and
/// read-only afterwards.
#[derive(Clone)]
pub struct Registry {
    commands: HashMap<&'static str, CommandType>,
}

impl Registry {
    pub fn builtin(config: &Config, interrupt: CancelToken) -> Self {
        let http = HttpClient::new(config.http_timeout);
        let attached = ProcessExecutor::new(config.editor_timeout);

        let mut commands = HashMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("ping", CommandType::Ping(PingCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("ls", CommandType::Ls(LsCommand));
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand));
        commands.insert("touch", CommandType::Touch(TouchCommand));
        commands.insert("rm", CommandType::Rm(RmCommand));
        commands.insert("cat", CommandType::Cat(CatCommand));
        commands.insert(
            "clear",
            CommandType::Clear(ClearCommand::new(
                ProcessExecutor::new(config.editor_timeout).with_cancel(interrupt),
            )),
        );
        commands.insert("date", CommandType::Date(DateCommand));
        commands.insert("curl", CommandType::Curl(CurlCommand::new(http.clone())));
        commands.insert("ip", CommandType::Ip(IpCommand::new(http)));
        commands.insert(
            "vim",
            CommandType::Vim(VimCommand::new(config.editor.clone(), attached)),
        );
        commands.insert("theme", CommandType::Theme(ThemeCommand));

        let mut names: Vec<&'static str> = commands.keys().copied().collect();
        names.push("help");
        names.sort_unstable();
        commands.insert("help", CommandType::Help(HelpCommand::new(names)));

        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd as &dyn Command)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

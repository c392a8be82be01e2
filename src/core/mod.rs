pub mod commands;
pub mod config;
pub mod dispatch;
pub mod session;
pub mod theme;

pub use commands::{Command, CommandError, Outcome, Registry};
pub use dispatch::Dispatcher;
pub use session::Session;

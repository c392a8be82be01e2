use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::{CancelToken, ProcessError};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs a child attached to the shell's terminal and waits for it, bounded
/// by an optional timeout and an optional cancellation token.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl ProcessExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn run_attached(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        log::debug!("spawned {} (pid {})", program, child.id());

        self.wait(program, child)
    }

    fn wait(&self, program: &str, mut child: Child) -> Result<ExitStatus, ProcessError> {
        if self.timeout.is_none() && self.cancel.is_none() {
            return Ok(child.wait()?);
        }

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                Self::kill(&mut child)?;
                return Err(ProcessError::Cancelled(program.to_string()));
            }

            if let (Some(deadline), Some(timeout)) = (deadline, self.timeout) {
                if Instant::now() >= deadline {
                    Self::kill(&mut child)?;
                    return Err(ProcessError::TimedOut(program.to_string(), timeout));
                }
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    fn kill(child: &mut Child) -> Result<(), ProcessError> {
        log::debug!("killing pid {}", child.id());
        child.kill()?;
        child.wait()?;
        Ok(())
    }
}

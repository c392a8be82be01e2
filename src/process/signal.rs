use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ProcessError;

/// Shared flag a caller raises to abandon a blocking wait.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token raised by SIGINT. Registering the handler also keeps Ctrl-C
    /// from killing the shell while a command runs.
    pub fn on_interrupt() -> Result<Self, ProcessError> {
        let token = Self::new();
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&token.flag))
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;
        Ok(token)
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());

        token.cancel();
        assert!(other.is_cancelled());

        other.reset();
        assert!(!token.is_cancelled());
    }
}

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use super::LineSource;

/// Buffered reader for piped input or `--plain` sessions.
pub struct PlainSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl PlainSource<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PlainSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    pub fn into_prompt_out(self) -> W {
        self.prompt_out
    }
}

impl<R: BufRead, W: Write> LineSource for PlainSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = self
            .prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|_| self.prompt_out.flush())
        {
            log::debug!("prompt write failed: {}", e);
            return None;
        }

        // Bytes, not `read_line`: one non-UTF-8 line must not end the session.
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => None,
            Ok(_) => {
                if raw.ends_with(b"\n") {
                    raw.pop();
                    if raw.ends_with(b"\r") {
                        raw.pop();
                    }
                }
                Some(String::from_utf8_lossy(&raw).into_owned())
            }
            Err(e) => {
                log::debug!("input read failed: {}", e);
                None
            }
        }
    }
}

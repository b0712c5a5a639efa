// ABOUTME: Line-based interactive prompts on stdin/stdout

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks the user a question and returns the trimmed answer.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter over any reader/writer pair.
///
/// The reader is kept for the whole run so piped input spanning several
/// prompts is consumed one line per question. End of input reads as "".
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        // Raw bytes: a non-UTF-8 answer must not end the run
        let mut line = Vec::new();
        self.input
            .read_until(b'\n', &mut line)
            .context("Failed to read from standard input")?;

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

//! Line-oriented terminal I/O and field validation for interactive prompts.
//!
//! Parsers return typed [`InputError`]s; the `ask_*` helpers re-prompt on
//! them until the answer is valid or input ends.

use crate::error::{ConsoleError, Result};
use std::fmt::Display;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Message shown when a length answer is rejected.
pub const BAD_LENGTH: &str = "Bad input format (hh:mm), try again!";

/// Invalid answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Bad input format (hh:mm): '{0}'")]
    BadLength(String),

    #[error("'{0}' is not a valid year")]
    BadYear(String),

    #[error("A value is required")]
    Empty,
}

/// Parses `hh:mm` into total minutes.
///
/// Hours are unbounded; minutes must be below 60; neither may be negative.
pub fn parse_length(input: &str) -> std::result::Result<i64, InputError> {
    let bad = || InputError::BadLength(input.to_string());

    let (hours, minutes) = input.trim().split_once(':').ok_or_else(bad)?;
    let hours: i64 = hours.trim().parse().map_err(|_| bad())?;
    let minutes: i64 = minutes.trim().parse().map_err(|_| bad())?;

    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(bad());
    }

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(bad)
}

/// Parses a year.
pub fn parse_year(input: &str) -> std::result::Result<i32, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| InputError::BadYear(trimmed.to_string()))
}

/// Reads answers from `R` and writes prompts and messages to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a message followed by a newline.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Writes a label without a newline and flushes it.
    pub fn show_prompt(&mut self, label: &str) -> Result<()> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its line ending, or `None` at end of input.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .map_err(|e| ConsoleError::io(format!("Error reading standard input: {e}")))?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prints a label and reads the answer.
    pub async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        self.show_prompt(label)?;
        self.read_line().await
    }

    /// Asks until a non-blank answer is given; the answer is trimmed.
    pub async fn ask_non_empty(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(label).await? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
            self.say(InputError::Empty)?;
        }
    }

    /// Asks until a valid year is given.
    pub async fn ask_year(&mut self, label: &str) -> Result<Option<i32>> {
        loop {
            let Some(answer) = self.ask(label).await? else {
                return Ok(None);
            };
            match parse_year(&answer) {
                Ok(year) => return Ok(Some(year)),
                Err(e) => self.say(format!("{e}, try again!"))?,
            }
        }
    }

    /// Asks until a valid `hh:mm` length is given; returns minutes.
    pub async fn ask_length(&mut self, label: &str) -> Result<Option<i64>> {
        loop {
            let Some(answer) = self.ask(label).await? else {
                return Ok(None);
            };
            match parse_length(&answer) {
                Ok(minutes) => return Ok(Some(minutes)),
                Err(_) => self.say(BAD_LENGTH)?,
            }
        }
    }
}

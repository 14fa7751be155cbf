//! # Prompter
//!
//! Line-based prompts over any `BufRead`/`Write` pair.
//!
//! Every prompt reads exactly one line. Numeric prompts re-ask until they get
//! a usable number, so malformed input never reaches the league.

use crate::ShellError;
use std::io::{BufRead, Write};

/// Reads answers from `R` and writes prompts to `W`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a line of output.
    pub fn say(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
    /// line is treated as ordinary bad input rather than an I/O failure.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(ShellError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Read a non-negative integer, re-prompting on anything else.
    pub fn read_number(&mut self, prompt: &str) -> Result<usize, ShellError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected non-numeric input");
                    self.say("Invalid input. Please enter a number.")?;
                }
            }
        }
    }

    /// List `items` as `1.)  item` and read a selection.
    ///
    /// Returns the 0-based index, or `None` when there is nothing to choose.
    pub fn choose(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, ShellError> {
        if items.is_empty() {
            return Ok(None);
        }

        for (index, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}.)  {}", index + 1, item)?;
        }

        loop {
            let choice = self.read_number(prompt)?;
            if (1..=items.len()).contains(&choice) {
                return Ok(Some(choice - 1));
            }
            self.say(&format!(
                "Please choose a number between 1 and {}.",
                items.len()
            ))?;
        }
    }
}

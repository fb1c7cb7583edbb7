//! Console: line-oriented reader/writer over any `BufRead` + `Write` pair.
//!
//! Output is flushed before every read so prompts are visible. Clue lines can
//! be coloured with crossterm; everything else is plain text.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use anyhow::{bail, Result};
use crossterm::{
    style::{Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::game_view::{clue_color, INPUT_PROMPT};
use crate::types::ClueResult;

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    raw: Vec<u8>,
    line: String,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
            raw: Vec::with_capacity(64),
            line: String::with_capacity(64),
        }
    }

    /// Enable or disable coloured clue lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn write_clues(&mut self, result: &ClueResult) -> Result<()> {
        if self.color {
            self.output
                .queue(SetForegroundColor(clue_color(result)))?
                .queue(Print(result))?
                .queue(ResetColor)?;
            writeln!(self.output)?;
        } else {
            writeln!(self.output, "{result}")?;
        }
        Ok(())
    }

    /// Print the input prompt and read one line.
    ///
    /// The returned line keeps its terminator. Bytes that are not UTF-8 come
    /// back as U+FFFD, which no guess or replay answer accepts. Fails once
    /// input is closed.
    pub fn prompt(&mut self) -> Result<&str> {
        self.output.write_all(INPUT_PROMPT.as_bytes())?;
        self.output.flush()?;

        self.raw.clear();
        if self.input.read_until(b'\n', &mut self.raw)? == 0 {
            bail!("input closed");
        }
        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.raw));
        Ok(self.line.as_str())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

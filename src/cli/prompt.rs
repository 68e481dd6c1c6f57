use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Line-oriented prompts for fields the operator left off the command line.
/// Generic over the reader and writer so tests can script the answers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Return `value` if present, otherwise ask until a non-blank answer
    /// arrives.
    pub fn text_or_ask(&mut self, value: Option<String>, label: &str) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None => self.text(label),
        }
    }

    /// Ask for a required free-text value. Blank answers are asked again.
    pub fn text(&mut self, label: &str) -> Result<String> {
        loop {
            let line = self.read_answer(label)?;
            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }
            return Ok(answer.to_string());
        }
    }

    /// Ask for an optional value. A blank answer, or no input at all, yields
    /// `None`.
    pub fn optional_text(&mut self, label: &str) -> Result<Option<String>> {
        self.prompt(label)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("failed to read {label}"))?;
        if read == 0 {
            self.end_line()?;
        }
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    /// Return `value` if present, otherwise ask and parse with `FromStr`.
    pub fn parsed_or_ask<T>(&mut self, value: Option<T>, label: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match value {
            Some(value) => Ok(value),
            None => self.parse_with(label, str::parse::<T>),
        }
    }

    /// Ask until `parse` accepts the answer. Rejections are echoed back with
    /// the parser's message before asking again.
    pub fn parse_with<T, E, F>(&mut self, label: &str, parse: F) -> Result<T>
    where
        E: Display,
        F: Fn(&str) -> std::result::Result<T, E>,
    {
        loop {
            let answer = self.text(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    writeln!(self.output, "Error: {err}").context("failed to write prompt")?;
                }
            }
        }
    }

    fn read_answer(&mut self, label: &str) -> Result<String> {
        self.prompt(label)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("failed to read {label}"))?;
        if read == 0 {
            self.end_line()?;
            bail!("no value provided for {label}");
        }
        Ok(line)
    }

    /// Input ran out mid-prompt; finish the prompt line so later output
    /// starts on its own line.
    fn end_line(&mut self) -> Result<()> {
        writeln!(self.output).context("failed to write prompt")
    }

    fn prompt(&mut self, label: &str) -> Result<()> {
        write!(self.output, "{label}: ").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")
    }
}

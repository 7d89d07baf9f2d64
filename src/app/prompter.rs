use regex::Regex;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before a valid answer was given")]
    EndOfInput,
    #[error("{0:?} is not a selection key")]
    NotAKey(String),
    #[error("invalid input pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Reads validated answers from a line-oriented input, re-asking until the
/// answer matches.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts are written. Also used for rendering between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until a trimmed line matches `pattern`, printing `retry_message` after each miss.
    pub fn prompt(&mut self, message: &str, pattern: &Regex, retry_message: &str) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{}", message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::EndOfInput);
            }

            let answer = line.trim();
            if pattern.is_match(answer) {
                return Ok(answer.to_string());
            }
            tracing::debug!(answer, pattern = pattern.as_str(), "rejected input");
            writeln!(self.output, "{}", retry_message)?;
        }
    }

    /// Ask for one of `keys`.
    pub fn prompt_key(&mut self, message: &str, keys: &[u32]) -> Result<u32, PromptError> {
        let pattern = key_pattern(keys)?;
        let answer = self.prompt(message, &pattern, "\n\t\t This is not a valid option!\n")?;
        answer.parse::<u32>().map_err(|_| PromptError::NotAKey(answer))
    }

    /// Ask for a non-empty name of at most `max_length` characters.
    pub fn prompt_name(&mut self, message: &str, max_length: usize) -> Result<String, PromptError> {
        let pattern = Regex::new(&format!("^.{{1,{}}}$", max_length))?;
        let retry = format!("\n\t\t Name must not exceed {} characters!\n", max_length);
        self.prompt(message, &pattern, &retry)
    }
}

/// Anchored alternation of the given keys, e.g. `^(?:1|2|10)$`.
pub fn key_pattern(keys: &[u32]) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = keys.iter().map(u32::to_string).collect();
    Regex::new(&format!("^(?:{})$", alternatives.join("|")))
}

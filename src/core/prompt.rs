//! Line-based prompts over any reader/writer pair.
//!
//! End of input is reported as `None` rather than an error so callers can treat
//! a closed stdin (Ctrl-D, piped input running out) as a cancellation.
//! [`waiting_for_input`] tells an interrupt handler whether Ctrl-C arrived at a
//! prompt, where it means the same thing.

use crate::core::error::Result;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

static PENDING_READS: AtomicUsize = AtomicUsize::new(0);

/// True while some prompt is blocked reading an answer
pub fn waiting_for_input() -> bool {
    PENDING_READS.load(Ordering::SeqCst) > 0
}

struct PendingRead;

impl PendingRead {
    fn start() -> Self {
        PENDING_READS.fetch_add(1, Ordering::SeqCst);
        PendingRead
    }
}

impl Drop for PendingRead {
    fn drop(&mut self) {
        PENDING_READS.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Give back the writer, with everything printed so far
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` without a prompt
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Ask for one line. Returns the trimmed answer, `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = {
            let _pending = PendingRead::start();
            self.input.read_line(&mut line)?
        };
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Yes/no question; an empty answer picks `default`, `None` at end of input
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<Option<bool>> {
        let suffix = if default { "(Y/n):" } else { "(y/N):" };
        let Some(answer) = self.ask(&format!("{question} {suffix}"))? else {
            return Ok(None);
        };

        Ok(Some(match answer.to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        }))
    }

    /// Numbered choice, 1-based on screen. An empty answer picks the first
    /// option; anything unparseable asks again. `None` at end of input or when
    /// there is nothing to choose from.
    pub fn choose(&mut self, question: &str, options: &[String]) -> Result<Option<usize>> {
        if options.is_empty() {
            writeln!(self.output, "Nothing to choose from")?;
            return Ok(None);
        }

        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {:>2}. {}", i + 1, option)?;
        }

        loop {
            let Some(answer) = self.ask(&format!("{question} (1-{}) [1]:", options.len()))? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(0));
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Please enter a number between 1 and {}", options.len())?,
            }
        }
    }
}

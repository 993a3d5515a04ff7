//! Live confirmation prompt on the terminal.

use std::io::{self, BufRead, Write};

use crate::ports::prompt::Prompt;

/// Live prompt that asks on stderr and reads the answer from stdin.
///
/// Anything other than `y` or `yes` (case-insensitive) counts as "no",
/// including an empty line.
pub struct LivePrompt;

impl Prompt for LivePrompt {
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question} [y/N]: ")?;
        stderr.flush()?;

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            return Err("no answer on stdin".into());
        }
        Ok(is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

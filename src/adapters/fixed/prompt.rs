//! Scripted confirmation prompt.

use std::sync::Mutex;

use crate::ports::prompt::Prompt;

/// Prompt that gives a fixed answer and remembers what it was asked.
pub struct ScriptedPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Creates a prompt that always answers `answer`.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: Mutex::new(Vec::new()) }
    }

    /// Returns every question asked so far.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().expect("prompt lock poisoned").clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.asked.lock().expect("prompt lock poisoned").push(question.to_owned());
        Ok(self.answer)
    }
}

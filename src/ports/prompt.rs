//! Prompt port for interactive confirmation.

/// Asks the operator a yes/no question.
pub trait Prompt: Send + Sync {
    /// Shows `question` and returns `true` only on an affirmative answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read (closed stdin).
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

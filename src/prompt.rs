//! User input and interaction handling.
//! The [`Prompter`] trait lets the entry routine run against a real terminal
//! through dialoguer or against scripted answers in tests.

use crate::error::{Error, Result};
use dialoguer::Input;
use std::io::ErrorKind;

/// Source of interactive text answers.
pub trait Prompter {
    /// Asks a single question.
    ///
    /// # Returns
    /// * `Ok(Some(answer))` - the user answered
    /// * `Ok(None)` - the user cancelled the prompt
    fn input(&self, question: &str) -> Result<Option<String>>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, question: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text();
        into_answer(question, answer)
    }
}

/// Maps a dialoguer result to an answer, `None` when the prompt was cancelled.
fn into_answer(
    question: &str,
    answer: std::result::Result<String, dialoguer::Error>,
) -> Result<Option<String>> {
    match answer {
        Ok(answer) => Ok(Some(answer)),
        Err(dialoguer::Error::IO(e)) if is_cancellation(e.kind()) => {
            log::debug!("Prompt '{question}' cancelled: {e}");
            Ok(None)
        }
        Err(e) => Err(Error::PromptError(e.to_string())),
    }
}

/// Interrupted reads, a closed input stream and a non-terminal stdin all mean
/// "no answer".
fn is_cancellation(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Interrupted | ErrorKind::UnexpectedEof | ErrorKind::NotConnected
    )
}

//! Collection of the project name and database port.
//! Answers come from preloaded command-line values first, then from a
//! [`Prompter`].

use crate::constants::{PORT_PROMPT, PROJECT_NAME_PROMPT};
use crate::error::Result;
use crate::prompt::Prompter;

/// Inputs collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub port: String,
}

/// Values supplied up front, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct PreloadedAnswers {
    pub project_name: Option<String>,
    pub port: Option<String>,
}

/// Returns the preloaded value or asks the user for it.
fn answer_or_prompt(
    prompt: &dyn Prompter,
    preloaded: Option<String>,
    question: &str,
) -> Result<Option<String>> {
    match preloaded {
        Some(value) => {
            log::debug!("Using preloaded answer for '{question}': {value}");
            Ok(Some(value))
        }
        None => prompt.input(question),
    }
}

/// Collects the project name and database port.
///
/// Both questions are asked before the result is inspected, so a cancelled
/// first prompt still shows the second one.
///
/// # Returns
/// * `Ok(None)` if either question was cancelled
pub fn get_answers(
    prompt: &dyn Prompter,
    preloaded: PreloadedAnswers,
) -> Result<Option<Answers>> {
    let project_name = answer_or_prompt(prompt, preloaded.project_name, PROJECT_NAME_PROMPT)?;
    let port = answer_or_prompt(prompt, preloaded.port, PORT_PROMPT)?;

    match (project_name, port) {
        (Some(project_name), Some(port)) => Ok(Some(Answers { project_name, port })),
        _ => Ok(None),
    }
}

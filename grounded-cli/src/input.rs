//! Prompt acquisition and validation.

use std::io::{IsTerminal, Read};

use thiserror::Error;

/// Prompt-validation failures. User input errors, not system faults.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error(
        "No prompt provided. Either provide PROMPT argument or use --stdin flag.\n\
         Examples:\n  \
         grounded query 'Who won euro 2024?'\n  \
         echo 'Who won euro 2024?' | grounded query --stdin"
    )]
    Missing,

    #[error(
        "No input available from stdin. \
         Use --stdin flag with piped input: echo 'question' | grounded query --stdin"
    )]
    StdinUnavailable,

    #[error(
        "Empty input received from stdin. \
         Provide non-empty input: echo 'question' | grounded query --stdin"
    )]
    StdinEmpty,
}

/// Returns the prompt from the positional argument or stdin.
///
/// A positional prompt is returned exactly as given; stdin input is
/// trimmed. `use_stdin` takes precedence over the positional argument.
pub fn validate_prompt(prompt: Option<&str>, use_stdin: bool) -> Result<String, PromptError> {
    if use_stdin {
        return read_stdin();
    }

    match prompt {
        Some(prompt) if !prompt.is_empty() => Ok(prompt.to_string()),
        _ => Err(PromptError::Missing),
    }
}

fn read_stdin() -> Result<String, PromptError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(PromptError::StdinUnavailable);
    }

    let mut content = String::new();
    stdin
        .read_to_string(&mut content)
        .map_err(|_| PromptError::StdinUnavailable)?;

    let content = content.trim();
    if content.is_empty() {
        return Err(PromptError::StdinEmpty);
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_prompt_is_returned_unchanged() {
        let prompt = "Who won euro 2024?";
        assert_eq!(validate_prompt(Some(prompt), false).unwrap(), prompt);
    }

    #[test]
    fn missing_prompt_is_rejected() {
        let err = validate_prompt(None, false).unwrap_err();
        assert!(err.to_string().starts_with("No prompt provided"));
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let err = validate_prompt(Some(""), false).unwrap_err();
        assert!(err.to_string().starts_with("No prompt provided"));
    }

    #[test]
    fn surrounding_whitespace_is_kept_on_positional_prompts() {
        assert_eq!(validate_prompt(Some("  padded  "), false).unwrap(), "  padded  ");
    }
}

//! Confirmation port used by batch removal.

use crate::error::ApiError;

/// Yes/no question asked once per removal candidate.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> Result<bool, ApiError>;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> Result<bool, ApiError> {
        Ok(self(message))
    }
}

/// Interactive prompt on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool, ApiError> {
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| ApiError::Prompt(e.to_string()))
    }
}

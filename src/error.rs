//! Error classes surfaced to the user by calculator and acquisition actions.
//!
//! Every variant is terminal for the action that raised it only: the action
//! aborts, session state is left as it was and the message is shown in the
//! advisory slot.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// A user-supplied value is missing, non-numeric or not strictly positive.
    #[error("{0}")]
    Validation(String),
    /// The action was attempted out of order.
    #[error("{0}")]
    State(String),
    /// External record acquisition failed.
    #[error("{0}")]
    Fetch(String),
}

impl CalcError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch game data. Please check the URL and try again.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_message() {
        let err = CalcError::validation("Please enter valid positive numbers for both fields.");
        assert_eq!(
            err.to_string(),
            "Please enter valid positive numbers for both fields."
        );
        assert!(err.is_validation());
        assert!(!err.is_state());
    }
}

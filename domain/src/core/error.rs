//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Seed prompt cannot be empty")]
    EmptySeedPrompt,

    #[error("A debate is already running in this session")]
    DebateAlreadyRunning,

    #[error("No debate has been started in this session")]
    DebateNotStarted,

    #[error("Operation cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::DebateNotStarted.to_string(),
            "No debate has been started in this session"
        );
        assert_eq!(
            DomainError::EmptySeedPrompt.to_string(),
            "Seed prompt cannot be empty"
        );
        assert_eq!(DomainError::Cancelled.to_string(), "Operation cancelled");
    }
}

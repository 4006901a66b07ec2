//! Authentication result types
//!
//! Defines the outcome returned by a single authentication check.

/// Outcome of one authentication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    UnknownUser,
    InvalidPassword,
}

impl AuthOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, AuthOutcome::Success)
    }

    /// Activity log line recorded for this outcome.
    pub fn log_message(self) -> &'static str {
        match self {
            AuthOutcome::Success => "RESULT: success",
            AuthOutcome::UnknownUser => "RESULT: failure (unknown user)",
            AuthOutcome::InvalidPassword => "RESULT: failure (invalid password)",
        }
    }
}

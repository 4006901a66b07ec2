//! Session result types
//!
//! Defines how an interactive login session ended.

/// Final state of a login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A login succeeded for the contained username.
    Authenticated(String),
    /// Every allowed attempt failed.
    Exhausted,
    /// Input ended before a login succeeded or attempts ran out.
    InputClosed,
}

impl SessionOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionOutcome::Authenticated(_))
    }
}

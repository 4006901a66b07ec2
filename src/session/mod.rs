//! Interactive login session
//!
//! Prompts for credentials, drives the login system and replays the
//! activity log when the session ends.

pub mod handler;
pub mod results;

pub use handler::run_session;
pub use results::SessionOutcome;

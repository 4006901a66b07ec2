//! Authentication system
//!
//! Handles credential storage and username/password validation.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{CredentialStore, SEED_USERS};
pub use results::AuthOutcome;
pub use validator::{LogMode, LoginSystem};

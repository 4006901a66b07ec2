pub mod activity;
pub mod auth;
pub mod config;
pub mod error;
pub mod session;

pub use activity::ActivityLog;
pub use auth::{CredentialStore, LogMode, LoginSystem};
pub use config::DemoConfig;
pub use session::{SessionOutcome, run_session};

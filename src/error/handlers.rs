//! Error handlers
//!
//! Reports errors that end a demo run.

use crate::error::types::DemoError;
use log::error;

/// Report a fatal demo error
pub fn handle_error(err: &DemoError) {
    error!("Login demo error: {}", err);
}

/// Process exit status for an error
pub fn error_to_exit_code(err: &DemoError) -> u8 {
    match err {
        DemoError::Config(_) => 2,
        DemoError::Io(_) => 1,
    }
}

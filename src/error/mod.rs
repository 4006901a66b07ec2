//! Error handling
//!
//! Defines error types and handling for the login demo.

pub mod handlers;
pub mod types;

pub use handlers::{error_to_exit_code, handle_error};
pub use types::*;

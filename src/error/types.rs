//! Error types
//!
//! Failures of the demo shell around the login system. Authentication itself
//! has no error path: a rejected login is a normal `false`.

use std::fmt;
use std::io;

/// Top-level error for a demo run.
#[derive(Debug)]
pub enum DemoError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Config(e) => write!(f, "Configuration error: {}", e),
            DemoError::Io(e) => write!(f, "Terminal I/O error: {}", e),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Config(e) => Some(e),
            DemoError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for DemoError {
    fn from(error: config::ConfigError) -> Self {
        DemoError::Config(error)
    }
}

impl From<io::Error> for DemoError {
    fn from(error: io::Error) -> Self {
        DemoError::Io(error)
    }
}

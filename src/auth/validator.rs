//! Authentication validator
//!
//! Checks a username/password pair against the credential store and records
//! every attempt in an activity sink.

use log::debug;
use serde::Deserialize;

use super::credentials::CredentialStore;
use super::results::AuthOutcome;
use crate::activity::EventSink;

/// Selects what the attempt record line contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Attempt lines carry the username only.
    #[default]
    Secure,
    /// Attempt lines also carry the submitted password. This leaks credentials
    /// into the activity log and only exists to demonstrate that leak.
    Insecure,
}

impl LogMode {
    /// Builds the attempt record line for this mode.
    pub fn attempt_line(self, username: &str, password: &str) -> String {
        match self {
            LogMode::Secure => format!("ATTEMPT user={username}"),
            LogMode::Insecure => format!("ATTEMPT user={username} password={password}"),
        }
    }
}

/// Username/password authenticator writing to an activity sink.
pub struct LoginSystem<S> {
    store: CredentialStore,
    sink: S,
    mode: LogMode,
}

impl<S: EventSink> LoginSystem<S> {
    /// Creates a login system with secure logging.
    pub fn new(store: CredentialStore, sink: S) -> Self {
        Self::with_mode(store, sink, LogMode::Secure)
    }

    pub fn with_mode(store: CredentialStore, sink: S, mode: LogMode) -> Self {
        Self { store, sink, mode }
    }

    /// Runs one check and returns its three-way outcome.
    ///
    /// Exactly two events are recorded: the attempt line first, then the
    /// result line. Inputs are compared verbatim.
    pub fn check(&mut self, username: &str, password: &str) -> AuthOutcome {
        self.sink.record(self.mode.attempt_line(username, password));

        let outcome = match self.store.lookup(username) {
            None => AuthOutcome::UnknownUser,
            Some(stored) if stored != password => AuthOutcome::InvalidPassword,
            Some(_) => AuthOutcome::Success,
        };
        debug!("Authentication for {:?} finished: {:?}", username, outcome);

        self.sink.record(outcome.log_message().to_string());
        outcome
    }

    /// Returns true only for the exact stored username/password pair.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        self.check(username, password).is_success()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn mode(&self) -> LogMode {
        self.mode
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}

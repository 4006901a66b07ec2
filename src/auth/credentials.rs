//! Credential storage
//!
//! Read-only username to password lookup used by the login system.

use std::collections::HashMap;

/// Seed accounts loaded when no other user table is configured.
pub const SEED_USERS: [(&str, &str); 3] = [
    ("alice", "password123"),
    ("bob", "letmein"),
    ("charlie", "qwerty"),
];

/// Plaintext credential store. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
}

impl CredentialStore {
    /// Store holding the demo seed accounts.
    pub fn seeded() -> Self {
        SEED_USERS.into_iter().collect()
    }

    /// Returns the stored password for `username`, if the user exists.
    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.entries.get(username).map(String::as_str)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known usernames in sorted order.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<U, P> FromIterator<(U, P)> for CredentialStore
where
    U: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (U, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(user, pass)| (user.into(), pass.into()))
                .collect(),
        }
    }
}

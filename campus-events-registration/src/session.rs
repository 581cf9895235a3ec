use core::fmt;
use std::collections::HashMap;

use rand::{thread_rng, Rng as _};
use tracing::{debug, info};

use crate::auth::authenticate;
use crate::error::AuthError;
use crate::user::{User, UserId};

const SESSION_TOKEN_LENGTH: usize = 30;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    fn generate() -> Self {
        Self(
            thread_rng()
                .sample_iter(&rand::distributions::Alphanumeric)
                .take(SESSION_TOKEN_LENGTH)
                .map(char::from)
                .collect(),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// don't leak tokens into logs
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Logged in users by session token.
///
/// Users are kept per email address, so logging in again with the same address gets back the
/// same user and its registrations. Each user has at most one session; logging in again ends
/// the previous one.
#[derive(Debug)]
pub struct SessionStore {
    email_domain: String,
    users: HashMap<String, User>,
    sessions: HashMap<SessionToken, String>,
    next_user_id: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new(email_domain: impl Into<String>) -> Self {
        Self {
            email_domain: email_domain.into(),
            users: HashMap::new(),
            sessions: HashMap::new(),
            next_user_id: 1,
        }
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        let identity = authenticate(email, password, &self.email_domain)?;
        let next_user_id = &mut self.next_user_id;
        let user = self
            .users
            .entry(identity.email.clone())
            .or_insert_with(|| {
                let id = UserId::from(next_user_id.to_string());
                *next_user_id += 1;
                User::new(id, identity.email.clone(), identity.name)
            });
        info!(user = %user.id, "logged in");
        self.sessions.retain(|_, email| *email != identity.email);
        let token = SessionToken::generate();
        self.sessions.insert(token.clone(), identity.email);
        Ok(token)
    }

    /// Returns whether there was a session for the token.
    pub fn logout(&mut self, token: &SessionToken) -> bool {
        let existed = self.sessions.remove(token).is_some();
        debug!(existed, "logged out");
        existed
    }

    #[must_use]
    pub fn is_authenticated(&self, token: &SessionToken) -> bool {
        self.sessions.contains_key(token)
    }

    #[must_use]
    pub fn user(&self, token: &SessionToken) -> Option<&User> {
        self.sessions
            .get(token)
            .and_then(|email| self.users.get(email))
    }

    pub fn user_mut(&mut self, token: &SessionToken) -> Option<&mut User> {
        self.sessions
            .get(token)
            .and_then(|email| self.users.get_mut(email))
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

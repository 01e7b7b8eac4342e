//! Session context
//!
//! Identity is carried explicitly through the calls that need it instead of
//! living in process-wide state. The auth flow produces a [`Session`]; use
//! cases receive it by reference.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id, email: None }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Who is making the request. Starts anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<AuthenticatedUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|user| &user.id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the current user (login) and return the previous one.
    pub fn sign_in(&mut self, user: AuthenticatedUser) -> Option<AuthenticatedUser> {
        self.user.replace(user)
    }

    pub fn sign_out(&mut self) -> Option<AuthenticatedUser> {
        self.user.take()
    }
}

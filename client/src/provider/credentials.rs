//! Credential verification for the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page only needs to know where a successful sign-in lands.
//! [`DemoCredentials`] is the stand-in until an identity provider backs the
//! same [`CredentialVerifier`] contract. It issues no session and stores no
//! identity.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::Arc;

/// Where a verified user is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginDestination {
    Admin,
    Broker,
}

impl LoginDestination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Broker => "/dashboard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Checks an email/password pair.
pub trait CredentialVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidCredentials`] when the pair is not accepted.
    fn verify(&self, email: &str, password: &str) -> Result<LoginDestination, LoginError>;
}

/// Shared handle provided through Leptos context.
pub type SharedCredentialVerifier = Arc<dyn CredentialVerifier>;

pub const DEMO_ADMIN_EMAIL: &str = "admin@maxhealth.ae";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";
pub const DEMO_BROKER_EMAIL: &str = "demo@maxhealth.ae";
pub const DEMO_BROKER_PASSWORD: &str = "password123";

/// Fixed demo accounts: one admin, one broker.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoCredentials;

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<LoginDestination, LoginError> {
        match (email, password) {
            (DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD) => Ok(LoginDestination::Admin),
            (DEMO_BROKER_EMAIL, DEMO_BROKER_PASSWORD) => Ok(LoginDestination::Broker),
            _ => Err(LoginError::InvalidCredentials),
        }
    }
}

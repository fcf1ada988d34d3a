//! Sign-in form state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::provider::credentials::{DEMO_BROKER_EMAIL, DEMO_BROKER_PASSWORD, LoginDestination, LoginError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
    pub busy: bool,
    pub error: Option<LoginError>,
}

impl Default for LoginState {
    /// Prefilled with the demo broker account.
    fn default() -> Self {
        Self {
            email: DEMO_BROKER_EMAIL.to_owned(),
            password: DEMO_BROKER_PASSWORD.to_owned(),
            remember_me: false,
            show_password: false,
            busy: false,
            error: None,
        }
    }
}

impl LoginState {
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.email.is_empty() && !self.password.is_empty()
    }

    /// Mark the attempt in flight. Returns `false` when submitting is not
    /// allowed right now.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Record the verifier's answer; the destination is returned for
    /// navigation.
    pub fn finish(&mut self, outcome: Result<LoginDestination, LoginError>) -> Option<LoginDestination> {
        self.busy = false;
        match outcome {
            Ok(destination) => Some(destination),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }
}

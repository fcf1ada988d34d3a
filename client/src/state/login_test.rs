use super::*;

use crate::provider::credentials::{CredentialVerifier, DemoCredentials};

fn attempt(state: &mut LoginState) -> Option<LoginDestination> {
    assert!(state.begin());
    let outcome = DemoCredentials.verify(&state.email, &state.password);
    state.finish(outcome)
}

#[test]
fn default_is_prefilled_demo_broker() {
    let state = LoginState::default();
    assert_eq!(state.email, "demo@maxhealth.ae");
    assert_eq!(state.password, "password123");
    assert!(state.can_submit());
}

#[test]
fn submit_requires_both_fields() {
    let mut state = LoginState { password: String::new(), ..LoginState::default() };
    assert!(!state.can_submit());
    assert!(!state.begin());

    state.password = "x".to_owned();
    state.email.clear();
    assert!(!state.can_submit());
}

#[test]
fn admin_login_navigates_to_admin() {
    let mut state =
        LoginState { email: "admin@maxhealth.ae".to_owned(), password: "admin123".to_owned(), ..LoginState::default() };
    let destination = attempt(&mut state);
    assert_eq!(destination.map(LoginDestination::path), Some("/admin"));
    assert!(state.error.is_none());
}

#[test]
fn broker_login_navigates_to_dashboard() {
    let mut state = LoginState::default();
    assert_eq!(attempt(&mut state).map(LoginDestination::path), Some("/dashboard"));
}

#[test]
fn wrong_pair_shows_error_without_destination() {
    let mut state = LoginState { password: "wrong".to_owned(), ..LoginState::default() };
    assert_eq!(attempt(&mut state), None);
    assert_eq!(state.error, Some(LoginError::InvalidCredentials));
    assert!(!state.busy);
}

#[test]
fn new_attempt_clears_previous_error() {
    let mut state = LoginState { password: "wrong".to_owned(), ..LoginState::default() };
    attempt(&mut state);
    assert!(state.begin());
    assert!(state.error.is_none());
    assert!(!state.can_submit());
}

#[test]
fn dismiss_clears_error() {
    let mut state = LoginState { error: Some(LoginError::InvalidCredentials), ..LoginState::default() };
    state.dismiss_error();
    assert!(state.error.is_none());
}

#[test]
fn password_visibility_toggles_input_type() {
    let mut state = LoginState::default();
    assert_eq!(state.password_input_type(), "password");
    state.show_password = true;
    assert_eq!(state.password_input_type(), "text");
}

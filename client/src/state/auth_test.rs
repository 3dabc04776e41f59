use super::*;
use crate::test_helpers::sample_user;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_initializing() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), SessionPhase::Initializing);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn settle_without_user_is_anonymous() {
    let mut state = AuthState::default();
    state.settle(None);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn settle_with_user_is_authenticated() {
    let mut state = AuthState::default();
    state.settle(Some(sample_user()));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(state.is_authenticated());
}

#[test]
fn begin_clears_previous_error_and_marks_loading() {
    let mut state = AuthState::default();
    state.fail("Invalid credentials");
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase(), SessionPhase::Initializing);
}

#[test]
fn fail_drops_user_and_records_message() {
    let mut state = AuthState::default();
    state.succeed(sample_user());
    state.begin();
    state.fail("Invalid credentials");
    assert_eq!(state.user, None);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn succeed_sets_user_and_clears_loading() {
    let mut state = AuthState::default();
    state.begin();
    state.succeed(sample_user());
    assert_eq!(state.user, Some(sample_user()));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn sign_out_is_anonymous_without_error() {
    let mut state = AuthState::default();
    state.succeed(sample_user());
    state.sign_out();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.error.is_none());
}

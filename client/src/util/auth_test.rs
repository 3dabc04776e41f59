use super::*;
use crate::test_helpers::sample_user;

fn state(user: bool, loading: bool) -> AuthState {
    AuthState { user: user.then(sample_user), loading, error: None }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&state(false, false)));
    assert_eq!(guard_decision(&state(false, false)), GuardDecision::Redirect("/login"));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&state(false, true)));
    assert_eq!(guard_decision(&state(false, true)), GuardDecision::Pending);
}

#[test]
fn pending_while_loading_even_with_cached_user() {
    assert_eq!(guard_decision(&state(true, true)), GuardDecision::Pending);
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&state(true, false)));
    assert_eq!(guard_decision(&state(true, false)), GuardDecision::Allow);
}

#[test]
fn initial_state_never_redirects() {
    assert_eq!(guard_decision(&AuthState::default()), GuardDecision::Pending);
}

#[test]
fn error_alone_does_not_change_decision() {
    let mut failed = state(false, false);
    failed.error = Some("Invalid credentials".to_owned());
    assert_eq!(guard_decision(&failed), GuardDecision::Redirect(LOGIN_PATH));
}

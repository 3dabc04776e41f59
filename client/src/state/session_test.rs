use std::sync::{Arc, Mutex};

use super::*;
use crate::state::auth::SessionPhase;
use crate::test_helpers::{
    ScriptedTransport, auth_client, auth_success_body, offline, response, sample_tokens,
    sample_user, signed_in_storage,
};
use crate::util::storage::MemoryStorage;
use crate::util::token_store::TokenStore;

fn session(
    storage: MemoryStorage,
    transport: ScriptedTransport,
) -> Session<MemoryStorage, ScriptedTransport> {
    Session::new(auth_client(storage, transport))
}

fn recorder(
    session: &Session<MemoryStorage, ScriptedTransport>,
) -> (Subscription, Arc<Mutex<Vec<AuthState>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = session.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
    (subscription, seen)
}

fn credentials() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "hunter22".to_owned() }
}

// =============================================================
// check
// =============================================================

#[test]
fn starts_initializing() {
    let session = session(MemoryStorage::new(), ScriptedTransport::default());
    assert_eq!(session.state().phase(), SessionPhase::Initializing);
}

#[test]
fn check_with_empty_store_is_anonymous() {
    let session = session(MemoryStorage::new(), ScriptedTransport::default());
    session.check();
    assert_eq!(session.state().phase(), SessionPhase::Anonymous);
}

#[test]
fn check_restores_persisted_user() {
    let session = session(signed_in_storage(), ScriptedTransport::default());
    session.check();
    assert_eq!(session.state().user, Some(sample_user()));
    assert!(session.is_authenticated());
}

#[test]
fn check_runs_once_per_session() {
    let storage = MemoryStorage::new();
    let session = session(storage.clone(), ScriptedTransport::default());
    let (_subscription, seen) = recorder(&session);

    session.check();
    TokenStore::new(storage).write(&sample_tokens(), &sample_user()).unwrap();
    session.check();
    session.clone().check();

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(session.state().phase(), SessionPhase::Anonymous);
}

// =============================================================
// login / register
// =============================================================

#[tokio::test]
async fn failed_login_records_error_and_stays_anonymous() {
    let transport = ScriptedTransport::new([response(
        401,
        r#"{"success":false,"message":"Invalid credentials"}"#,
    )]);
    let session = session(MemoryStorage::new(), transport);
    session.check();

    let err = session.login(&credentials()).await.unwrap_err();

    let state = session.state();
    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn login_notifies_loading_then_authenticated() {
    let session =
        session(MemoryStorage::new(), ScriptedTransport::new([response(200, auth_success_body())]));
    session.check();
    let (_subscription, seen) = recorder(&session);

    let user = session.login(&credentials()).await.unwrap();

    assert_eq!(user, sample_user());
    let phases: Vec<SessionPhase> = seen.lock().unwrap().iter().map(AuthState::phase).collect();
    assert_eq!(phases, vec![SessionPhase::Initializing, SessionPhase::Authenticated]);
}

#[tokio::test]
async fn new_attempt_clears_previous_error() {
    let transport = ScriptedTransport::new([offline(), response(200, auth_success_body())]);
    let session = session(MemoryStorage::new(), transport);
    let (_subscription, seen) = recorder(&session);

    session.login(&credentials()).await.unwrap_err();
    session.login(&credentials()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen[1].error.is_some());
    assert!(seen[2].loading);
    assert!(seen[2].error.is_none());
    assert!(session.state().error.is_none());
}

#[tokio::test]
async fn register_created_ends_authenticated() {
    let session =
        session(MemoryStorage::new(), ScriptedTransport::new([response(201, auth_success_body())]));
    let request = RegistrationRequest {
        email: "a@b.com".to_owned(),
        password: "Secret123!".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        date_of_birth: "1990-05-01".to_owned(),
        gender: crate::net::types::Gender::Female,
        country: "Nigeria".to_owned(),
        phone_number: None,
        accept_terms: true,
    };

    session.register(&request).await.unwrap();

    assert_eq!(session.state().phase(), SessionPhase::Authenticated);
    assert_eq!(session.client().current_user(), Some(sample_user()));
}

#[tokio::test]
async fn later_resolution_overwrites_earlier_success() {
    let transport = ScriptedTransport::new([
        response(200, auth_success_body()),
        response(401, r#"{"message":"Invalid credentials"}"#),
    ]);
    let session = session(MemoryStorage::new(), transport);

    session.login(&credentials()).await.unwrap();
    session.login(&credentials()).await.unwrap_err();

    let state = session.state();
    assert_eq!(state.user, None);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn complete_sso_ends_authenticated() {
    let user = serde_json::to_value(sample_user()).unwrap();
    let me = serde_json::json!({ "success": true, "data": { "user": user } });
    let session =
        session(MemoryStorage::new(), ScriptedTransport::new([response(200, me.to_string())]));

    session.complete_sso(sample_tokens()).await.unwrap();

    assert_eq!(session.state().phase(), SessionPhase::Authenticated);
}

// =============================================================
// logout / invalidate
// =============================================================

#[tokio::test]
async fn logout_is_anonymous_even_when_server_unreachable() {
    let storage = signed_in_storage();
    let session = session(storage.clone(), ScriptedTransport::new([offline()]));
    session.check();

    session.logout().await;

    assert_eq!(session.state().phase(), SessionPhase::Anonymous);
    assert!(storage.is_empty());
}

#[test]
fn invalidate_clears_store_and_surfaces_message() {
    let storage = signed_in_storage();
    let session = session(storage.clone(), ScriptedTransport::default());
    session.check();

    session.invalidate("Your session has expired. Please sign in again.");

    let state = session.state();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert_eq!(state.error.as_deref(), Some("Your session has expired. Please sign in again."));
    assert!(storage.is_empty());
}

// =============================================================
// subscriptions
// =============================================================

#[test]
fn dropped_subscription_stops_notifications() {
    let session = session(signed_in_storage(), ScriptedTransport::default());
    let (subscription, seen) = recorder(&session);

    session.check();
    drop(subscription);
    session.invalidate("gone");

    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn every_live_subscriber_is_notified() {
    let session = session(MemoryStorage::new(), ScriptedTransport::default());
    let (_first, first_seen) = recorder(&session);
    let (_second, second_seen) = recorder(&session);

    session.check();

    assert_eq!(first_seen.lock().unwrap().len(), 1);
    assert_eq!(second_seen.lock().unwrap().len(), 1);
}

#[test]
fn subscription_outliving_session_drops_cleanly() {
    let session = session(MemoryStorage::new(), ScriptedTransport::default());
    let (subscription, _seen) = recorder(&session);
    drop(session);
    drop(subscription);
}

// =============================================================
// end_if_revoked
// =============================================================

#[tokio::test]
async fn forbidden_data_call_keeps_session() {
    let storage = signed_in_storage();
    let transport = ScriptedTransport::new([response(403, r#"{"message":"Not your session"}"#)]);
    let session = session(storage.clone(), transport);
    session.check();

    let err = crate::net::bookings::fetch_session(session.client().api(), "s1").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!session.end_if_revoked(&err));
    assert!(!storage.is_empty());
    assert_eq!(session.state().phase(), SessionPhase::Authenticated);
}

#[tokio::test]
async fn expired_token_on_data_call_ends_session() {
    let storage = signed_in_storage();
    let transport = ScriptedTransport::new([response(401, r#"{"message":"Token expired"}"#)]);
    let session = session(storage.clone(), transport);
    session.check();

    let err = crate::net::bookings::fetch_session(session.client().api(), "s1").await.unwrap_err();

    assert!(session.end_if_revoked(&err));
    assert!(storage.is_empty());
    assert_eq!(session.state().phase(), SessionPhase::Anonymous);
    assert_eq!(session.state().error.as_deref(), Some("Token expired"));
}

#[test]
fn non_auth_errors_never_end_session() {
    let session = session(signed_in_storage(), ScriptedTransport::default());
    session.check();

    assert!(!session.end_if_revoked(&ApiError::Server("Request failed".to_owned())));
    assert_eq!(session.state().phase(), SessionPhase::Authenticated);
}

use super::*;
use crate::net::types::{SessionStatus, SessionType};
use crate::test_helpers::{ScriptedTransport, api_client, response, signed_in_storage};
use crate::util::storage::MemoryStorage;

fn session_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "u-1",
        "therapist_id": "t1",
        "scheduled_at": "2026-11-02T10:00:00Z",
        "duration": 50,
        "session_type": "video",
        "status": status
    })
}

#[test]
fn session_endpoint_formats_expected_path() {
    assert_eq!(session_endpoint("s1"), "/sessions/s1");
}

#[tokio::test]
async fn list_sessions_parses_records() {
    let body = json!({
        "success": true,
        "data": [session_json("s1", "scheduled"), session_json("s2", "cancelled")],
    });
    let transport = ScriptedTransport::new([response(200, body.to_string())]);
    let api = api_client(signed_in_storage(), transport.clone());

    let sessions = list_sessions(&api).await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].session_type, SessionType::Video);
    assert_eq!(sessions[1].status, SessionStatus::Cancelled);
    assert_eq!(transport.sent()[0].bearer.as_deref(), Some("access-1"));
}

#[tokio::test]
async fn fetch_session_hits_item_endpoint() {
    let transport =
        ScriptedTransport::new([response(200, session_json("s7", "scheduled").to_string())]);
    let api = api_client(signed_in_storage(), transport.clone());

    let session = fetch_session(&api, "s7").await.unwrap();

    assert_eq!(session.id, "s7");
    assert_eq!(transport.sent()[0].url, "/api/sessions/s7");
}

#[tokio::test]
async fn create_session_posts_snake_case_body() {
    let transport =
        ScriptedTransport::new([response(201, session_json("s9", "scheduled").to_string())]);
    let api = api_client(signed_in_storage(), transport.clone());
    let data = CreateSessionData {
        therapist_id: "t1".to_owned(),
        scheduled_at: "2026-11-02T10:00:00Z".to_owned(),
        duration: 50,
        session_type: SessionType::Video,
    };

    let created = create_session(&api, &data).await.unwrap();

    assert_eq!(created.id, "s9");
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/api/sessions");
    let body = sent[0].body.clone().unwrap();
    assert_eq!(body["therapist_id"], "t1");
    assert_eq!(body["session_type"], "video");
}

#[tokio::test]
async fn cancel_session_patches_cancel_endpoint() {
    let transport =
        ScriptedTransport::new([response(200, session_json("s1", "cancelled").to_string())]);
    let api = api_client(signed_in_storage(), transport.clone());

    cancel_session(&api, "s1").await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].url, "/api/sessions/s1/cancel");
    assert_eq!(sent[0].body, Some(json!({})));
}

#[tokio::test]
async fn cancel_session_accepts_empty_no_content() {
    let transport = ScriptedTransport::new([response(204, "")]);
    let api = api_client(signed_in_storage(), transport);

    assert_eq!(cancel_session(&api, "s1").await, Ok(()));
}

#[tokio::test]
async fn cancel_session_accepts_message_only_envelope() {
    let body = r#"{"success":true,"message":"Session cancelled"}"#;
    let api = api_client(signed_in_storage(), ScriptedTransport::new([response(200, body)]));

    assert_eq!(cancel_session(&api, "s1").await, Ok(()));
}

#[tokio::test]
async fn cancel_session_rejection_keeps_backend_message() {
    let body = r#"{"success":false,"message":"Session already started"}"#;
    let api = api_client(signed_in_storage(), ScriptedTransport::new([response(409, body)]));

    let err = cancel_session(&api, "s1").await.unwrap_err();

    assert_eq!(err, ApiError::Validation("Session already started".to_owned()));
}

#[tokio::test]
async fn complete_session_sends_notes_only_when_present() {
    let transport = ScriptedTransport::new([response(204, ""), response(200, "")]);
    let api = api_client(signed_in_storage(), transport.clone());

    complete_session(&api, "s1", Some(" went well ")).await.unwrap();
    complete_session(&api, "s1", Some("  ")).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].url, "/api/sessions/s1/complete");
    assert_eq!(sent[0].body, Some(json!({ "notes": "went well" })));
    assert_eq!(sent[1].body, Some(json!({})));
}

#[tokio::test]
async fn expired_token_clears_store_and_reports_unauthorized() {
    let storage = signed_in_storage();
    let api = api_client(storage.clone(), ScriptedTransport::new([response(401, "")]));

    let err = list_sessions(&api).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn signed_out_caller_never_reaches_network() {
    let transport = ScriptedTransport::default();
    let api = api_client(MemoryStorage::new(), transport.clone());

    assert!(list_sessions(&api).await.unwrap_err().is_unauthorized());
    assert!(transport.sent().is_empty());
}

use super::*;
use serde_json::json;

fn user(first: &str, last: &str, email: &str) -> User {
    User {
        id: "u1".to_owned(),
        email: email.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        ..User::default()
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_parses_mongo_style_id_and_camel_case_fields() {
    let raw = json!({
        "_id": "64f0c1",
        "email": "ada@example.com",
        "firstName": "Ada",
        "lastName": "Obi",
        "role": "client",
        "isEmailVerified": true,
        "createdAt": "2024-01-02T03:04:05Z"
    });
    let parsed: User = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.id, "64f0c1");
    assert_eq!(parsed.first_name, "Ada");
    assert!(parsed.is_email_verified);
    assert!(!parsed.is_phone_verified);
    assert_eq!(parsed.created_at, "2024-01-02T03:04:05Z");
}

#[test]
fn user_accepts_plain_id_alias() {
    let parsed: User = serde_json::from_value(json!({ "id": "u9", "email": "a@b.com" })).unwrap();
    assert_eq!(parsed.id, "u9");
}

#[test]
fn user_keeps_unknown_fields_through_storage_round_trip() {
    let raw = json!({ "_id": "u1", "email": "a@b.com", "avatar": "https://cdn/x.png" });
    let parsed: User = serde_json::from_value(raw).unwrap();
    let stored = serde_json::to_value(&parsed).unwrap();
    assert_eq!(stored["_id"], "u1");
    assert_eq!(stored["avatar"], "https://cdn/x.png");
}

#[test]
fn user_without_email_is_rejected() {
    assert!(serde_json::from_value::<User>(json!({ "_id": "u1" })).is_err());
}

#[test]
fn display_name_joins_names_or_falls_back_to_email() {
    assert_eq!(user("Ada", "Obi", "a@b.com").display_name(), "Ada Obi");
    assert_eq!(user("Ada", "", "a@b.com").display_name(), "Ada");
    assert_eq!(user(" ", "", "a@b.com").display_name(), "a@b.com");
}

#[test]
fn initials_use_names_then_email() {
    assert_eq!(user("ada", "obi", "a@b.com").initials(), "AO");
    assert_eq!(user("", "", "zed@b.com").initials(), "Z");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn registration_request_serializes_camel_case_and_skips_missing_phone() {
    let request = RegistrationRequest {
        email: "a@b.com".to_owned(),
        password: "Secret123!".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        date_of_birth: "1990-05-01".to_owned(),
        gender: Gender::Female,
        country: "Nigeria".to_owned(),
        phone_number: None,
        accept_terms: true,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["dateOfBirth"], "1990-05-01");
    assert_eq!(value["gender"], "female");
    assert_eq!(value["acceptTerms"], true);
    assert!(value.get("phoneNumber").is_none());
}

#[test]
fn gender_parse_rejects_blank_selection() {
    assert_eq!(Gender::parse("male"), Some(Gender::Male));
    assert_eq!(Gender::parse(""), None);
}

#[test]
fn token_bundle_flattens_into_auth_tokens() {
    let bundle: TokenBundle = serde_json::from_value(json!({
        "access": { "token": "acc", "expiresIn": "15m" },
        "refresh": { "token": "ref", "expiresIn": "7d" }
    }))
    .unwrap();
    let tokens = AuthTokens::from(bundle);
    assert_eq!(tokens.access_token, "acc");
    assert_eq!(tokens.refresh_token, "ref");
}

#[test]
fn envelope_defaults_missing_fields() {
    let body = json!({ "success": false, "message": "Invalid credentials" });
    let envelope: Envelope<AuthPayload> = serde_json::from_value(body).unwrap();
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn envelope_accepts_null_data_for_auth_payload() {
    let envelope: Envelope<AuthPayload> =
        serde_json::from_value(json!({ "success": true, "data": null })).unwrap();
    assert!(envelope.success);
    assert!(envelope.data.is_none());
}

// =============================================================
// Payload tolerance
// =============================================================

#[test]
fn parse_payload_accepts_wrapped_and_bare_lists() {
    let therapist =
        json!({ "id": "t1", "first_name": "Bola", "last_name": "Ade", "email": "b@x.com" });
    let wrapped = json!({ "success": true, "data": [therapist.clone()] }).to_string();
    let bare = json!([therapist]).to_string();

    let from_wrapped: Vec<Therapist> = parse_payload(&wrapped).unwrap();
    let from_bare: Vec<Therapist> = parse_payload(&bare).unwrap();
    assert_eq!(from_wrapped, from_bare);
    assert_eq!(from_bare[0].full_name(), "Bola Ade");
}

#[test]
fn parse_payload_accepts_empty_list() {
    let parsed: Vec<Therapist> = parse_payload("[]").unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn user_record_accepts_nested_and_flat_shapes() {
    let record = json!({ "_id": "u1", "email": "a@b.com" });
    let wrapped = json!({ "success": true, "data": { "user": record.clone() } });
    let nested: User = parse_payload::<UserRecord>(&wrapped.to_string()).unwrap().into();
    let flat: User = parse_payload::<UserRecord>(&record.to_string()).unwrap().into();
    assert_eq!(nested.id, "u1");
    assert_eq!(flat.id, "u1");
}

// =============================================================
// Bookings
// =============================================================

#[test]
fn therapy_session_uses_lowercase_enums() {
    let parsed: TherapySession = serde_json::from_value(json!({
        "id": "s1",
        "user_id": "u1",
        "therapist_id": "t1",
        "scheduled_at": "2025-03-01T10:00:00Z",
        "duration": 50,
        "session_type": "video",
        "status": "scheduled"
    }))
    .unwrap();
    assert_eq!(parsed.session_type, SessionType::Video);
    assert_eq!(parsed.status, SessionStatus::Scheduled);
    assert_eq!(parsed.notes, None);
}

#[test]
fn session_type_parse_and_label() {
    assert_eq!(SessionType::parse("voice"), Some(SessionType::Voice));
    assert_eq!(SessionType::parse("fax"), None);
    assert_eq!(SessionType::Video.label(), "Video");
}

//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON (camelCase for auth, snake_case for
//! therapists and bookings). `User` keeps unknown fields so the cached
//! record written to storage is the record the server sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Parse a `<select>` value; empty or unknown values are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Registration payload sent to `POST /v1/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO `YYYY-MM-DD` as produced by a date input.
    pub date_of_birth: String,
    pub gender: Gender,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub accept_terms: bool,
}

/// Server-issued user record.
///
/// Only `_id` and `email` are required; everything else defaults so older
/// or trimmed backend payloads still parse.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_phone_verified: bool,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub accepted_terms_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Fields this client does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// "First Last", falling back to the email when both names are blank.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }

    /// One or two uppercase initials for the header avatar.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
        } else {
            initials
        }
    }
}

/// The two bearer strings the client stores and forwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// One issued token as sent by the backend. Expiry is opaque to the client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenBundle {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

impl From<TokenBundle> for AuthTokens {
    fn from(bundle: TokenBundle) -> Self {
        Self { access_token: bundle.access.token, refresh_token: bundle.refresh.token }
    }
}

/// `data` of a successful login/register response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub tokens: TokenBundle,
}

/// Standard `{ success, data, message }` response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body that may or may not be wrapped in an envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// `/auth/me` returns either the user itself or `{ user }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserRecord {
    Nested { user: User },
    Flat(User),
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        match record {
            UserRecord::Nested { user } | UserRecord::Flat(user) => user,
        }
    }
}

/// Parse `body` as a possibly-enveloped `T`.
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str::<Payload<T>>(body).map(Payload::into_inner)
}

// =============================================================================
// THERAPISTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Therapist {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl Therapist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Optional filters for `GET /therapists/filter`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TherapistFilter {
    pub specialization: Option<String>,
    pub min_rating: Option<f64>,
    pub availability: Option<bool>,
}

// =============================================================================
// BOOKINGS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Text,
    Voice,
    Video,
}

impl SessionType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "text" => Some(Self::Text),
            "voice" => Some(Self::Voice),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Voice => "Voice",
            Self::Video => "Video",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A booked therapy session (appointment), not the auth session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TherapySession {
    pub id: String,
    pub user_id: String,
    pub therapist_id: String,
    pub scheduled_at: String,
    /// Minutes.
    pub duration: u32,
    pub session_type: SessionType,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionData {
    pub therapist_id: String,
    pub scheduled_at: String,
    pub duration: u32,
    pub session_type: SessionType,
}

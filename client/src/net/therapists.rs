//! Therapist directory endpoints.

#[cfg(test)]
#[path = "therapists_test.rs"]
mod therapists_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, Method, Transport};
use super::types::{Therapist, TherapistFilter};
use crate::util::storage::KeyValueStorage;

fn therapist_endpoint(id: &str) -> String {
    format!("/therapists/{id}")
}

/// `GET /therapists/filter` with only the filters that are set.
pub(crate) fn filter_request<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    filter: &TherapistFilter,
) -> ApiRequest {
    let mut request = api.request(Method::Get, "/therapists/filter");
    if let Some(specialization) = &filter.specialization {
        request = request.with_query("specialization", specialization.clone());
    }
    if let Some(min_rating) = filter.min_rating {
        request = request.with_query("minRating", min_rating.to_string());
    }
    if let Some(availability) = filter.availability {
        request = request.with_query("availability", availability.to_string());
    }
    request
}

pub async fn list_therapists<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
) -> Result<Vec<Therapist>, ApiError> {
    api.get_json(api.request(Method::Get, "/therapists")).await
}

pub async fn fetch_therapist<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    id: &str,
) -> Result<Therapist, ApiError> {
    api.get_json(api.request(Method::Get, &therapist_endpoint(id))).await
}

/// Free-text search; a blank query lists everyone.
pub async fn search_therapists<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    query: &str,
) -> Result<Vec<Therapist>, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return list_therapists(api).await;
    }
    api.get_json(api.request(Method::Get, "/therapists/search").with_query("q", query)).await
}

pub async fn filter_therapists<S: KeyValueStorage, T: Transport>(
    api: &ApiClient<S, T>,
    filter: &TherapistFilter,
) -> Result<Vec<Therapist>, ApiError> {
    api.get_json(filter_request(api, filter)).await
}

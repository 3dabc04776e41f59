use super::*;

#[test]
fn default_base_is_same_origin_api() {
    assert_eq!(ApiConfig::default().base_url, "/api");
}

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("https://api.mentwel.com/").base_url, "https://api.mentwel.com");
    assert_eq!(ApiConfig::new("/api//").base_url, "/api");
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::new("/api");
    assert_eq!(config.url("/v1/auth/login"), "/api/v1/auth/login");
    assert_eq!(config.url("therapists"), "/api/therapists");
}

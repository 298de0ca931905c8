use super::*;

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("/login"), format!("{}{}", api_base(), "/login"));
}

#[test]
fn api_base_defaults_to_relative_api_prefix() {
    // The build environment does not set PORTFOLIO_API_URL for tests.
    assert_eq!(api_base(), "/api");
}

#[test]
fn identity_endpoint_is_the_api_root() {
    assert_eq!(api_url("/"), "/api/");
}

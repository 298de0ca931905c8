use super::*;

#[test]
fn from_status_keeps_server_message() {
    let err = ApiError::from_status(401, Some(ServerMessage { message: Some("Invalid credentials".to_owned()) }));
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".to_owned()),
        }
    );
}

#[test]
fn from_status_discards_blank_message() {
    let err = ApiError::from_status(500, Some(ServerMessage { message: Some("   ".to_owned()) }));
    assert_eq!(err, ApiError::Status { status: 500, message: None });
}

#[test]
fn from_status_tolerates_missing_body() {
    let err = ApiError::from_status(404, None);
    assert_eq!(err, ApiError::Status { status: 404, message: None });
}

#[test]
fn message_or_prefers_server_message() {
    let err = ApiError::Status {
        status: 400,
        message: Some("Email already registered".to_owned()),
    };
    assert_eq!(err.message_or("Register failed"), "Email already registered");
}

#[test]
fn message_or_falls_back_without_server_message() {
    let err = ApiError::Status { status: 502, message: None };
    assert_eq!(err.message_or("Register failed"), "Register failed");
}

#[test]
fn message_or_falls_back_for_transport_errors() {
    let err = ApiError::transport("connection refused");
    assert_eq!(err.message_or("Could not reach the server"), "Could not reach the server");
}

#[test]
fn status_is_only_present_for_server_answers() {
    assert_eq!(ApiError::Status { status: 403, message: None }.status(), Some(403));
    assert_eq!(ApiError::transport("timeout").status(), None);
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::Status {
        status: 422,
        message: Some("missing title".to_owned()),
    };
    assert_eq!(err.to_string(), "server error 422: missing title");
    assert_eq!(ApiError::transport("offline").to_string(), "request failed: offline");
}

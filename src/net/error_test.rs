use super::*;

fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse { status, body: body.to_owned() }
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_success_range_is_none() {
    assert_eq!(classify(200), None);
    assert_eq!(classify(201), None);
    assert_eq!(classify(204), None);
}

#[test]
fn classify_maps_known_failures() {
    assert_eq!(classify(401), Some(FailureKind::Unauthorized));
    assert_eq!(classify(403), Some(FailureKind::Forbidden));
    assert_eq!(classify(404), Some(FailureKind::NotFound));
    assert_eq!(classify(500), Some(FailureKind::Server));
}

#[test]
fn classify_other_codes_are_other() {
    for status in [400, 409, 422, 429, 502, 503, 302] {
        assert_eq!(classify(status), Some(FailureKind::Other), "status {status}");
    }
}

// =============================================================
// from_response + messages
// =============================================================

#[test]
fn from_response_keeps_backend_message_for_other_failures() {
    let err = ApiError::from_response(&response(422, r#"{"message":"Email sudah terdaftar"}"#));
    assert_eq!(err, ApiError::Status { status: 422, message: "Email sudah terdaftar".to_owned() });
    assert_eq!(err.user_message(), "Email sudah terdaftar");
    assert_eq!(err.status(), Some(422));
}

#[test]
fn from_response_falls_back_on_unparseable_body() {
    let err = ApiError::from_response(&response(400, "<html>bad</html>"));
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn from_response_builds_each_kind() {
    assert_eq!(ApiError::from_response(&response(401, "")).kind(), FailureKind::Unauthorized);
    assert_eq!(ApiError::from_response(&response(403, "")).kind(), FailureKind::Forbidden);
    assert_eq!(ApiError::from_response(&response(404, "")).kind(), FailureKind::NotFound);
    assert_eq!(ApiError::from_response(&response(500, "")).kind(), FailureKind::Server);
}

#[test]
fn fixed_kinds_use_fixed_copy() {
    let err = ApiError::from_response(&response(403, r#"{"message":"role mismatch"}"#));
    let (level, title, message) = err.notice();
    assert_eq!(level, NoticeLevel::Warning);
    assert_eq!(title, "Access denied");
    assert_eq!(message, "You do not have permission to perform this action.");
}

#[test]
fn network_error_uses_transport_message_or_fallback() {
    assert_eq!(ApiError::Network("connection refused".to_owned()).user_message(), "connection refused");
    assert_eq!(ApiError::Network("  ".to_owned()).user_message(), FALLBACK_MESSAGE);
    assert_eq!(ApiError::Network(String::new()).status(), None);
}

#[test]
fn extract_message_checks_alternate_keys() {
    assert_eq!(extract_message(r#"{"error":"nope"}"#).as_deref(), Some("nope"));
    assert_eq!(extract_message(r#"{"msg":" trimmed "}"#).as_deref(), Some("trimmed"));
    assert_eq!(extract_message(r#"{"error":{"message":"nested"}}"#).as_deref(), Some("nested"));
    assert_eq!(extract_message(r#"{"data":{"message":"inside data"}}"#).as_deref(), Some("inside data"));
    assert_eq!(extract_message(r#"{"errors":[{"msg":"first"},{"msg":"second"}]}"#).as_deref(), Some("first"));
    assert_eq!(extract_message(r#"{"errors":["plain"]}"#).as_deref(), Some("plain"));
    assert_eq!(extract_message(r#"{"message":""}"#), None);
    assert_eq!(extract_message("not json"), None);
}

#[test]
fn without_session_turns_401_into_sign_in_rejection() {
    let err = ApiError::from_response(&response(401, r#"{"message":"Email atau password salah"}"#)).without_session();
    assert_eq!(err, ApiError::SignInRejected { message: "Email atau password salah".to_owned() });
    assert_eq!(err.kind(), FailureKind::Unauthorized);
    assert_eq!(err.status(), Some(401));
    let (level, title, message) = err.notice();
    assert_eq!(level, NoticeLevel::Warning);
    assert_eq!(title, "Sign-in failed");
    assert_eq!(message, "Email atau password salah");
}

#[test]
fn without_session_leaves_other_errors_alone() {
    let err = ApiError::from_response(&response(403, ""));
    assert_eq!(err.clone().without_session(), err);
}

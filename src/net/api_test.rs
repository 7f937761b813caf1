use super::*;

#[test]
fn course_endpoints_format_expected_paths() {
    assert_eq!(course_endpoint(42), "/api/courses/42/");
    assert_eq!(enroll_endpoint(42), "/api/courses/42/enroll/");
    assert_eq!(modules_endpoint(42), "/api/courses/42/modules/");
}

#[test]
fn nested_content_endpoints_format_expected_paths() {
    assert_eq!(contents_endpoint(42, 7), "/api/courses/42/modules/7/content/");
    assert_eq!(content_endpoint(42, 7, 3), "/api/courses/42/modules/7/content/3/");
    assert_eq!(
        mark_complete_endpoint(42, 7, 3),
        "/api/courses/42/modules/7/content/3/mark_complete/"
    );
}

#[test]
fn user_search_endpoint_without_search_term() {
    assert_eq!(user_search_endpoint("", 1), "/api/users/?page=1");
}

#[test]
fn user_search_endpoint_encodes_search_term() {
    assert_eq!(
        user_search_endpoint("amina khan", 2),
        "/api/users/?page=2&search=amina%20khan"
    );
}

#[test]
fn url_encode_passes_unreserved_characters() {
    assert_eq!(url_encode("abc-123_.~"), "abc-123_.~");
}

#[test]
fn url_encode_escapes_everything_else() {
    assert_eq!(url_encode("a&b=c"), "a%26b%3Dc");
    assert_eq!(url_encode("user@example.com"), "user%40example.com");
}

#[test]
fn login_payload_uses_email_when_identity_contains_at() {
    assert_eq!(
        login_payload("user@example.com", "pw"),
        serde_json::json!({ "email": "user@example.com", "password": "pw" })
    );
}

#[test]
fn login_payload_uses_username_otherwise() {
    assert_eq!(
        login_payload("sam", "pw"),
        serde_json::json!({ "username": "sam", "password": "pw" })
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(request_failed_message("enroll", 400), "enroll failed: 400");
}

use super::*;
use crate::testing::{token_for_role, token_with_payload};

#[test]
fn decode_role_reads_each_known_role() {
    assert_eq!(decode_role(&token_for_role("admin")), Some(Role::Admin));
    assert_eq!(decode_role(&token_for_role("superadmin")), Some(Role::SuperAdmin));
    assert_eq!(decode_role(&token_for_role("user")), Some(Role::User));
}

#[test]
fn decode_role_rejects_unknown_role() {
    assert_eq!(decode_role(&token_for_role("moderator")), None);
    assert_eq!(
        try_decode_role(&token_for_role("moderator")),
        Err(TokenError::UnknownRole("moderator".to_owned()))
    );
}

#[test]
fn decode_role_rejects_wrong_segment_count() {
    assert_eq!(try_decode_role("abc"), Err(TokenError::Shape));
    assert_eq!(try_decode_role("a.b"), Err(TokenError::Shape));
    assert_eq!(try_decode_role("a.b.c.d"), Err(TokenError::Shape));
    assert_eq!(try_decode_role("a..c"), Err(TokenError::Shape));
    assert_eq!(decode_role(""), None);
}

#[test]
fn decode_role_rejects_non_base64_payload() {
    assert!(matches!(try_decode_role("h.!!!.s"), Err(TokenError::Encoding(_))));
}

#[test]
fn decode_role_rejects_payload_without_role() {
    let token = token_with_payload(&serde_json::json!({ "email": "a@b.c" }));
    assert!(matches!(try_decode_role(&token), Err(TokenError::Claims(_))));
}

#[test]
fn decode_claims_tolerates_padding_and_extra_fields() {
    let token = token_with_payload(&serde_json::json!({
        "role": "admin",
        "email": "admin@laporin.id",
        "exp": 1_900_000_000,
        "iat": 1_800_000_000,
        "id": 7
    }));
    let padded = {
        let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
        parts[1].push_str("==");
        parts.join(".")
    };
    let claims = decode_claims(&padded).unwrap();
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.email.as_deref(), Some("admin@laporin.id"));
    assert_eq!(claims.exp, Some(1_900_000_000));
}

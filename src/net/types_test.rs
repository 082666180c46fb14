use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_accepts_known_names() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse(" superadmin "), Some(Role::SuperAdmin));
    assert_eq!(Role::parse("user"), Some(Role::User));
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("root"), None);
}

#[test]
fn role_serializes_to_wire_name() {
    assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"superadmin\"");
    for role in [Role::Admin, Role::SuperAdmin, Role::User] {
        assert_eq!(serde_json::to_value(role).unwrap(), json!(role.as_str()));
    }
}

// =============================================================
// Optional-field defaulting
// =============================================================

#[test]
fn user_defaults_missing_fields_and_numeric_id() {
    let user: User = serde_json::from_value(json!({ "id": 12, "email": "a@b.c" })).unwrap();
    assert_eq!(user.id, "12");
    assert_eq!(user.email, "a@b.c");
    assert!(user.name.is_empty());
    assert!(user.role.is_none());
    assert!(!user.is_verified);
}

#[test]
fn complaint_accepts_camel_case_aliases() {
    let complaint: Complaint = serde_json::from_value(json!({
        "id": "c-1",
        "title": "Jalan rusak",
        "status": "process",
        "categoryId": 4,
        "createdAt": "2024-01-01"
    }))
    .unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Process);
    assert_eq!(complaint.category_id.as_deref(), Some("4"));
    assert_eq!(complaint.created_at.as_deref(), Some("2024-01-01"));
    assert!(complaint.images.is_empty());
}

#[test]
fn complaint_status_tolerates_case_and_unknown_names() {
    let parse = |status: serde_json::Value| -> ComplaintStatus {
        serde_json::from_value::<Complaint>(json!({ "id": 1, "status": status })).unwrap().status
    };
    assert_eq!(parse(json!("DONE")), ComplaintStatus::Done);
    assert_eq!(parse(json!("Verifikasi")), ComplaintStatus::Unknown);
    assert_eq!(parse(json!(3)), ComplaintStatus::Unknown);
    assert_eq!(parse(json!(null)), ComplaintStatus::Pending);
    assert_eq!(ComplaintStatus::Unknown.as_str(), "unknown");
}

#[test]
fn login_response_accepts_access_token_alias() {
    let resp: LoginResponse = serde_json::from_value(json!({ "accessToken": "t" })).unwrap();
    assert_eq!(resp.token, "t");
    assert!(resp.user.is_none());
}

#[test]
fn user_changes_skip_unset_fields() {
    let changes = UserChanges { role: Some(Role::Admin), ..UserChanges::default() };
    assert_eq!(serde_json::to_value(changes).unwrap(), json!({ "role": "admin" }));
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn unwrap_envelope_prefers_data_key() {
    let value = unwrap_envelope(json!({ "data": { "id": 1 }, "news": { "id": 2 } }), "news");
    assert_eq!(value, json!({ "id": 1 }));
}

#[test]
fn unwrap_envelope_falls_back_to_resource_key() {
    assert_eq!(unwrap_envelope(json!({ "news": { "id": 2 } }), "news"), json!({ "id": 2 }));
}

#[test]
fn unwrap_envelope_passes_bare_payload_through() {
    assert_eq!(unwrap_envelope(json!({ "id": 3 }), "news"), json!({ "id": 3 }));
    assert_eq!(unwrap_envelope(json!([1, 2]), "news"), json!([1, 2]));
}

// =============================================================
// Pages
// =============================================================

#[test]
fn page_from_bare_array_is_single_page() {
    let page: Page<Category> = Page::from_value(json!([{ "id": 1, "name": "Jalan" }]), "category").unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total, 1);
    assert!(!page.has_next());
}

#[test]
fn page_reads_nested_pagination_block() {
    let body = json!({
        "data": [{ "id": 1 }, { "id": 2 }],
        "pagination": { "page": 2, "totalPages": 5, "total": 48 }
    });
    let page: Page<News> = Page::from_value(body, "news").unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.total, 48);
    assert!(page.has_next());
}

#[test]
fn page_reads_inline_fields_inside_data_object() {
    let body = json!({ "data": { "complaints": [{ "id": 1 }], "page": "3", "total_pages": 3, "count": 21 } });
    let page: Page<Complaint> = Page::from_value(body, "complaints").unwrap();
    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total, 21);
}

#[test]
fn page_without_list_is_an_error() {
    assert!(Page::<News>::from_value(json!({ "data": { "id": 1 } }), "news").is_err());
    assert!(Page::<News>::from_value(json!("nope"), "news").is_err());
}

// =============================================================
// Complaint query
// =============================================================

#[test]
fn complaint_query_emits_only_populated_filters() {
    let query = ComplaintQuery {
        page: Some(2),
        status: Some(ComplaintStatus::Done),
        search: Some("  ".to_owned()),
        ..ComplaintQuery::default()
    };
    assert_eq!(
        query.to_pairs(),
        vec![("page".to_owned(), "2".to_owned()), ("status".to_owned(), "done".to_owned())]
    );
}

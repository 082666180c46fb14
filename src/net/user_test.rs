use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::transport::Body;
use crate::net::types::Role;
use crate::testing::Harness;

#[test]
fn me_refreshes_profile_cache() {
    let h = Harness::new();
    h.transport.respond(200, json!({ "user": { "id": 1, "name": "Operator", "role": "superadmin" } }));
    let service = UserService::new(h.client.clone());

    let me = block_on(service.me()).unwrap();

    assert_eq!(me.role, Some(Role::SuperAdmin));
    assert_eq!(h.store.profile().get(), Some(me));
}

#[test]
fn failed_me_keeps_previous_profile() {
    let h = Harness::new();
    let cached = User { name: "Cached".to_owned(), ..User::default() };
    h.store.profile().set(cached.clone());
    h.transport.respond(500, json!({}));
    let service = UserService::new(h.client.clone());

    assert!(block_on(service.me()).is_err());
    assert_eq!(h.store.profile().get(), Some(cached));
}

#[test]
fn update_sends_only_changed_fields() {
    let h = Harness::new();
    h.transport.respond(200, json!({ "data": { "id": 2, "role": "admin" } }));
    let service = UserService::new(h.client.clone());
    let changes = UserChanges { role: Some(Role::Admin), ..UserChanges::default() };

    let outcome = block_on(service.update("2", &changes)).unwrap();

    assert_eq!(outcome.value.role, Some(Role::Admin));
    assert_eq!(h.transport.last_request().body, Some(Body::Json(json!({ "role": "admin" }))));
}

#[test]
fn list_reads_users_key() {
    let h = Harness::new();
    h.transport.respond(200, json!({ "data": { "users": [{ "id": 1 }, { "id": 2 }], "total": 2 } }));
    let service = UserService::new(h.client.clone());

    let page = block_on(service.list(1)).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
}

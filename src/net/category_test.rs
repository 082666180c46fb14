use futures::executor::block_on;

use super::*;
use crate::net::transport::Body;
use crate::testing::Harness;

#[test]
fn list_accepts_categories_key() {
    let h = Harness::new();
    h.transport.respond(200, json!({ "categories": [{ "id": 1, "name": "Jalan" }, { "id": 2, "name": "Sampah" }] }));
    let service = CategoryService::new(h.client.clone());

    let categories = block_on(service.list()).unwrap();

    let names: Vec<_> = categories.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Jalan".to_owned(), "Sampah".to_owned()]);
}

#[test]
fn create_trims_name() {
    let h = Harness::new();
    h.transport.respond(201, json!({ "data": { "id": 3, "name": "Air" } }));
    let service = CategoryService::new(h.client.clone());

    let outcome = block_on(service.create("  Air ")).unwrap();

    assert_eq!(outcome.kind, MutationKind::Created);
    assert_eq!(h.transport.last_request().body, Some(Body::Json(json!({ "name": "Air" }))));
}

#[test]
fn delete_forbidden_is_rejected() {
    let h = Harness::new();
    h.transport.respond(403, json!({}));
    let service = CategoryService::new(h.client.clone());

    assert!(block_on(service.delete("1")).is_err());
    assert_eq!(h.notifier.notices().len(), 1);
}

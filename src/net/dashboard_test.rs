use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::testing::Harness;

#[test]
fn summary_reads_camel_case_counts() {
    let h = Harness::new();
    h.transport.respond(
        200,
        json!({ "data": { "totalComplaints": 12, "pending": 5, "process": 4, "done": 2, "rejected": 1, "totalUsers": 30, "totalNews": 3 } }),
    );
    let service = DashboardService::new(h.client.clone());

    let summary = block_on(service.summary()).unwrap();

    assert_eq!(summary.total_complaints, 12);
    assert_eq!(summary.total_users, 30);
    assert!(summary.recent_complaints.is_empty());
    assert!(h.transport.last_request().url.ends_with("/dashboard"));
}

#[test]
fn summary_derives_total_when_missing() {
    let h = Harness::new();
    h.transport.respond(200, json!({ "pending": 1, "process": 2, "done": 3 }));
    let service = DashboardService::new(h.client.clone());

    assert_eq!(block_on(service.summary()).unwrap().total_complaints, 6);
}

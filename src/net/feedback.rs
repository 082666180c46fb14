//! Complaint feedback under `/feedback`.
//!
//! Admins leave feedback on a complaint; the citizen who filed it responds.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, segment};
use crate::net::types::{Feedback, Mutation, MutationKind, Resource};

#[derive(Clone)]
pub struct FeedbackService {
    http: HttpClient,
}

impl FeedbackService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list_for_complaint(&self, complaint_id: &str) -> Result<Vec<Feedback>, ApiError> {
        let value = self
            .http
            .get_value(&format!("/feedback/complaint/{}", segment(complaint_id)), Vec::new())
            .await?;
        self.http.decode_page::<Feedback>(value, "feedback").map(|page| page.items)
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn create(&self, complaint_id: &str, message: &str) -> Result<Mutation<Feedback>, ApiError> {
        let body = json!({ "complaint_id": complaint_id, "message": message });
        let created = self.http.post("/feedback", &body, "feedback").await?;
        Ok(Mutation::new(MutationKind::Created, Resource::Feedback, created))
    }

    /// Attach the citizen's response to a feedback entry.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn respond(&self, feedback_id: &str, response: &str) -> Result<Mutation<Feedback>, ApiError> {
        let updated = self
            .http
            .patch(&format!("/feedback/{}/response", segment(feedback_id)), &json!({ "response": response }), "feedback")
            .await?;
        Ok(Mutation::new(MutationKind::Updated, Resource::Feedback, updated))
    }
}

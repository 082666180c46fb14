//! Complaint endpoints under `/complaint`.

#[cfg(test)]
#[path = "complaint_test.rs"]
mod complaint_test;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, segment};
use crate::net::types::{
    Complaint, ComplaintQuery, ComplaintStatus, Mutation, MutationKind, NewComplaint, Page, Resource,
};

#[derive(Clone)]
pub struct ComplaintService {
    http: HttpClient,
}

impl ComplaintService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// All complaints, for the admin area.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list(&self, query: &ComplaintQuery) -> Result<Page<Complaint>, ApiError> {
        self.fetch_page("/complaint", query).await
    }

    /// Complaints filed by the signed-in citizen.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list_mine(&self, query: &ComplaintQuery) -> Result<Page<Complaint>, ApiError> {
        self.fetch_page("/complaint/me", query).await
    }

    async fn fetch_page(&self, path: &str, query: &ComplaintQuery) -> Result<Page<Complaint>, ApiError> {
        let value = self.http.get_value(path, query.to_pairs()).await?;
        self.http.decode_page(value, "complaints")
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn get(&self, id: &str) -> Result<Complaint, ApiError> {
        let value = self.http.get_value(&format!("/complaint/{}", segment(id)), Vec::new()).await?;
        self.http.decode(value, "complaint")
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn create(&self, complaint: &NewComplaint) -> Result<Mutation<Complaint>, ApiError> {
        let created = self.http.post("/complaint", complaint, "complaint").await?;
        Ok(Mutation::new(MutationKind::Created, Resource::Complaint, created))
    }

    /// Move a complaint to `status`.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn update_status(&self, id: &str, status: ComplaintStatus) -> Result<Mutation<Complaint>, ApiError> {
        let updated = self
            .http
            .patch(&format!("/complaint/{}/status", segment(id)), &serde_json::json!({ "status": status }), "complaint")
            .await?;
        Ok(Mutation::new(MutationKind::Updated, Resource::Complaint, updated))
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete(&self, id: &str) -> Result<Mutation<String>, ApiError> {
        self.http.delete(&format!("/complaint/{}", segment(id))).await?;
        Ok(Mutation::new(MutationKind::Deleted, Resource::Complaint, id.to_owned()))
    }
}

//! Complaint categories under `/category`.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, segment};
use crate::net::types::{Category, Mutation, MutationKind, Resource};

#[derive(Clone)]
pub struct CategoryService {
    http: HttpClient,
}

impl CategoryService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Every category; the backend does not paginate this list.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let value = self.http.get_value("/category", Vec::new()).await?;
        self.http.decode_page::<Category>(value, "categories").map(|page| page.items)
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn create(&self, name: &str) -> Result<Mutation<Category>, ApiError> {
        let created = self.http.post("/category", &json!({ "name": name.trim() }), "category").await?;
        Ok(Mutation::new(MutationKind::Created, Resource::Category, created))
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn update(&self, id: &str, name: &str) -> Result<Mutation<Category>, ApiError> {
        let updated = self
            .http
            .put(&format!("/category/{}", segment(id)), &json!({ "name": name.trim() }), "category")
            .await?;
        Ok(Mutation::new(MutationKind::Updated, Resource::Category, updated))
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete(&self, id: &str) -> Result<Mutation<String>, ApiError> {
        self.http.delete(&format!("/category/{}", segment(id))).await?;
        Ok(Mutation::new(MutationKind::Deleted, Resource::Category, id.to_owned()))
    }
}

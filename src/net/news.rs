//! News endpoints under `/news`.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, segment};
use crate::net::types::{Mutation, MutationKind, News, NewsDraft, Page, Resource};

#[derive(Clone)]
pub struct NewsService {
    http: HttpClient,
}

impl NewsService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list(&self, page: u32) -> Result<Page<News>, ApiError> {
        let value = self
            .http
            .get_value("/news", vec![("page".to_owned(), page.max(1).to_string())])
            .await?;
        self.http.decode_page(value, "news")
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn get(&self, id: &str) -> Result<News, ApiError> {
        let value = self.http.get_value(&format!("/news/{}", segment(id)), Vec::new()).await?;
        self.http.decode(value, "news")
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn create(&self, draft: &NewsDraft) -> Result<Mutation<News>, ApiError> {
        let created = self.http.post("/news", draft, "news").await?;
        Ok(Mutation::new(MutationKind::Created, Resource::News, created))
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn update(&self, id: &str, draft: &NewsDraft) -> Result<Mutation<News>, ApiError> {
        let updated = self.http.put(&format!("/news/{}", segment(id)), draft, "news").await?;
        Ok(Mutation::new(MutationKind::Updated, Resource::News, updated))
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete(&self, id: &str) -> Result<Mutation<String>, ApiError> {
        self.http.delete(&format!("/news/{}", segment(id))).await?;
        Ok(Mutation::new(MutationKind::Deleted, Resource::News, id.to_owned()))
    }
}

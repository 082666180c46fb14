//! News comments under `/comment`.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, segment};
use crate::net::types::{Comment, Mutation, MutationKind, Resource};

#[derive(Clone)]
pub struct CommentService {
    http: HttpClient,
}

impl CommentService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list_for_news(&self, news_id: &str) -> Result<Vec<Comment>, ApiError> {
        let value = self.http.get_value(&format!("/comment/news/{}", segment(news_id)), Vec::new()).await?;
        self.http.decode_page::<Comment>(value, "comments").map(|page| page.items)
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn create(&self, news_id: &str, content: &str) -> Result<Mutation<Comment>, ApiError> {
        let body = json!({ "news_id": news_id, "content": content.trim() });
        let created = self.http.post("/comment", &body, "comment").await?;
        Ok(Mutation::new(MutationKind::Created, Resource::Comment, created))
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete(&self, id: &str) -> Result<Mutation<String>, ApiError> {
        self.http.delete(&format!("/comment/{}", segment(id))).await?;
        Ok(Mutation::new(MutationKind::Deleted, Resource::Comment, id.to_owned()))
    }
}

//! User administration under `/users`.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, segment};
use crate::net::types::{Mutation, MutationKind, Page, Resource, User, UserChanges};

#[derive(Clone)]
pub struct UserService {
    http: HttpClient,
}

impl UserService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn list(&self, page: u32) -> Result<Page<User>, ApiError> {
        let value = self
            .http
            .get_value("/users", vec![("page".to_owned(), page.max(1).to_string())])
            .await?;
        self.http.decode_page(value, "users")
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        let value = self.http.get_value(&format!("/users/{}", segment(id)), Vec::new()).await?;
        self.http.decode(value, "user")
    }

    /// Fetch the signed-in account and refresh the admin profile cache.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn me(&self) -> Result<User, ApiError> {
        let value = self.http.get_value("/users/me", Vec::new()).await?;
        let user: User = self.http.decode(value, "user")?;
        self.http.store().profile().set(user.clone());
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn update(&self, id: &str, changes: &UserChanges) -> Result<Mutation<User>, ApiError> {
        let updated = self.http.put(&format!("/users/{}", segment(id)), changes, "user").await?;
        Ok(Mutation::new(MutationKind::Updated, Resource::User, updated))
    }

    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn delete(&self, id: &str) -> Result<Mutation<String>, ApiError> {
        self.http.delete(&format!("/users/{}", segment(id))).await?;
        Ok(Mutation::new(MutationKind::Deleted, Resource::User, id.to_owned()))
    }
}

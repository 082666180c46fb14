//! Wire DTOs for the Laporin REST API.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: ids arrive as numbers or strings, optional
//! fields come and go, and payloads are wrapped in differently named
//! envelopes. Types here default every optional field and normalise ids to
//! strings so a schema drift degrades a field instead of failing a page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// IDENTITY
// =============================================================================

/// Permission class embedded in the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    SuperAdmin,
    User,
}

impl Role {
    /// Roles allowed into the admin area.
    pub const STAFF: [Role; 2] = [Role::Admin, Role::SuperAdmin];

    /// Parse a wire role name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "superadmin" => Some(Self::SuperAdmin),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
            Self::User => "user",
        }
    }
}

/// A user account as returned by `/auth/*` and `/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, alias = "avatarUrl")]
    pub avatar_url: Option<String>,
    #[serde(default, alias = "isVerified")]
    pub is_verified: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Body of a successful `/auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Partial user update; only populated fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

// =============================================================================
// COMPLAINTS
// =============================================================================

/// Processing state of a complaint.
///
/// Parsed case-insensitively; a status name this client does not know reads
/// as `Unknown` instead of failing the whole payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Process,
    Done,
    Rejected,
    Unknown,
}

impl ComplaintStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "process" => Self::Process,
            "done" => Self::Done,
            "rejected" => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Process => "process",
            Self::Done => "done",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for ComplaintStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = match Value::deserialize(deserializer)? {
            Value::Null => Self::Pending,
            Value::String(raw) => Self::parse(&raw),
            _ => Self::Unknown,
        };
        if status == Self::Unknown {
            leptos::logging::warn!("unrecognised complaint status in payload");
        }
        Ok(status)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, alias = "categoryId", deserialize_with = "deserialize_opt_id")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub category_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Filters for complaint listings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplaintQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ComplaintStatus>,
    pub category_id: Option<String>,
    pub search: Option<String>,
}

impl ComplaintQuery {
    /// Query-string pairs for the populated filters.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_owned(), status.as_str().to_owned()));
        }
        if let Some(category_id) = &self.category_id {
            pairs.push(("category_id".to_owned(), category_id.clone()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_owned(), search.to_owned()));
        }
        pairs
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "complaintId", deserialize_with = "deserialize_id")]
    pub complaint_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

// =============================================================================
// NEWS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct News {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "newsId", deserialize_with = "deserialize_id")]
    pub news_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

// =============================================================================
// DASHBOARD + MEDIA
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, alias = "totalComplaints")]
    pub total_complaints: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub process: u64,
    #[serde(default)]
    pub done: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default, alias = "totalUsers")]
    pub total_users: u64,
    #[serde(default, alias = "totalNews")]
    pub total_news: u64,
    #[serde(default, alias = "recentComplaints")]
    pub recent_complaints: Vec<Complaint>,
}

/// Image stored on the media host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub public_id: String,
    pub secure_url: String,
}

// =============================================================================
// ENVELOPES, PAGES, MUTATIONS
// =============================================================================

/// Strip a `{ "data": X }` or `{ "<resource>": X }` wrapper, if present.
#[must_use]
pub fn unwrap_envelope(value: Value, resource: &str) -> Value {
    match value {
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("data") {
                return inner;
            }
            if let Some(inner) = map.remove(resource) {
                return inner;
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// One page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), page: 1, total_pages: 1, total: 0 }
    }
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl<T: serde::de::DeserializeOwned> Page<T> {
    /// Build a page from a listing body.
    ///
    /// Accepts a bare array, an enveloped array, or an object carrying the
    /// items under `items`/`rows`/`<resource>` with optional pagination
    /// fields either inline or under `pagination`/`meta`.
    ///
    /// # Errors
    ///
    /// Returns an error if no item array can be found or an item fails to
    /// deserialize.
    pub fn from_value(value: Value, resource: &str) -> Result<Self, serde_json::Error> {
        let mut meta = serde_json::Map::new();
        if let Value::Object(map) = &value {
            for (key, val) in map {
                match val {
                    Value::Object(inner) if key == "pagination" || key == "meta" => meta.extend(inner.clone()),
                    Value::Number(_) | Value::String(_) => {
                        meta.insert(key.clone(), val.clone());
                    }
                    _ => {}
                }
            }
        }

        let body = unwrap_envelope(value, resource);
        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => {
                let items = ["items", "rows", resource]
                    .iter()
                    .find_map(|key| match map.remove(*key) {
                        Some(Value::Array(items)) => Some(items),
                        _ => None,
                    })
                    .ok_or_else(|| serde_json::Error::custom(format!("no '{resource}' list in response")))?;
                for (key, val) in map {
                    meta.entry(key).or_insert(val);
                }
                items
            }
            _ => return Err(serde_json::Error::custom(format!("expected '{resource}' list"))),
        };

        let items = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        let total = meta_u64(&meta, &["total", "count", "totalItems"]).unwrap_or(items.len() as u64);
        let page = meta_u64(&meta, &["page", "currentPage"]).map_or(1, clamp_u32);
        let total_pages = meta_u64(&meta, &["total_pages", "totalPages", "pages"]).map_or(page, clamp_u32);

        Ok(Self { items, page, total_pages: total_pages.max(page), total })
    }
}

fn meta_u64(meta: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| match meta.get(*key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Complaint,
    News,
    User,
    Category,
    Feedback,
    Comment,
    Image,
}

/// Result of a create/update/delete call.
///
/// The data layer never reloads or navigates; callers inspect the outcome and
/// pick their own refresh strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct Mutation<T> {
    pub kind: MutationKind,
    pub resource: Resource,
    pub value: T,
}

impl<T> Mutation<T> {
    #[must_use]
    pub fn new(kind: MutationKind, resource: Resource, value: T) -> Self {
        Self { kind, resource, value }
    }
}

// =============================================================================
// ID DESERIALIZERS
// =============================================================================

fn id_from_value<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(id_from_value(value)?.unwrap_or_default())
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(value)
}

//! Networking: the authenticated HTTP pipeline and per-resource services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single choke point for backend calls; `transport` is the
//! swappable wire beneath it. Every other module is a thin typed wrapper for
//! one resource and is consumed by pages through the [`Api`] context.

pub mod auth;
pub mod category;
pub mod cloudinary;
pub mod comment;
pub mod complaint;
pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod http;
pub mod news;
pub mod transport;
pub mod types;
pub mod user;

use self::http::HttpClient;

/// Every domain service, sharing one HTTP client.
#[derive(Clone)]
pub struct Api {
    pub auth: auth::AuthService,
    pub complaints: complaint::ComplaintService,
    pub news: news::NewsService,
    pub users: user::UserService,
    pub categories: category::CategoryService,
    pub dashboard: dashboard::DashboardService,
    pub feedback: feedback::FeedbackService,
    pub comments: comment::CommentService,
    pub media: cloudinary::CloudinaryService,
}

impl Api {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            auth: auth::AuthService::new(http.clone()),
            complaints: complaint::ComplaintService::new(http.clone()),
            news: news::NewsService::new(http.clone()),
            users: user::UserService::new(http.clone()),
            categories: category::CategoryService::new(http.clone()),
            dashboard: dashboard::DashboardService::new(http.clone()),
            feedback: feedback::FeedbackService::new(http.clone()),
            comments: comment::CommentService::new(http.clone()),
            media: cloudinary::CloudinaryService::new(http),
        }
    }
}

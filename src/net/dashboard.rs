//! Admin dashboard statistics.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::DashboardSummary;

#[derive(Clone)]
pub struct DashboardService {
    http: HttpClient,
}

impl DashboardService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Complaint counts per status plus user/news totals.
    ///
    /// # Errors
    ///
    /// Returns the backend failure or a decode error.
    pub async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        let mut summary: DashboardSummary = self.http.get("/dashboard", "dashboard").await?;
        if summary.total_complaints == 0 {
            summary.total_complaints = summary.pending + summary.process + summary.done + summary.rejected;
        }
        Ok(summary)
    }
}

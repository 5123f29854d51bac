//! Progress & Analytics Endpoints

use async_trait::async_trait;
use list_manager::{ListResult, ListSource};

use super::envelope::{decode_list, decode_object};
use super::ApiClient;
use crate::models::{AnalyticsReport, LeaderboardStats, ProgressEntry};

/// Relationship streaks, read-only
pub struct ProgressList {
    api: ApiClient,
}

impl ProgressList {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ListSource<ProgressEntry> for ProgressList {
    fn noun(&self) -> &'static str {
        "streak"
    }

    async fn fetch(&self) -> ListResult<Vec<ProgressEntry>> {
        let body = self.api.get("/relationship-progres-list", &[]).await?;
        decode_list(&body, "data")
    }
}

/// The leaderboard answers with the bare stats object
pub async fn fetch_leaderboard(api: &ApiClient) -> ListResult<LeaderboardStats> {
    let body = api.get("/reletionship-all-list", &[]).await?;
    decode_object(&body, None)
}

/// Chart datasets sit next to `status` at the top level
pub async fn fetch_analytics(api: &ApiClient) -> ListResult<AnalyticsReport> {
    let body = api.get("/all-result-anaylytics-list", &[]).await?;
    decode_object(&body, None)
}

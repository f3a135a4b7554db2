use serde::Serialize;
use wenote_core::{Listing, NotebookStat, StatsOverview, TagStat, TrendPoint};

use crate::{error::Result, http::ApiClient};

pub const DEFAULT_TREND_DAYS: u32 = 7;
pub const DEFAULT_TAG_LIMIT: u32 = 10;

#[derive(Serialize)]
struct DaysQuery {
    days: u32,
}

#[derive(Serialize)]
struct LimitQuery {
    limit: u32,
}

impl ApiClient {
    pub async fn stats_overview(&self) -> Result<StatsOverview> {
        self.get("/stats/overview").await
    }

    /// Notes created per day over the last `days` days
    pub async fn stats_trend(&self, days: u32) -> Result<Vec<TrendPoint>> {
        let listing: Listing<TrendPoint> =
            self.get_query("/stats/trend", &DaysQuery { days }).await?;
        Ok(listing.list)
    }

    /// Most used tags
    pub async fn stats_tags(&self, limit: u32) -> Result<Vec<TagStat>> {
        let listing: Listing<TagStat> =
            self.get_query("/stats/tags", &LimitQuery { limit }).await?;
        Ok(listing.list)
    }

    pub async fn stats_notebooks(&self) -> Result<Vec<NotebookStat>> {
        let listing: Listing<NotebookStat> = self.get("/stats/notebooks").await?;
        Ok(listing.list)
    }
}

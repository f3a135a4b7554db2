use serde::Serialize;
use wenote_core::{AchievementList, DailyGoal, GamificationStatus, ReportPeriod, WritingReport};

use crate::{error::Result, http::ApiClient};

#[derive(Serialize)]
struct PeriodQuery {
    period: ReportPeriod,
}

impl ApiClient {
    pub async fn gamification_status(&self) -> Result<GamificationStatus> {
        self.get("/gamification/status").await
    }

    pub async fn achievements(&self) -> Result<AchievementList> {
        self.get("/gamification/achievements").await
    }

    pub async fn update_daily_goal(&self, goal: DailyGoal) -> Result<()> {
        self.post("/gamification/goal", &goal).await
    }

    pub async fn writing_report(&self, period: ReportPeriod) -> Result<WritingReport> {
        self.get_query("/gamification/report", &PeriodQuery { period })
            .await
    }

    /// Tells the server the unlock was shown so it is not reported again.
    pub async fn mark_achievement_notified(&self, id: &str) -> Result<()> {
        self.post_empty(&format!("/gamification/achievements/{}/notify", id))
            .await
    }
}

use serde::Serialize;
use wenote_core::{Achievement, DailyGoal, GamificationStatus, ReportPeriod, WritingReport};

use crate::{error::Result, http::ApiClient};

/// Target shown before the first status fetch.
pub const DEFAULT_GOAL_TARGET: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreakDisplay {
    pub current: i64,
    pub longest: i64,
    pub at_risk: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub current: i64,
    pub target: i64,
    /// 0 to 100
    pub percent: f64,
    pub completed: bool,
}

/// Streaks, daily goal and achievements.
///
/// Status and the achievement catalogue are fetched independently. Newly
/// unlocked achievements found in a status response are queued in
/// `pending_notifications` until each one is dismissed.
pub struct GamificationStore {
    api: ApiClient,
    status: Option<GamificationStatus>,
    achievements: Vec<Achievement>,
    pending_notifications: Vec<Achievement>,
    is_loading: bool,
}

impl GamificationStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            status: None,
            achievements: vec![],
            pending_notifications: vec![],
            is_loading: false,
        }
    }

    pub fn status(&self) -> Option<&GamificationStatus> {
        self.status.as_ref()
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn pending_notifications(&self) -> &[Achievement] {
        &self.pending_notifications
    }

    /// The unlock to show next, if any.
    pub fn next_notification(&self) -> Option<&Achievement> {
        self.pending_notifications.first()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn streak_display(&self) -> StreakDisplay {
        match &self.status {
            Some(status) => StreakDisplay {
                current: status.current_streak,
                longest: status.longest_streak,
                at_risk: status.streak_at_risk,
            },
            None => StreakDisplay {
                current: 0,
                longest: 0,
                at_risk: false,
            },
        }
    }

    pub fn goal_progress(&self) -> GoalProgress {
        match &self.status {
            Some(status) => GoalProgress {
                current: status.today_chars,
                target: status.daily_char_goal,
                percent: (status.goal_progress * 100.0).min(100.0),
                completed: status.goal_completed,
            },
            None => GoalProgress {
                current: 0,
                target: DEFAULT_GOAL_TARGET,
                percent: 0.0,
                completed: false,
            },
        }
    }

    pub fn unlocked_achievements(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| a.unlocked).collect()
    }

    pub fn locked_achievements(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| !a.unlocked).collect()
    }

    pub async fn fetch_status(&mut self) -> Result<()> {
        self.is_loading = true;
        let result = self.api.gamification_status().await;
        self.is_loading = false;

        let status = result?;
        if !status.new_achievements.is_empty() {
            self.pending_notifications = status.new_achievements.clone();
        }
        self.status = Some(status);

        Ok(())
    }

    pub async fn fetch_achievements(&mut self) -> Result<()> {
        self.achievements = self.api.achievements().await?.list;
        Ok(())
    }

    /// Sets the daily character goal and reloads the status.
    pub async fn set_daily_goal(&mut self, goal: u32) -> Result<()> {
        self.api.update_daily_goal(DailyGoal::new(goal)?).await?;
        self.fetch_status().await
    }

    /// Acknowledges one unlock: the server stops reporting it and it leaves
    /// the local queue.
    pub async fn dismiss_notification(&mut self, achievement_id: &str) -> Result<()> {
        self.api.mark_achievement_notified(achievement_id).await?;
        self.pending_notifications.retain(|a| a.id != achievement_id);
        Ok(())
    }

    pub async fn fetch_report(&self, period: ReportPeriod) -> Result<WritingReport> {
        self.api.writing_report(period).await
    }

    pub fn clear_pending_notifications(&mut self) {
        self.pending_notifications.clear();
    }
}

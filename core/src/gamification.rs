use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, models::Listing, null_as_default};

/// Bounds the backend enforces on the daily character goal.
pub const MIN_DAILY_GOAL: u32 = 100;
pub const MAX_DAILY_GOAL: u32 = 10_000;

/// Achievement definition together with the user's unlock state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_zh: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_zh: String,
    #[serde(default)]
    pub icon: String,
    /// notes, streak, words or goals
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub threshold: i64,
    /// common, rare, epic or legendary
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}

pub type AchievementList = Listing<Achievement>;

/// Payload of `GET /gamification/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GamificationStatus {
    pub current_streak: i64,
    pub longest_streak: i64,
    #[serde(default)]
    pub last_active_date: Option<DateTime<Utc>>,
    /// No activity yet today, the streak breaks at midnight
    #[serde(default)]
    pub streak_at_risk: bool,

    pub daily_char_goal: i64,
    pub today_chars: i64,
    /// 0.0 and up; exceeds 1.0 once the goal is beaten
    #[serde(default)]
    pub goal_progress: f64,
    #[serde(default)]
    pub goal_completed: bool,

    #[serde(default)]
    pub total_notes: i64,
    #[serde(default)]
    pub total_chars: i64,

    /// Unlocked but not yet shown to the user
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_achievements: Vec<Achievement>,
}

/// Body of `POST /gamification/goal`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyGoal {
    pub daily_char_goal: u32,
}

impl DailyGoal {
    pub fn new(daily_char_goal: u32) -> Result<Self, CoreError> {
        if !(MIN_DAILY_GOAL..=MAX_DAILY_GOAL).contains(&daily_char_goal) {
            return Err(CoreError::InvalidGoal(daily_char_goal));
        }

        Ok(DailyGoal { daily_char_goal })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    #[default]
    Week,
    Month,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(ReportPeriod::Week),
            "month" => Ok(ReportPeriod::Month),
            _ => Err(CoreError::InvalidPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly or monthly writing summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WritingReport {
    pub period: String,
    pub start_date: String,
    pub end_date: String,

    pub notes_created: i64,
    pub chars_written: i64,
    pub active_days: i64,
    pub goals_met: i64,

    /// Differences against the previous period
    #[serde(default)]
    pub notes_delta: i64,
    #[serde(default)]
    pub chars_delta: i64,
    #[serde(default)]
    pub active_days_delta: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements_earned: Vec<Achievement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_stats: Vec<DailyStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStat {
    pub date: String,
    pub notes: i64,
    pub chars: i64,
    pub goal_met: bool,
}

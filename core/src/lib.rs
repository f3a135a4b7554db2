#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod envelope;
pub mod error;
pub mod gamification;
pub mod models;
pub mod stats;
pub mod user;
pub mod view;

// Re-export commonly used types
pub use envelope::{Envelope, CODE_SUCCESS, CODE_UNAUTHORIZED};
pub use error::CoreError;
pub use gamification::{
    Achievement, AchievementList, DailyGoal, DailyStat, GamificationStatus, ReportPeriod,
    WritingReport,
};
pub use models::{
    AiSummary, BatchMove, BatchResult, Listing, NewNote, NewTag, Note, NoteFlag, NoteIds,
    NoteList, NoteTags, NoteUpdate, Notebook, NotebookList, NotebookName, Tag, TagList, TagUpdate,
};
pub use stats::{NotebookStat, StatsOverview, TagStat, TrendPoint};
pub use user::{
    AccountDeletion, Credentials, LoginResponse, PasswordChange, ProfileUpdate, TokenResponse,
    User,
};
pub use view::{NoteQuery, View, ViewState, DEFAULT_PAGE_SIZE};

/// The backend sends empty lists as `null`; treat that the same as `[]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

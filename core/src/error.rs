use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("Invalid view '{0}': expected active, trash, starred or a notebook id")]
    InvalidView(String),

    #[error("Invalid report period '{0}': expected week or month")]
    InvalidPeriod(String),

    #[error("Daily goal {0} is out of range (100 to 10000 characters)")]
    InvalidGoal(u32),

    #[error("Invalid note flag '{0}': expected starred or pinned")]
    InvalidFlag(String),
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatsOverview {
    pub total_notes: i64,
    pub total_notebooks: i64,
    pub total_tags: i64,
    pub this_week_notes: i64,
    pub total_words: i64,
    pub this_week_words: i64,
}

/// Notes created on one day (`YYYY-MM-DD`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagStat {
    pub tag_name: String,
    pub count: i64,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotebookStat {
    pub notebook_name: String,
    pub count: i64,
}

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::CoreError, null_as_default};

/// Colour the backend assigns to tags created without one.
pub const DEFAULT_TAG_COLOR: &str = "#6B7280";

/// Palette used to give uncoloured tags a stable colour.
pub const TAG_PALETTE: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
];

/// A note as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Note {
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    pub notebook_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// AI generated summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Tag names suggested by the AI pass, not yet applied
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggested_tags: Vec<String>,
    /// pending, running, done or failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_status: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_starred: bool,
    /// Set while the note sits in the trash
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl Note {
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn tag_ids(&self) -> Vec<u64> {
        self.tags.iter().map(|t| t.id).collect()
    }

    pub fn flag(&self, flag: NoteFlag) -> bool {
        match flag {
            NoteFlag::Starred => self.is_starred,
            NoteFlag::Pinned => self.is_pinned,
        }
    }
}

/// Boolean note attributes that can be toggled in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFlag {
    Starred,
    Pinned,
}

impl NoteFlag {
    /// Partial update flipping this flag to `value`.
    pub fn update(self, value: bool) -> NoteUpdate {
        match self {
            NoteFlag::Starred => NoteUpdate {
                is_starred: Some(value),
                ..Default::default()
            },
            NoteFlag::Pinned => NoteUpdate {
                is_pinned: Some(value),
                ..Default::default()
            },
        }
    }
}

impl FromStr for NoteFlag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starred" | "star" | "is_starred" => Ok(NoteFlag::Starred),
            "pinned" | "pin" | "is_pinned" => Ok(NoteFlag::Pinned),
            other => Err(CoreError::InvalidFlag(other.to_string())),
        }
    }
}

impl fmt::Display for NoteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteFlag::Starred => f.write_str("starred"),
            NoteFlag::Pinned => f.write_str("pinned"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Notebook {
    pub id: u64,
    pub name: String,
    /// Exactly one notebook per user is the default one
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub note_count: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub note_count: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Tag {
    /// The tag's own colour, or a colour derived from its name when it still
    /// carries the server default.
    pub fn display_color(&self) -> &str {
        if !self.color.is_empty() && self.color != DEFAULT_TAG_COLOR {
            return &self.color;
        }

        // Only the shift is done in 32 bits; the running sum is not truncated
        let hash = self.name.encode_utf16().fold(0i64, |hash, unit| {
            let shifted = i64::from((hash as i32).wrapping_shl(5));
            i64::from(unit).wrapping_add(shifted).wrapping_sub(hash)
        });

        TAG_PALETTE[(hash.unsigned_abs() as usize) % TAG_PALETTE.len()]
    }
}

/// Page of notes for the active or trash listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NoteList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<Note>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

/// `{"list": [...]}` payload used by the unpaginated listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Listing<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub list: Vec<T>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Listing { list: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(list: Vec<T>) -> Self {
        Listing { list }
    }
}

pub type NotebookList = Listing<Notebook>;
pub type TagList = Listing<Tag>;

/// Body of `POST /notes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewNote {
    pub notebook_id: u64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<u64>,
}

impl NewNote {
    /// An untitled, empty note in the given notebook.
    pub fn empty(notebook_id: u64) -> Self {
        NewNote {
            notebook_id,
            title: String::new(),
            content: String::new(),
            tag_ids: vec![],
        }
    }
}

/// Body of `PATCH /notes/{id}`. Only present fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    /// Replaces the note's tags when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
}

impl From<&Note> for NoteUpdate {
    fn from(note: &Note) -> Self {
        NoteUpdate {
            title: Some(note.title.clone()),
            content: Some(note.content.clone()),
            notebook_id: Some(note.notebook_id),
            is_starred: Some(note.is_starred),
            is_pinned: Some(note.is_pinned),
            tag_ids: Some(note.tag_ids()),
        }
    }
}

/// Body of `PUT /notes/{id}/tags`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteTags {
    pub tag_ids: Vec<u64>,
}

/// Reply of `POST /notes/{id}/ai/generate`. `tags` are suggested names, not
/// tags that exist yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AiSummary {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Body of the batch delete and restore endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteIds {
    pub note_ids: Vec<u64>,
}

/// Body of `POST /notes/batch/move`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchMove {
    pub note_ids: Vec<u64>,
    pub notebook_id: u64,
}

/// Counters reported by the batch endpoints; only the matching one is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BatchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restored_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_count: Option<u64>,
}

/// Body for creating or renaming a notebook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotebookName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTag {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TagUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

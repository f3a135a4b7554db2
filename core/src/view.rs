use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Which slice of the user's notes is being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Active,
    Trash,
    Starred,
    Notebook(u64),
}

impl FromStr for View {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" | "all" => Ok(View::Active),
            "trash" => Ok(View::Trash),
            "starred" => Ok(View::Starred),
            other => other
                .parse::<u64>()
                .map(View::Notebook)
                .map_err(|_| CoreError::InvalidView(other.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Active => f.write_str("active"),
            View::Trash => f.write_str("trash"),
            View::Starred => f.write_str("starred"),
            View::Notebook(id) => write!(f, "{}", id),
        }
    }
}

/// Query string sent to the note listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NoteQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<u64>,
}

/// View selector, filters and pagination cursor of the notes list.
///
/// Changing the view, the search text or the tag filter always moves the
/// cursor back to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    view: View,
    filter_tag: Option<u64>,
    search: String,
    page: u32,
    page_size: u32,
    total: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: u32) -> Self {
        ViewState {
            view: View::Active,
            filter_tag: None,
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn filter_tag(&self) -> Option<u64> {
        self.filter_tag
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total reported by the last successful fetch
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn is_trash(&self) -> bool {
        self.view == View::Trash
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.page = 1;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Selects `tag_id` as the filter, or clears it when it is already the
    /// active one.
    pub fn toggle_filter_tag(&mut self, tag_id: u64) {
        self.filter_tag = if self.filter_tag == Some(tag_id) {
            None
        } else {
            Some(tag_id)
        };
        self.page = 1;
    }

    pub fn clear_filter_tag(&mut self) {
        self.filter_tag = None;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn query(&self) -> NoteQuery {
        let keyword = if self.search.is_empty() {
            None
        } else {
            Some(self.search.clone())
        };

        let (is_starred, notebook_id) = match self.view {
            View::Starred => (Some(true), None),
            View::Notebook(id) => (None, Some(id)),
            View::Active | View::Trash => (None, None),
        };

        NoteQuery {
            page: self.page,
            page_size: self.page_size,
            keyword,
            is_starred,
            notebook_id,
            tag_id: self.filter_tag,
        }
    }
}

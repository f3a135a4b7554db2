pub mod auth;
pub mod config;
pub mod note;
pub mod notebook;
pub mod profile;
pub mod stats;
pub mod streak;
pub mod tag;
pub mod trash;

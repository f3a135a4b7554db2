//! One module per backend resource. Each method maps to exactly one request.

pub mod auth;
pub mod gamification;
pub mod notebooks;
pub mod notes;
pub mod stats;
pub mod tags;
pub mod users;

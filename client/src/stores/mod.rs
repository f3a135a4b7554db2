pub mod gamification;
pub mod user;

pub use gamification::{GamificationStore, GoalProgress, StreakDisplay};
pub use user::UserStore;

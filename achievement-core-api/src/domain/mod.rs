pub mod claims;
pub mod detail;
pub mod new_achievement;
pub mod principal;
pub mod role;

pub use claims::TokenClaims;
pub use detail::{AchievementDetail, StatusEvent};
pub use new_achievement::NewAchievement;
pub use principal::{permissions, Principal};
pub use role::Role;

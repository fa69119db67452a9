pub mod attachment;
pub mod content;
pub mod patch;
pub mod reference;
pub mod status;

pub use attachment::{Attachment, FileReference};
pub use content::AchievementContentModel;
pub use patch::ContentPatch;
pub use reference::AchievementReferenceModel;
pub use status::AchievementStatus;

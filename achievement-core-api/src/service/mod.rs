pub mod advisor_directory;
pub mod config;
pub mod identity_resolver;
pub mod lifecycle;
pub mod revocation_ledger;
pub mod session_service;
pub mod token_codec;

pub use advisor_directory::AdvisorDirectory;
pub use config::AuthConfig;
pub use identity_resolver::IdentityResolver;
pub use lifecycle::AchievementLifecycleEngine;
pub use revocation_ledger::RevocationLedger;
pub use session_service::SessionService;
pub use token_codec::TokenCodec;

#[cfg(test)]
pub(crate) mod test_utils;

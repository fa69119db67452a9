use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// Signed token claims.
///
/// `token_version` is compared against the revocation ledger on every
/// request; `exp` is a unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub token_version: i32,
    pub exp: i64,
}

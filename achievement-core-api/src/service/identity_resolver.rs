use achievement_core_db::repository::{LecturerRepository, StudentRepository};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{Principal, Role};
use crate::error::{ApiError, ApiResult};
use crate::service::revocation_ledger::RevocationLedger;
use crate::service::token_codec::TokenCodec;

/// Turns a bearer token into a scoped [`Principal`].
///
/// Order of checks:
/// 1. Signature and expiry
/// 2. Token version against the revocation ledger
/// 3. Student or lecturer record for the scoped id
///
/// A student or advisor without a record is refused rather than treated as
/// unscoped.
pub struct IdentityResolver {
    codec: Arc<TokenCodec>,
    ledger: RevocationLedger,
    students: Arc<dyn StudentRepository>,
    lecturers: Arc<dyn LecturerRepository>,
}

impl IdentityResolver {
    pub fn new(
        codec: Arc<TokenCodec>,
        ledger: RevocationLedger,
        students: Arc<dyn StudentRepository>,
        lecturers: Arc<dyn LecturerRepository>,
    ) -> Self {
        Self {
            codec,
            ledger,
            students,
            lecturers,
        }
    }

    /// Resolve the principal for an `Authorization` header value.
    ///
    /// The `Bearer ` prefix is optional.
    pub async fn resolve(&self, bearer: &str) -> ApiResult<Principal> {
        let token = bearer.strip_prefix("Bearer ").unwrap_or(bearer).trim();
        if token.is_empty() {
            return Err(ApiError::InvalidToken("missing token".to_string()));
        }

        let claims = self.codec.decode(token)?;

        match self.ledger.current_version(claims.user_id).await? {
            Some(current) if current == claims.token_version => {}
            current => {
                warn!(
                    user_id = %claims.user_id,
                    token_version = claims.token_version,
                    current_version = ?current,
                    "rejected revoked token"
                );
                return Err(ApiError::TokenRevoked);
            }
        }

        let principal = Principal::from_claims(&claims);
        let scoped_id = self.resolve_scope(principal.user_id, principal.role).await?;
        debug!(user_id = %principal.user_id, role = %principal.role, scoped_id = ?scoped_id, "principal resolved");
        Ok(principal.with_scope(scoped_id))
    }

    async fn resolve_scope(&self, user_id: Uuid, role: Role) -> ApiResult<Option<Uuid>> {
        match role {
            Role::Admin => Ok(None),
            Role::Student => self
                .students
                .find_by_user_id(user_id)
                .await?
                .map(|student| Some(student.id))
                .ok_or_else(|| ApiError::ProfileNotFound(format!("no student record for user {user_id}"))),
            Role::LecturerAdvisor => self
                .lecturers
                .find_by_user_id(user_id)
                .await?
                .map(|lecturer| Some(lecturer.id))
                .ok_or_else(|| ApiError::ProfileNotFound(format!("no lecturer record for user {user_id}"))),
        }
    }
}

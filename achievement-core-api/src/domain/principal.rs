use std::collections::BTreeSet;
use uuid::Uuid;

use super::claims::TokenClaims;
use super::role::Role;
use crate::error::{ApiError, ApiResult};

/// Permission names carried in tokens.
pub mod permissions {
    pub const ACHIEVEMENT_CREATE: &str = "achievement:create";
    pub const ACHIEVEMENT_READ: &str = "achievement:read";
    pub const ACHIEVEMENT_VERIFY: &str = "achievement:verify";
    pub const USER_MANAGE: &str = "user:manage";
}

/// Request-scoped identity built from a validated token.
///
/// `scoped_id` is the student record id for students and the lecturer record
/// id for advisors. It is filled once by the identity resolver and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
    pub permissions: BTreeSet<String>,
    pub token_version: i32,
    pub scoped_id: Option<Uuid>,
}

impl Principal {
    /// Unscoped principal straight from token claims.
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
            permissions: claims.permissions.iter().cloned().collect(),
            token_version: claims.token_version,
            scoped_id: None,
        }
    }

    pub fn with_scope(self, scoped_id: Option<Uuid>) -> Self {
        Self { scoped_id, ..self }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    pub fn require_permission(&self, permission: &str) -> ApiResult<()> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!("missing permission: {permission}")))
        }
    }

    pub fn require_role(&self, role: Role) -> ApiResult<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!("only {role} may perform this action")))
        }
    }

    /// Student record id of a student principal.
    pub fn student_id(&self) -> ApiResult<Uuid> {
        self.scoped_for(Role::Student)
    }

    /// Lecturer record id of an advisor principal.
    pub fn lecturer_id(&self) -> ApiResult<Uuid> {
        self.scoped_for(Role::LecturerAdvisor)
    }

    fn scoped_for(&self, role: Role) -> ApiResult<Uuid> {
        self.require_role(role)?;
        self.scoped_id
            .ok_or_else(|| ApiError::ProfileNotFound(format!("no {role} record resolved")))
    }
}

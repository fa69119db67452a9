use achievement_core_db::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ApiError {
    /// HTTP status the routing layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400,
            ApiError::InvalidToken(_) | ApiError::TokenRevoked => 401,
            ApiError::Forbidden(_) | ApiError::ProfileNotFound(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::InvalidState(_) | ApiError::Conflict(_) => 409,
            ApiError::StoreUnavailable(_) => 503,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::NotFound(what),
            StoreError::Conflict(what) => ApiError::Conflict(what),
            StoreError::Unavailable(source) => ApiError::StoreUnavailable(source.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

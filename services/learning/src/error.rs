use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Learning service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum LearningServiceError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("insufficient privilege")]
    Forbidden,
    #[error("missing data")]
    MissingData,
    #[error("invalid role")]
    InvalidRole,
    #[error("unknown manager id")]
    UnknownManager,
    #[error("diocese not found")]
    DioceseNotFound,
    #[error("region not found")]
    RegionNotFound,
    #[error("group not found")]
    GroupNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("unit not found")]
    UnitNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl LearningServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "AUTHENTICATION_REQUIRED",
            Self::Forbidden => "INSUFFICIENT_PRIVILEGE",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidRole => "INVALID_ROLE",
            Self::UnknownManager => "UNKNOWN_MANAGER",
            Self::DioceseNotFound => "DIOCESE_NOT_FOUND",
            Self::RegionNotFound => "REGION_NOT_FOUND",
            Self::GroupNotFound => "GROUP_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UnitNotFound => "UNIT_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for LearningServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::MissingData | Self::InvalidRole | Self::UnknownManager => StatusCode::BAD_REQUEST,
            Self::DioceseNotFound
            | Self::RegionNotFound
            | Self::GroupNotFound
            | Self::UserNotFound
            | Self::UnitNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Internal detail stays in the logs; callers only see the generic kind.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

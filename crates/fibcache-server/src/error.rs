use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use fibcache_core::{EngineError, StoreError};

#[derive(Debug)]
pub enum AppError {
    /// Parametros invalidos
    BadRequest(String),

    /// Error interno (store caido, entry corrupta)
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidArgument(_) => AppError::BadRequest(err.to_string()),
            EngineError::CorruptEntry { .. } | EngineError::Store(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let err: AppError = EngineError::InvalidArgument(-1).into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn store_errors_map_to_internal() {
        let err: AppError = StoreError::unavailable("refused").into();
        assert!(matches!(err, AppError::Internal(_)));

        let err: AppError = EngineError::Store(StoreError::unavailable("refused")).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}

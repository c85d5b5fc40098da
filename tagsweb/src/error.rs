use axum::{http::StatusCode, response::IntoResponse};
use tags_core::TagsError;

#[derive(Debug)]
pub struct ApiError {
    code: StatusCode,
    message: Option<String>,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let Some(msg) = self.message {
            (self.code, msg).into_response()
        } else {
            self.code.into_response()
        }
    }
}

impl From<TagsError> for ApiError {
    fn from(err: TagsError) -> Self {
        Self {
            code: status_for(&err),
            message: Some(err.to_string()),
        }
    }
}

/// Broken props are the caller's fault and map to 422, JSON that does not even
/// parse maps to 400.
pub fn status_for(err: &TagsError) -> StatusCode {
    if err.is_contract_violation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_REQUEST
    }
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            code: StatusCode::NOT_FOUND,
            message: None,
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("post {0} not found")]
    NotFound(String),
    #[error("table api 連接失敗: {0}")]
    ConnectFail(#[from] reqwest::Error),
    #[error("Invalid response from the table api: {0}")]
    InvalidResponse(String),
    #[error("頁面渲染失敗: {0}")]
    RenderFail(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConnectFail(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::RenderFail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!("{}", self);
        }

        let error_message = self.to_string();
        (status_code, error_message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let not_found = AppError::NotFound("rec1".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let bad_gateway = AppError::InvalidResponse("status 500".to_string()).into_response();
        assert_eq!(bad_gateway.status(), StatusCode::BAD_GATEWAY);
    }
}

//! # Employee Service エラー定義
//!
//! Employee Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | detail |
//! |-----------|-----------|--------|
//! | `BadRequest` | 400 | エラーメッセージ |
//! | `NotFound` | 500 | エラーメッセージ |
//! | `Database` | 500 | 固定文言（原因はログのみ） |
//!
//! `NotFound` は専用のステータスに変換せず、サーバーエラーとして返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_domain::DomainError;
use roster_shared::{
    ErrorResponse,
    event_log::error::{category, kind},
};
use thiserror::Error;

/// Employee Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// 不正なリクエスト（ストアに到達する前に検出）
    #[error("{0}")]
    BadRequest(String),

    /// 従業員が見つからない
    #[error("{0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] roster_infra::InfraError),
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) => CoreError::BadRequest(err.to_string()),
            DomainError::NotFound { .. } => CoreError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            CoreError::NotFound(msg) => {
                tracing::warn!(detail = %msg, "従業員が見つかりません");
                ErrorResponse::new(
                    "employee-not-found",
                    "Internal Server Error",
                    StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    msg.clone(),
                )
            }
            CoreError::Database(e) => {
                tracing::error!(
                    error.category = category::INFRASTRUCTURE,
                    error.kind = kind::DATABASE,
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

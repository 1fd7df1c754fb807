use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use fundlink_core::accounts::AccountError;
use fundlink_core::errors::Error as CoreError;
use fundlink_core::ledger::LedgerError;
use fundlink_core::messaging::MessagingError;
use fundlink_core::social::SocialError;
use fundlink_core::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => (core_status(e), e.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

fn core_status(e: &CoreError) -> StatusCode {
    match e {
        CoreError::Account(AccountError::NotFound(_)) => StatusCode::NOT_FOUND,
        CoreError::Account(AccountError::AlreadyExists(_)) => StatusCode::CONFLICT,
        CoreError::Account(AccountError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        CoreError::Account(AccountError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
        CoreError::Account(AccountError::Credential(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        CoreError::Account(AccountError::Store(e)) => store_status(e),
        CoreError::Ledger(LedgerError::AccountNotFound(_) | LedgerError::ProjectNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        CoreError::Ledger(LedgerError::InsufficientFunds | LedgerError::InvalidAmount(_)) => {
            StatusCode::BAD_REQUEST
        }
        CoreError::Ledger(LedgerError::Store(e)) => store_status(e),
        CoreError::Messaging(MessagingError::ThreadNotFound(_)) => StatusCode::NOT_FOUND,
        CoreError::Messaging(
            MessagingError::InvalidParticipants(_) | MessagingError::InvalidInput(_),
        ) => StatusCode::BAD_REQUEST,
        CoreError::Messaging(MessagingError::Store(e)) => store_status(e),
        CoreError::Social(SocialError::PostNotFound(_) | SocialError::EventNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        CoreError::Social(SocialError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
        CoreError::Social(SocialError::Store(e)) => store_status(e),
        CoreError::Store(e) => store_status(e),
    }
}

fn store_status(e: &StoreError) -> StatusCode {
    match e {
        StoreError::Busy(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        ApiError::Core(err.into())
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Core(err.into())
    }
}

impl From<MessagingError> for ApiError {
    fn from(err: MessagingError) -> Self {
        ApiError::Core(err.into())
    }
}

impl From<SocialError> for ApiError {
    fn from(err: SocialError) -> Self {
        ApiError::Core(err.into())
    }
}

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Invalid receipt: {message}")]
    InvalidReceipt { message: String },

    #[error("No receipt found for id: {id}")]
    NotFound { id: String },

    #[error("Store error: {message}")]
    StoreError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;

impl ReceiptError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::InvalidReceipt { .. } => StatusCode::BAD_REQUEST,
            ReceiptError::NotFound { .. } => StatusCode::NOT_FOUND,
            ReceiptError::StoreError { .. }
            | ReceiptError::InvalidConfigValueError { .. }
            | ReceiptError::IoError(_)
            | ReceiptError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ReceiptError::InvalidReceipt { .. } => "INVALID_RECEIPT",
            ReceiptError::NotFound { .. } => "RECEIPT_NOT_FOUND",
            ReceiptError::StoreError { .. } => "STORE_ERROR",
            ReceiptError::InvalidConfigValueError { .. } => "CONFIG_ERROR",
            ReceiptError::IoError(_) => "IO_ERROR",
            ReceiptError::TomlError(_) => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(e: serde_json::Error) -> Self {
        ReceiptError::InvalidReceipt {
            message: e.to_string(),
        }
    }
}

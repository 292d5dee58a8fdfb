use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown payment status: {0}")]
    UnknownStatus(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

pub type CommonResult<T> = std::result::Result<T, CommonError>;

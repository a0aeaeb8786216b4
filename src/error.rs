use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sheet error: {0}")]
    Sheet(String),

    #[error("invalid range notation {0:?}")]
    RangeFormat(String),

    #[error("invalid payout fraction {0:?}")]
    FractionFormat(String),
}

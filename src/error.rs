use thiserror::Error;

/// Result type used by the container and all exporters
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while ingesting or exporting fragments
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format code: {0} (expected 1-4)")]
    UnsupportedFormat(u8),

    #[error("Standard output is not supported for the {format} format")]
    UnsupportedTarget { format: &'static str },

    #[error("Invalid fragment in {precursor}: start {start} is after stop {stop}")]
    InvalidFragment {
        precursor: String,
        start: u64,
        stop: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AeroError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

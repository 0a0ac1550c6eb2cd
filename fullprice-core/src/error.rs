use thiserror::Error;

#[derive(Debug, Error)]
pub enum FullPriceError {
    #[error("Product '{0}' not found in catalog")]
    ProductNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

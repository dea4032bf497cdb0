//! Error types for dataset loading and aggregation.
//!
//! Everything in here is fatal at startup: a dataset that cannot be fetched
//! or does not match the expected schema must stop the server before it
//! serves a half-initialized dashboard. Per-request conditions (unknown
//! site, empty site) are not errors and never reach this type.

/// Result type for ingestion and configuration operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// Error type for ingestion and configuration.
#[derive(Debug, thiserror::Error)]
pub enum WaveError {
    /// Network-level failure while fetching the dataset.
    #[error("Fetch error: {message} (source={source_name})")]
    Fetch {
        message: String,
        source_name: String,
    },

    /// The data source answered with a non-success status.
    #[error("HTTP error: status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The CSV body could not be read or deserialized.
    #[error("CSV error at record {record}: {message}")]
    Csv { record: u64, message: String },

    /// The header row does not carry a required column.
    #[error("Schema error: missing required column '{column}'")]
    Schema { column: String },

    /// A `DateTime` cell matched none of the accepted formats.
    #[error("Invalid timestamp '{value}' at row {row}")]
    InvalidTimestamp { row: usize, value: String },

    /// Configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local I/O failure (file source, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    /// Create a fetch error for the named source.
    pub fn fetch(message: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            source_name: source_name.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<csv::Error> for WaveError {
    fn from(err: csv::Error) -> Self {
        let record = err.position().map(|p| p.record()).unwrap_or(0);
        WaveError::Csv {
            record,
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for WaveError {
    fn from(err: reqwest::Error) -> Self {
        let source_name = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        WaveError::Fetch {
            message: err.to_string(),
            source_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_column() {
        let err = WaveError::Schema {
            column: "Hsig".to_string(),
        };
        assert_eq!(err.to_string(), "Schema error: missing required column 'Hsig'");
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = WaveError::InvalidTimestamp {
            row: 7,
            value: "yesterday".to_string(),
        };
        assert!(err.to_string().contains("row 7"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WaveError = io.into();
        assert!(matches!(err, WaveError::Io(_)));
    }
}

use thiserror::Error;

/// Errors from the log storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),

    #[error("remove failed: {0}")]
    Remove(String),
}

/// Errors from an exchange with the responder service.
///
/// Transport failures and non-success statuses are the two recoverable
/// failure kinds; a success body that fails to parse is treated the same
/// way by the widget.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("responder returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed reply: {0}")]
    Deserialization(String),
}

/// Errors from core widget operations.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Write("disk full".to_string());
        assert_eq!(err.to_string(), "write failed: disk full");
    }

    #[test]
    fn test_responder_error_display() {
        let err = ResponderError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_widget_error_wraps_storage() {
        let err = WidgetError::from(StorageError::Read("gone".to_string()));
        assert_eq!(err.to_string(), "storage error: read failed: gone");
    }
}

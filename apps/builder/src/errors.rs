use thiserror::Error;

/// Application-level error type.
///
/// Document edits, scoring and page-fit estimation are total and never produce one
/// of these. Only the storage and export boundaries do.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage I/O error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, used as a structured logging field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Export(_) => "EXPORT_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let io = AppError::Storage(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let json = AppError::Serialization(serde_json::from_str::<u8>("nope").unwrap_err());
        let export = AppError::Export("renderer crashed".to_string());
        let internal = AppError::Internal(anyhow::anyhow!("boom"));

        assert_eq!(io.code(), "STORAGE_ERROR");
        assert_eq!(json.code(), "SERIALIZATION_ERROR");
        assert_eq!(export.code(), "EXPORT_ERROR");
        assert_eq!(internal.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_export_message_is_displayed() {
        let err = AppError::Export("renderer crashed".to_string());
        assert_eq!(err.to_string(), "Export error: renderer crashed");
    }
}

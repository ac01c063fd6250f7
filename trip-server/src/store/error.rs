//! Store error types.

/// Errors from a key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The key cannot be used as a file name
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    /// A lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            StoreError::InvalidKey("../etc".into()).to_string(),
            "invalid store key: \"../etc\""
        );
        assert_eq!(StoreError::Poisoned.to_string(), "store lock poisoned");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(StoreError::from(io).to_string(), "store I/O error: gone");
    }
}

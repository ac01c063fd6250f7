//! Arrivals feed error types.

/// Errors from an arrivals feed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArrivalsError {
    /// The feed has no board for this station
    #[error("no arrivals board for station {0}")]
    StationNotFound(String),

    /// Board data could not be loaded
    #[error("failed to load arrivals data: {message}")]
    Load { message: String },
}

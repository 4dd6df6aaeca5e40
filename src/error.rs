use thiserror::Error;

/// Errors from tahajod operations.
#[derive(Debug, Error, Clone)]
pub enum TahajodError {
    /// Malformed 24-hour "HH:MM" clock string.
    #[error("Invalid time '{input}': {reason}")]
    TimeParse { input: String, reason: String },

    /// Latitude/longitude outside the valid ranges.
    #[error("Coordinates out of range: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// IP geolocation lookup failed or reported a non-success status.
    #[error("Location lookup failed: {0}")]
    Location(String),

    /// Prayer timings request, response parsing, or extraction failed.
    #[error("Timings lookup failed: {0}")]
    Timings(String),
}

impl TahajodError {
    /// Creates a `TimeParse` error for a rejected clock string.
    pub fn time_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TimeParse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

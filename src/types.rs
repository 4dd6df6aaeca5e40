use crate::error::TahajodError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude, [-90, 90].
    pub lat: f64,
    /// Longitude, [-180, 180].
    pub lng: f64,
}

impl GeoCoordinate {
    /// Returns true iff both components are within their valid ranges
    /// (boundaries inclusive).
    pub fn is_valid(lat: f64, lng: f64) -> bool {
        (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
    }

    /// Creates a range-checked coordinate.
    ///
    /// # Errors
    /// Returns `InvalidCoordinates` if either component is out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, TahajodError> {
        if Self::is_valid(lat, lng) {
            Ok(Self { lat, lng })
        } else {
            Err(TahajodError::InvalidCoordinates { lat, lng })
        }
    }

    /// Creates a coordinate without range checks, for trusted values.
    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// Location information with coordinates and place names.
#[derive(Debug, Clone)]
pub struct LocationInfo {
    /// Geographic coordinates.
    pub coords: GeoCoordinate,
    /// City name (if available).
    pub city: Option<String>,
    /// Country name (if available).
    pub country: Option<String>,
}

impl LocationInfo {
    /// Returns a formatted location string (e.g., "Jakarta, Indonesia"),
    /// falling back to bare coordinates when no place names are known.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            format!("{:.4}°, {:.4}°", self.coords.lat, self.coords.lng)
        } else {
            parts.join(", ")
        }
    }
}

//! Prayer Timings Retrieval Module.
//!
//! Fetches per-day prayer times for a coordinate from the Aladhan
//! timings API. The astronomical calculation itself lives entirely on
//! the remote side.

use crate::error::TahajodError;
use crate::types::GeoCoordinate;
use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Default Aladhan timings endpoint.
pub const DEFAULT_TIMINGS_URL: &str = "http://api.aladhan.com/v1/timings";

/// Calculation method identifier sent with every request
/// (5 = Egyptian General Authority of Survey).
pub const DEFAULT_METHOD: u8 = 5;

#[derive(Debug, Deserialize)]
struct AladhanResponse {
    data: AladhanData,
}

#[derive(Debug, Deserialize)]
struct AladhanData {
    timings: BTreeMap<String, String>,
}

/// Prayer-times provider backed by the Aladhan timings API.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    url: String,
    method: u8,
}

impl AladhanClient {
    /// Creates a client querying the given endpoint with a fixed
    /// calculation method.
    pub fn new(url: impl Into<String>, method: u8) -> Self {
        Self {
            url: url.into(),
            method,
        }
    }

    /// Fetches the prayer timings for a location and date.
    ///
    /// Returns the full prayer-name to "HH:MM" mapping the service
    /// provides; callers extract the entries they need.
    ///
    /// # Errors
    /// Returns `Timings` on transport failure or an unexpected
    /// response shape.
    pub async fn timings(
        &self,
        coords: GeoCoordinate,
        date: NaiveDate,
    ) -> Result<BTreeMap<String, String>, TahajodError> {
        let client = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|e| TahajodError::Timings(format!("failed to create HTTP client: {e}")))?;

        let response = client
            .get(&self.url)
            .query(&[
                ("latitude", coords.lat.to_string()),
                ("longitude", coords.lng.to_string()),
                ("method", self.method.to_string()),
                ("date", date.format("%d-%m-%Y").to_string()),
            ])
            .send()
            .await
            .map_err(|e| TahajodError::Timings(format!("timings request failed: {e}")))?;

        let data: AladhanResponse = response
            .json()
            .await
            .map_err(|e| TahajodError::Timings(format!("failed to parse timings response: {e}")))?;

        Ok(data.data.timings)
    }

    /// Fetches the prayer timings for the day after `date`.
    pub async fn timings_next_day(
        &self,
        coords: GeoCoordinate,
        date: NaiveDate,
    ) -> Result<BTreeMap<String, String>, TahajodError> {
        self.timings(coords, date + Duration::days(1)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape_deserializes() {
        let body = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "timings": { "Fajr": "04:45", "Isha": "19:30" },
                "date": { "readable": "15 Mar 2026" }
            }
        }"#;
        let data: AladhanResponse = serde_json::from_str(body).unwrap();
        assert_eq!(data.data.timings.get("Fajr").map(String::as_str), Some("04:45"));
        assert_eq!(data.data.timings.get("Isha").map(String::as_str), Some("19:30"));
    }

    #[test]
    fn test_date_query_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(date.format("%d-%m-%Y").to_string(), "05-03-2026");
    }
}

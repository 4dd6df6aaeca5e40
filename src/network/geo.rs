//! IP-based Geolocation Module.
//!
//! Resolves the caller's approximate position from its public IP via
//! the ip-api.com JSON endpoint.

use crate::error::TahajodError;
use crate::types::{GeoCoordinate, LocationInfo};
use serde::Deserialize;

/// Default ip-api.com endpoint.
pub const DEFAULT_IP_API_URL: &str = "http://ip-api.com/json/";

/// ip-api.com response structure.
///
/// Failure responses carry only `status` and `message`, so everything
/// else is defaulted.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// Geolocation provider backed by the ip-api.com service.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    url: String,
}

impl IpApiLocator {
    /// Creates a locator querying the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Looks up the caller's location from its public IP address.
    ///
    /// The returned coordinates are exactly what the service reported;
    /// range validation happens at the planner before any further
    /// request is issued.
    ///
    /// # Errors
    /// Returns `Location` if the request fails, the response is not
    /// valid JSON, or the service reports a non-success status.
    pub async fn locate(&self) -> Result<LocationInfo, TahajodError> {
        let client = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|e| TahajodError::Location(format!("failed to create HTTP client: {e}")))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| TahajodError::Location(format!("ip-api request failed: {e}")))?;

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| TahajodError::Location(format!("failed to parse ip-api response: {e}")))?;

        if data.status != "success" {
            let detail = data.message.unwrap_or_else(|| data.status.clone());
            return Err(TahajodError::Location(format!(
                "ip-api returned non-success status: {detail}"
            )));
        }

        Ok(LocationInfo {
            coords: GeoCoordinate::new_unchecked(data.lat, data.lon),
            city: data.city,
            country: data.country,
        })
    }
}

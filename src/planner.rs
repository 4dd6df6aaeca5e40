//! Schedule Orchestration Module.
//!
//! Sequences location lookup, the two timings requests, and the night
//! partition into a single report. Every failure is terminal for the
//! run; no partial schedule is ever produced.

use crate::error::TahajodError;
use crate::network::geo::{DEFAULT_IP_API_URL, IpApiLocator};
use crate::network::timings::{AladhanClient, DEFAULT_METHOD, DEFAULT_TIMINGS_URL};
use crate::schedule::{NightSchedule, compute_schedule};
use crate::types::{GeoCoordinate, LocationInfo};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Planner configuration: provider endpoints and the calculation
/// method identifier.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// ip-api.com endpoint used for IP geolocation.
    pub ip_api_url: String,
    /// Aladhan timings endpoint.
    pub timings_url: String,
    /// Aladhan calculation method identifier.
    pub method: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ip_api_url: DEFAULT_IP_API_URL.to_string(),
            timings_url: DEFAULT_TIMINGS_URL.to_string(),
            method: DEFAULT_METHOD,
        }
    }
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ip_api_url(mut self, url: impl Into<String>) -> Self {
        self.ip_api_url = url.into();
        self
    }

    pub fn timings_url(mut self, url: impl Into<String>) -> Self {
        self.timings_url = url.into();
        self
    }

    pub fn method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }
}

/// Night schedule together with the location it was computed for.
#[derive(Debug, Clone)]
pub struct TahajodReport {
    pub schedule: NightSchedule,
    pub coords: GeoCoordinate,
    /// Present only when the location came from IP lookup.
    pub location: Option<LocationInfo>,
}

impl fmt::Display for TahajodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            writeln!(f, "Location: {}", location.display_name())?;
            writeln!(f, "Coordinates: {}", self.coords)?;
            writeln!(f)?;
        }
        write!(f, "{}", self.schedule)
    }
}

/// Orchestrates the external lookups and the core computation.
#[derive(Debug, Clone)]
pub struct Planner {
    locator: IpApiLocator,
    timings: AladhanClient,
}

impl Planner {
    /// Creates a planner from a configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            locator: IpApiLocator::new(config.ip_api_url),
            timings: AladhanClient::new(config.timings_url, config.method),
        }
    }

    /// Computes the Tahajjud schedule for the night starting on `date`.
    ///
    /// When `coords` is `None` the position is resolved via IP lookup.
    /// Isha is taken from `date`'s timings and Fajr from the next
    /// day's. The steps run strictly in sequence and the first failure
    /// aborts the rest of the pipeline: a failed location lookup means
    /// the timings provider is never contacted, and out-of-range
    /// coordinates are rejected before any timings request is issued.
    ///
    /// # Errors
    /// `Location`, `InvalidCoordinates`, `Timings`, or `TimeParse`,
    /// depending on the step that failed.
    pub async fn schedule_for(
        &self,
        coords: Option<GeoCoordinate>,
        date: NaiveDate,
    ) -> Result<TahajodReport, TahajodError> {
        let (coords, location) = match coords {
            Some(c) => (c, None),
            None => {
                let info = self.locator.locate().await?;
                (info.coords, Some(info))
            }
        };

        // Supplied and looked-up coordinates alike are range-checked
        // before the first timings request.
        let coords = GeoCoordinate::new(coords.lat, coords.lng)?;

        let today = self.timings.timings(coords, date).await?;
        let tomorrow = self.timings.timings_next_day(coords, date).await?;

        let isha = prayer_time(&today, "Isha")?;
        let fajr = prayer_time(&tomorrow, "Fajr")?;

        let schedule = compute_schedule(isha, fajr)?;

        Ok(TahajodReport {
            schedule,
            coords,
            location,
        })
    }
}

fn prayer_time<'a>(
    timings: &'a BTreeMap<String, String>,
    name: &str,
) -> Result<&'a str, TahajodError> {
    timings
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| TahajodError::Timings(format!("response is missing the '{name}' timing")))
}

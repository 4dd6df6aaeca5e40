//! Tahajjud night-prayer schedule calculator.
//!
//! Splits the night between Isha and the next day's Fajr into the
//! canonical fractions (half, third, sixth) to produce first-sleep,
//! Tahajjud, and second-sleep windows. Location discovery and prayer
//! timings come from external HTTP services (ip-api.com and the
//! Aladhan API); the partition itself is a pure function over two
//! "HH:MM" strings.

pub mod error;
pub mod network;
pub mod planner;
pub mod schedule;
pub mod types;

pub use error::TahajodError;
pub use planner::{Planner, PlannerConfig, TahajodReport};
pub use schedule::{NightSchedule, ScheduleSegment, compute_schedule, format_duration};
pub use types::{GeoCoordinate, LocationInfo};

pub mod prelude {
    pub use crate::error::TahajodError;
    pub use crate::planner::{Planner, PlannerConfig, TahajodReport};
    pub use crate::schedule::{NightSchedule, ScheduleSegment, compute_schedule, format_duration};
    pub use crate::types::{GeoCoordinate, LocationInfo};
}

//! Rush Window Detection

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::pricing::{
    types::DeliveryInstant,
    config::RushWindowConfig,
};

/// Detector for the weekly rush window that triggers the fee multiplier.
#[derive(Debug, Clone)]
pub struct RushWindowDetector {
    window: RushWindowConfig,
}

impl RushWindowDetector {
    /// Create a new rush window detector
    pub fn new(window: RushWindowConfig) -> Self {
        Self { window }
    }

    /// Whether `now`, read in UTC, is inside the rush window.
    pub fn is_rush_window_absolute(&self, now: DateTime<Utc>) -> bool {
        self.contains(&now)
    }

    /// Whether the delivery time, read in its own local offset, is inside
    /// the rush window.
    pub fn is_rush_window_local(&self, instant: &DeliveryInstant) -> bool {
        self.contains(instant)
    }

    /// Surcharge multiplier applied while in the window.
    pub fn multiplier(&self) -> f64 {
        self.window.multiplier
    }

    fn contains<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> bool {
        let hour = time.hour();
        time.weekday() == self.window.weekday
            && hour >= self.window.start_hour
            && hour < self.window.end_hour
    }
}

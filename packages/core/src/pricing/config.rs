//! Configuration for delivery pricing

use std::fs;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::pricing::error::PricingError;

/// Every threshold and fee used by the pricing pipeline.
///
/// Fields missing from a JSON document fall back to the defaults, so a
/// config file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Cart value below which the difference is charged as a surcharge.
    pub small_order_threshold: f64,
    pub base_delivery_fee: f64,
    /// Distance in metres covered by the base fee.
    pub base_distance: i64,
    /// Each started interval beyond `base_distance` costs `distance_fee`.
    pub distance_fee_interval: i64,
    pub distance_fee: f64,
    /// Item count at which per-item surcharges start.
    pub extra_item_threshold: i64,
    pub extra_item_fee: f64,
    /// Item count above which the flat bulk fee applies.
    pub bulk_order_threshold: i64,
    pub bulk_order_fee: f64,
    pub max_delivery_fee: f64,
    /// Cart value at or above which delivery is free.
    pub free_delivery_threshold: f64,
    pub rush_window: RushWindowConfig,
}

/// The weekly surcharge window, as `[start_hour, end_hour)` on `weekday`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RushWindowConfig {
    pub weekday: Weekday,
    pub start_hour: u32,
    pub end_hour: u32,
    pub multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            small_order_threshold: 10.0,
            base_delivery_fee: 2.0,
            base_distance: 1000,
            distance_fee_interval: 500,
            distance_fee: 1.0,
            extra_item_threshold: 5,
            extra_item_fee: 0.5,
            bulk_order_threshold: 12,
            bulk_order_fee: 1.2,
            max_delivery_fee: 15.0,
            free_delivery_threshold: 200.0,
            rush_window: RushWindowConfig::default(),
        }
    }
}

impl Default for RushWindowConfig {
    fn default() -> Self {
        Self {
            weekday: Weekday::Fri,
            start_hour: 15,
            end_hour: 19,
            multiplier: 1.2,
        }
    }
}

impl PricingConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, PricingError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PricingError::config(format!("invalid pricing config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PricingError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Reject configurations the pricing arithmetic cannot work with.
    pub fn validate(&self) -> Result<(), PricingError> {
        let amounts = [
            ("small_order_threshold", self.small_order_threshold),
            ("base_delivery_fee", self.base_delivery_fee),
            ("distance_fee", self.distance_fee),
            ("extra_item_fee", self.extra_item_fee),
            ("bulk_order_fee", self.bulk_order_fee),
            ("max_delivery_fee", self.max_delivery_fee),
            ("free_delivery_threshold", self.free_delivery_threshold),
            ("rush_window.multiplier", self.rush_window.multiplier),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(PricingError::config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.extra_item_threshold < 1 {
            return Err(PricingError::config(format!(
                "extra_item_threshold must be at least 1, got {}",
                self.extra_item_threshold
            )));
        }

        if self.distance_fee_interval <= 0 {
            return Err(PricingError::config(format!(
                "distance_fee_interval must be positive, got {}",
                self.distance_fee_interval
            )));
        }

        let window = &self.rush_window;
        if window.start_hour >= window.end_hour || window.end_hour > 24 {
            return Err(PricingError::config(format!(
                "rush window hours must satisfy start < end <= 24, got [{}, {})",
                window.start_hour, window.end_hour
            )));
        }

        Ok(())
    }
}

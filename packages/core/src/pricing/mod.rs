//! Delivery Pricing Module
//!
//! Computes the delivery fee for an order: a base fee from cart value,
//! distance and item count, an optional rush-window surcharge, and the
//! overall fee cap.

pub mod engine;
pub mod calculator;
pub mod detector;
pub mod clock;
pub mod types;
pub mod error;
pub mod config;


pub use engine::PricingOrchestrator;
pub use calculator::FeeCalculator;
pub use detector::RushWindowDetector;
pub use clock::{Clock, FixedClock, SystemClock};
pub use types::*;
pub use error::PricingError;
pub use config::{PricingConfig, RushWindowConfig};

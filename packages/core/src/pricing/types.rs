//! Core data types for delivery pricing

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The requested delivery time in the caller's local civil time.
///
/// Only the weekday and hour fields of its own offset are consulted.
pub type DeliveryInstant = DateTime<FixedOffset>;

/// The order being priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderContext {
    /// Cart value in currency units.
    pub cart_value: f64,
    /// Delivery distance in metres.
    pub delivery_distance: i64,
    pub num_items: i64,
}

impl OrderContext {
    pub fn new(cart_value: f64, delivery_distance: i64, num_items: i64) -> Self {
        Self {
            cart_value,
            delivery_distance,
            num_items,
        }
    }
}

/// A validated pricing request as produced by an input adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub context: OrderContext,
    pub delivery_time: DeliveryInstant,
}

/// A delivery fee in currency units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fee(f64);

impl Fee {
    pub const ZERO: Fee = Fee(0.0);

    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Clamp the fee to at most `max`.
    pub fn capped(self, max: f64) -> Self {
        Self(self.0.min(max))
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_cents_half_up(self.0))
    }
}

/// Resolve exact half-cent ties away from zero, since `{:.2}` rounds them
/// to even. Only multiples of 1/8 can land exactly on a tie; every other
/// value is already formatted from its exact binary expansion.
fn round_cents_half_up(amount: f64) -> f64 {
    if (amount * 8.0).fract() == 0.0 {
        (amount * 100.0).round() / 100.0
    } else {
        amount
    }
}

/// Which reference frames placed the order inside the rush window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RushStatus {
    /// The current UTC time is inside the window.
    pub absolute: bool,
    /// The delivery time, read in its own local frame, is inside the window.
    pub local: bool,
}

impl RushStatus {
    pub fn applies(&self) -> bool {
        self.absolute || self.local
    }
}

/// Full result of a pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_fee: Fee,
    pub rush: RushStatus,
    pub fee: Fee,
}

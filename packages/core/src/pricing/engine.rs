//! Pricing Orchestrator - combines the base fee with the rush surcharge

use chrono::{DateTime, Utc};

use crate::pricing::{
    types::*,
    config::PricingConfig,
    calculator::FeeCalculator,
    detector::RushWindowDetector,
    clock::Clock,
};

/// Produces the final delivery fee for an order.
///
/// Holds no mutable state; every call is independent.
#[derive(Debug, Clone)]
pub struct PricingOrchestrator {
    calculator: FeeCalculator,
    detector: RushWindowDetector,
    max_delivery_fee: f64,
}

impl PricingOrchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: PricingConfig) -> Self {
        let detector = RushWindowDetector::new(config.rush_window.clone());
        let max_delivery_fee = config.max_delivery_fee;
        let calculator = FeeCalculator::new(config);

        Self {
            calculator,
            detector,
            max_delivery_fee,
        }
    }

    /// Price an order, reading the current time from `clock` exactly once.
    pub fn price(
        &self,
        context: &OrderContext,
        delivery_time: &DeliveryInstant,
        clock: &dyn Clock,
    ) -> Fee {
        self.quote(context, delivery_time, clock).fee
    }

    /// Price an order against an explicit "now".
    pub fn price_at(
        &self,
        context: &OrderContext,
        delivery_time: &DeliveryInstant,
        now: DateTime<Utc>,
    ) -> Fee {
        self.quote_at(context, delivery_time, now).fee
    }

    /// Like [`price`](Self::price) but also reports the base fee and which
    /// rush checks fired.
    pub fn quote(
        &self,
        context: &OrderContext,
        delivery_time: &DeliveryInstant,
        clock: &dyn Clock,
    ) -> PriceQuote {
        self.quote_at(context, delivery_time, clock.now())
    }

    pub fn quote_at(
        &self,
        context: &OrderContext,
        delivery_time: &DeliveryInstant,
        now: DateTime<Utc>,
    ) -> PriceQuote {
        let base_fee = self.calculator.compute_base_fee(context);

        let rush = RushStatus {
            absolute: self.detector.is_rush_window_absolute(now),
            local: self.detector.is_rush_window_local(delivery_time),
        };

        let fee = if rush.applies() {
            tracing::debug!(
                absolute = rush.absolute,
                local = rush.local,
                multiplier = self.detector.multiplier(),
                "Rush window surcharge applied"
            );
            base_fee.scaled(self.detector.multiplier())
        } else {
            base_fee
        }
        .capped(self.max_delivery_fee);

        PriceQuote { base_fee, rush, fee }
    }
}

impl Default for PricingOrchestrator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

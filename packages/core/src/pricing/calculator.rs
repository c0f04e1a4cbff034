//! Base Delivery Fee Calculator

use crate::pricing::{
    types::{Fee, OrderContext},
    config::PricingConfig,
};

/// Calculator for the delivery fee before any rush-window surcharge.
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    config: PricingConfig,
}

impl FeeCalculator {
    /// Create a new fee calculator
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Compute the capped base fee for an order.
    ///
    /// Surcharges are summed, then the free-delivery override and the cap
    /// are applied. Inputs are not validated: negative or zero values just
    /// flow through the arithmetic.
    pub fn compute_base_fee(&self, order: &OrderContext) -> Fee {
        let config = &self.config;
        let mut total = 0.0;

        total += self.small_order_surcharge(order.cart_value);
        total += config.base_delivery_fee;
        total += self.distance_surcharge(order.delivery_distance);
        total += self.item_surcharge(order.num_items);
        total += self.bulk_surcharge(order.num_items);

        if order.cart_value >= config.free_delivery_threshold {
            tracing::debug!(
                cart_value = order.cart_value,
                "Free delivery threshold reached"
            );
            total = 0.0;
        }

        Fee::new(total).capped(config.max_delivery_fee)
    }

    fn small_order_surcharge(&self, cart_value: f64) -> f64 {
        if cart_value < self.config.small_order_threshold {
            self.config.small_order_threshold - cart_value
        } else {
            0.0
        }
    }

    fn distance_surcharge(&self, delivery_distance: i64) -> f64 {
        let extra = delivery_distance.saturating_sub(self.config.base_distance);
        if extra <= 0 {
            return 0.0;
        }

        let interval = self.config.distance_fee_interval;
        let started_intervals = extra / interval + i64::from(extra % interval != 0);
        started_intervals as f64 * self.config.distance_fee
    }

    fn item_surcharge(&self, num_items: i64) -> f64 {
        let threshold = self.config.extra_item_threshold;
        if num_items >= threshold {
            num_items.saturating_sub(threshold).saturating_add(1) as f64
                * self.config.extra_item_fee
        } else {
            0.0
        }
    }

    fn bulk_surcharge(&self, num_items: i64) -> f64 {
        if num_items > self.config.bulk_order_threshold {
            self.config.bulk_order_fee
        } else {
            0.0
        }
    }
}

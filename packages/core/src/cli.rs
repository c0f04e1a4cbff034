use std::path::PathBuf;

use clap::Parser;

use crate::adapter::{OutputFormat, RawOrderInput};

/// Delivery Fee Calculator CLI arguments
///
/// Order values are taken as raw strings and validated by the input
/// adapter, so malformed values produce the same notice as any other
/// invalid input.
#[derive(Debug, Parser)]
#[command(
    name = "delivery-fee-calculator",
    version,
    about = "Calculate the delivery fee for an order"
)]
pub struct Cli {
    /// Cart value in currency units
    #[arg(long, allow_hyphen_values = true)]
    pub cart_value: String,

    /// Delivery distance in metres
    #[arg(long, allow_hyphen_values = true)]
    pub distance: String,

    /// Number of items in the order
    #[arg(long, allow_hyphen_values = true)]
    pub items: String,

    /// Requested delivery time (RFC 3339, or YYYY-MM-DDTHH:MM in local time)
    #[arg(long)]
    pub delivery_time: String,

    /// Override the current time (RFC 3339)
    #[arg(long)]
    pub now: Option<String>,

    /// UTC offset for delivery times without one, e.g. +02:00
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Currency symbol used when displaying the fee
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// JSON file with pricing overrides
    #[arg(long)]
    pub pricing_config: Option<PathBuf>,

    /// Print the full quote as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn raw_input(&self) -> RawOrderInput {
        RawOrderInput {
            cart_value: self.cart_value.clone(),
            delivery_distance: self.distance.clone(),
            num_items: self.items.clone(),
            delivery_time: self.delivery_time.clone(),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

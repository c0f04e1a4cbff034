//! Input adapter between raw user input and the pricing core.
//!
//! An [`InputAdapter`] turns raw strings into a validated
//! [`OrderRequest`] and renders the resulting [`PriceQuote`]. The pricing
//! core assumes its inputs are already valid, so every rejection happens
//! here, before [`run_pricing`] ever calls the orchestrator.

use std::io::Write;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::pricing::{
    Clock, DeliveryInstant, Fee, OrderContext, OrderRequest, PriceQuote, PricingError,
    PricingOrchestrator,
};

/// Civil-time layouts accepted when the delivery time carries no offset.
/// The first pair matches an HTML `datetime-local` field.
const NAIVE_DELIVERY_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Boundary between a user-facing surface and the pricing core.
pub trait InputAdapter {
    /// Collect and validate the order. Any malformed field is
    /// [`PricingError::InvalidInput`].
    fn order_request(&self) -> Result<OrderRequest, PricingError>;

    /// Present a computed quote to the user.
    fn render(&mut self, quote: &PriceQuote) -> Result<(), AppError>;
}

/// The four values exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOrderInput {
    pub cart_value: String,
    pub delivery_distance: String,
    pub num_items: String,
    pub delivery_time: String,
}

impl RawOrderInput {
    /// Validate every field. Delivery times without an explicit offset are
    /// read as civil time at `local_offset`.
    pub fn parse(&self, local_offset: FixedOffset) -> Result<OrderRequest, PricingError> {
        let context = OrderContext::new(
            parse_decimal("cart_value", &self.cart_value)?,
            parse_integer("delivery_distance", &self.delivery_distance)?,
            parse_integer("num_items", &self.num_items)?,
        );
        let delivery_time = parse_delivery_time(&self.delivery_time, local_offset)?;

        Ok(OrderRequest {
            context,
            delivery_time,
        })
    }
}

/// Parse a finite decimal number.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, PricingError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PricingError::invalid_input(field, raw))
}

pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, PricingError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| PricingError::invalid_input(field, raw))
}

/// Parse a delivery time given either as RFC 3339 or as naive civil time.
pub fn parse_delivery_time(
    raw: &str,
    local_offset: FixedOffset,
) -> Result<DeliveryInstant, PricingError> {
    let trimmed = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant);
    }

    NAIVE_DELIVERY_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .and_then(|naive| naive.and_local_timezone(local_offset).single())
        .ok_or_else(|| PricingError::invalid_input("delivery_time", raw))
}

/// Parse an explicit "now" override, which must be RFC 3339.
pub fn parse_now(raw: &str) -> Result<DateTime<Utc>, PricingError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| PricingError::invalid_input("now", raw))
}

/// Format a fee for display, e.g. `€9.00`.
pub fn format_fee(fee: Fee, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, fee)
}

/// How a quote is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The formatted fee on a single line.
    #[default]
    Text,
    /// The full quote as one JSON object.
    Json,
}

#[derive(Serialize)]
struct RenderedQuote<'a> {
    #[serde(flatten)]
    quote: &'a PriceQuote,
    display: String,
}

/// Adapter reading raw values from the command line and writing the
/// rendered fee to `writer`.
pub struct TerminalAdapter<W: Write> {
    input: RawOrderInput,
    local_offset: FixedOffset,
    currency_symbol: String,
    format: OutputFormat,
    writer: W,
}

impl<W: Write> TerminalAdapter<W> {
    pub fn new(
        input: RawOrderInput,
        local_offset: FixedOffset,
        currency_symbol: impl Into<String>,
        format: OutputFormat,
        writer: W,
    ) -> Self {
        Self {
            input,
            local_offset,
            currency_symbol: currency_symbol.into(),
            format,
            writer,
        }
    }

    /// Consume the adapter and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> InputAdapter for TerminalAdapter<W> {
    fn order_request(&self) -> Result<OrderRequest, PricingError> {
        self.input.parse(self.local_offset)
    }

    fn render(&mut self, quote: &PriceQuote) -> Result<(), AppError> {
        let display = format_fee(quote.fee, &self.currency_symbol);

        let line = match self.format {
            OutputFormat::Text => display,
            OutputFormat::Json => serde_json::to_string(&RenderedQuote { quote, display })
                .map_err(|e| AppError::Render(e.to_string()))?,
        };

        writeln!(self.writer, "{}", line).map_err(|e| AppError::Render(e.to_string()))
    }
}

/// Collect input, price it, and render the result.
///
/// Invalid input aborts before the orchestrator runs and nothing is
/// rendered.
pub fn run_pricing(
    adapter: &mut dyn InputAdapter,
    engine: &PricingOrchestrator,
    clock: &dyn Clock,
) -> Result<PriceQuote, AppError> {
    let request = adapter.order_request()?;

    let quote = engine.quote(&request.context, &request.delivery_time, clock);
    tracing::info!(
        cart_value = request.context.cart_value,
        delivery_distance = request.context.delivery_distance,
        num_items = request.context.num_items,
        delivery_time = %request.delivery_time,
        base_fee = quote.base_fee.amount(),
        rush = quote.rush.applies(),
        fee = quote.fee.amount(),
        "Delivery fee computed"
    );

    adapter.render(&quote)?;
    Ok(quote)
}

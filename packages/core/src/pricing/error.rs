//! Error types for delivery pricing

use thiserror::Error;

/// Errors raised while collecting or configuring a pricing request.
///
/// The pricing core itself never fails; these come from the input adapter
/// and from configuration loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Please enter valid values for all fields. Invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Pricing configuration error: {message}")]
    Config { message: String },
}

impl PricingError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

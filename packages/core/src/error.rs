use std::fmt;
use std::error::Error;

use crate::pricing::PricingError;

/// Unified application error.
///
/// Everything the binary can fail on funnels into one of these so `main`
/// can log it and exit.
#[derive(Debug)]
pub enum AppError {
    Config(String),
    Input(PricingError),
    Render(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Input(err) => write!(f, "{}", err),
            AppError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::Config { message } => AppError::Config(message),
            other => AppError::Input(other),
        }
    }
}

// Library root: exposes the pricing core and its adapters for the binary
// and for integration tests in `tests/`.

pub mod adapter;
pub mod error;
pub mod pricing;

// These modules are only needed by the binary.
pub mod cli;
pub mod config;
pub mod logging;

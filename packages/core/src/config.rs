use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{FixedOffset, Local, Offset, Utc};

use crate::cli::Cli;
use crate::pricing::PricingConfig;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

#[derive(Debug, Clone)]
pub struct Config {
    pub pricing: PricingConfig,
    /// Offset applied to delivery times given without one.
    pub local_offset: FixedOffset,
    pub currency_symbol: String,
}

impl Config {
    /// Read configuration from the process environment, with command-line
    /// flags taking precedence. Every variable is optional.
    pub fn from_env(cli: &Cli) -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok(), cli)
    }

    /// Build configuration from an arbitrary key lookup. A value given on
    /// the command line means the matching variable is never consulted.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        cli: &Cli,
    ) -> Result<Self, String> {
        let pricing_path = cli
            .pricing_config
            .clone()
            .or_else(|| lookup("PRICING_CONFIG_FILE").map(PathBuf::from));
        let pricing = match pricing_path {
            Some(path) => PricingConfig::from_file(&path).map_err(|e| e.to_string())?,
            None => PricingConfig::default(),
        };

        let local_offset = match &cli.utc_offset {
            Some(raw) => {
                parse_utc_offset(raw).map_err(|_| format!("Invalid --utc-offset: {}", raw))?
            }
            None => match lookup("LOCAL_UTC_OFFSET") {
                Some(raw) => parse_utc_offset(&raw)
                    .map_err(|_| format!("Invalid LOCAL_UTC_OFFSET: {}", raw))?,
                None => *Local::now().offset(),
            },
        };

        let currency_symbol = cli
            .currency_symbol
            .clone()
            .or_else(|| lookup("CURRENCY_SYMBOL"))
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Ok(Self {
            pricing,
            local_offset,
            currency_symbol,
        })
    }
}

/// Parse an offset such as `+02:00`, `-0530` or `Z`.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, chrono::ParseError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    FixedOffset::from_str(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec![
            "delivery-fee-calculator",
            "--cart-value",
            "5",
            "--distance",
            "1500",
            "--items",
            "6",
            "--delivery-time",
            "2024-01-19T16:00",
        ];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[]), &cli(&[])).unwrap();
        assert_eq!(config.pricing, PricingConfig::default());
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn reads_offset_and_currency() {
        let config = Config::from_lookup(
            lookup_from(&[("LOCAL_UTC_OFFSET", "+02:00"), ("CURRENCY_SYMBOL", "$")]),
            &cli(&[]),
        )
        .unwrap();

        assert_eq!(config.local_offset.local_minus_utc(), 2 * 3600);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn invalid_offset_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("LOCAL_UTC_OFFSET", "noon")]), &cli(&[]))
            .unwrap_err();
        assert!(err.contains("LOCAL_UTC_OFFSET"));
    }

    #[test]
    fn missing_pricing_file_is_reported() {
        let err = Config::from_lookup(
            lookup_from(&[("PRICING_CONFIG_FILE", "/definitely/not/here.json")]),
            &cli(&[]),
        )
        .unwrap_err();
        assert!(err.contains("cannot read"));
    }

    #[test]
    fn cli_overrides_environment() {
        let config = Config::from_lookup(
            lookup_from(&[("LOCAL_UTC_OFFSET", "+02:00"), ("CURRENCY_SYMBOL", "$")]),
            &cli(&["--utc-offset", "Z", "--currency-symbol", "£"]),
        )
        .unwrap();

        assert_eq!(config.local_offset.local_minus_utc(), 0);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn cli_pricing_file_replaces_unreadable_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_delivery_fee": 20.0 }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = Config::from_lookup(
            lookup_from(&[
                ("PRICING_CONFIG_FILE", "/definitely/not/here.json"),
                ("LOCAL_UTC_OFFSET", "noon"),
            ]),
            &cli(&["--pricing-config", path, "--utc-offset", "+01:00"]),
        )
        .unwrap();

        assert_eq!(config.pricing.max_delivery_fee, 20.0);
        assert_eq!(config.local_offset.local_minus_utc(), 3600);
    }

    #[test]
    fn parses_compact_offsets() {
        assert_eq!(parse_utc_offset("-0530").unwrap().local_minus_utc(), -(5 * 3600 + 30 * 60));
        assert!(parse_utc_offset("25:00").is_err());
    }
}

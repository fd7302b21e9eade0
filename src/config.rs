//! Runtime configuration, read from environment variables with defaults.
use std::time::Duration;

use tracing::warn;

/// Default size of the channel feeding the batch evaluator.
const DEFAULT_CHANNEL_SIZE: usize = 100;

/// Default delay before a waitlist submission is confirmed.
const DEFAULT_WAITLIST_DELAY_MS: u64 = 1500;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bound of the batch input channel.
    pub channel_size: usize,
    /// How long a waitlist submission takes to confirm.
    pub waitlist_delay: Duration,
    /// Symbol printed in front of money amounts.
    pub currency_symbol: String,
}

impl Config {
    /// Reads `VAULTPAY_CHANNEL_SIZE`, `VAULTPAY_WAITLIST_DELAY_MS` and `VAULTPAY_CURRENCY_SYMBOL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparsable values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let channel_size = parse_or("VAULTPAY_CHANNEL_SIZE", &lookup, DEFAULT_CHANNEL_SIZE);
        Config {
            // A zero-capacity mpsc channel panics on creation.
            channel_size: channel_size.max(1),
            waitlist_delay: Duration::from_millis(parse_or(
                "VAULTPAY_WAITLIST_DELAY_MS",
                &lookup,
                DEFAULT_WAITLIST_DELAY_MS,
            )),
            currency_symbol: lookup("VAULTPAY_CURRENCY_SYMBOL").unwrap_or_else(|| "$".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw:?}");
            default
        }),
        None => default,
    }
}

//! Transfer inputs and their validation at the form/CSV boundary.
use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use crate::calculator::types::{
    AMOUNT_UI_RANGE, DEFAULT_AMOUNT, DEFAULT_FREQUENCY, FREQUENCY_UI_RANGE, MONTHS_PER_YEAR, Money,
};

/// Countries a transfer can be sent to.
///
/// Pricing is currently flat-rate, so the destination never changes a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    #[default]
    Nigeria,
    Ghana,
    Kenya,
    SouthAfrica,
    Senegal,
}

impl Destination {
    /// All destinations, in the order the calculator lists them.
    pub const ALL: [Destination; 5] = [
        Destination::Nigeria,
        Destination::Ghana,
        Destination::Kenya,
        Destination::SouthAfrica,
        Destination::Senegal,
    ];

    /// Human readable name, as shown in the destination picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Destination::Nigeria => "Nigeria",
            Destination::Ghana => "Ghana",
            Destination::Kenya => "Kenya",
            Destination::SouthAfrica => "South Africa",
            Destination::Senegal => "Senegal",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Destination {
    type Err = InputError;

    /// Accepts display names ("South Africa") and compact names ("SouthAfrica"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Destination::ALL
            .into_iter()
            .find(|d| {
                d.display_name()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .eq(key.chars())
            })
            .ok_or_else(|| InputError::UnknownDestination(s.trim().to_string()))
    }
}

/// A validated calculator input.
///
/// Constructing one is the only place input is checked; every `TransferInput`
/// is inside the engine's domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferInput {
    /// Amount sent per transfer, in currency units.
    amount: Money,
    /// How many transfers are sent each month.
    frequency_per_month: u32,
    /// Where the money goes.
    destination: Destination,
}

impl TransferInput {
    /// Creates a new input. Rejects negative or non-finite amounts and a zero frequency.
    pub fn new(
        amount: Money,
        frequency_per_month: u32,
        destination: Destination,
    ) -> Result<Self, InputError> {
        if !amount.is_finite() {
            return Err(InputError::NonFiniteAmount);
        }
        if amount < 0.0 {
            return Err(InputError::NegativeAmount(amount));
        }
        if frequency_per_month == 0 {
            return Err(InputError::ZeroFrequency);
        }
        Ok(TransferInput {
            amount,
            frequency_per_month,
            destination,
        })
    }

    /// Builds an input from raw, user-typed text.
    pub fn parse(
        raw_amount: &str,
        raw_frequency: &str,
        raw_destination: &str,
    ) -> Result<Self, InputError> {
        let amount = raw_amount
            .trim()
            .parse::<Money>()
            .map_err(|_| InputError::UnparsableAmount(raw_amount.trim().to_string()))?;
        let frequency = raw_frequency
            .trim()
            .parse::<u32>()
            .map_err(|_| InputError::UnparsableFrequency(raw_frequency.trim().to_string()))?;
        let destination = raw_destination.parse()?;
        TransferInput::new(amount, frequency, destination)
    }

    /// Gets the amount per transfer.
    pub fn get_amount(&self) -> Money {
        self.amount
    }

    /// Gets the number of transfers per month.
    pub fn get_frequency_per_month(&self) -> u32 {
        self.frequency_per_month
    }

    /// Gets the destination country.
    pub fn get_destination(&self) -> Destination {
        self.destination
    }

    /// Number of transfers in a year at this frequency.
    pub fn annual_transfer_count(&self) -> u64 {
        u64::from(self.frequency_per_month) * u64::from(MONTHS_PER_YEAR)
    }

    /// Whether the input lies within the ranges the calculator form offers.
    pub fn within_ui_bounds(&self) -> bool {
        AMOUNT_UI_RANGE.contains(&self.amount)
            && FREQUENCY_UI_RANGE.contains(&self.frequency_per_month)
    }
}

impl Default for TransferInput {
    fn default() -> Self {
        TransferInput {
            amount: DEFAULT_AMOUNT,
            frequency_per_month: DEFAULT_FREQUENCY,
            destination: Destination::default(),
        }
    }
}

/// One row of a batch input file, kept as raw text until validated.
#[derive(Deserialize, Debug, Clone)]
pub struct TransferRecord {
    amount: String,
    #[serde(rename = "frequency")]
    frequency_per_month: String,
    destination: String,
}

impl TransferRecord {
    #[cfg(test)]
    pub fn new(amount: &str, frequency_per_month: &str, destination: &str) -> Self {
        TransferRecord {
            amount: amount.to_string(),
            frequency_per_month: frequency_per_month.to_string(),
            destination: destination.to_string(),
        }
    }
}

impl TryFrom<TransferRecord> for TransferInput {
    type Error = InputError;

    fn try_from(record: TransferRecord) -> Result<Self, Self::Error> {
        TransferInput::parse(
            &record.amount,
            &record.frequency_per_month,
            &record.destination,
        )
    }
}

/// Reasons a raw input cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Money),
    #[error("Amount must be a finite number")]
    NonFiniteAmount,
    #[error("At least one transfer per month is required")]
    ZeroFrequency,
    #[error("Amount is not a number: {0:?}")]
    UnparsableAmount(String),
    #[error("Transfers per month is not a whole number: {0:?}")]
    UnparsableFrequency(String),
    #[error("Unknown destination: {0:?}")]
    UnknownDestination(String),
}

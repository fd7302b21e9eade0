//! Types and constants used throughout the cost calculator.
use std::ops::RangeInclusive;

/// Money type, an unrounded amount in currency units.
/// Rounding happens only at presentation time so repeated formatting never compounds error.
pub type Money = f64;

/// Number of months used to project per-transfer figures onto a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Amount range offered by the calculator form. Not enforced by the engine.
pub const AMOUNT_UI_RANGE: RangeInclusive<Money> = 50.0..=10_000.0;

/// Transfers-per-month range offered by the calculator form. Not enforced by the engine.
pub const FREQUENCY_UI_RANGE: RangeInclusive<u32> = 1..=10;

/// Amount shown when the calculator first renders.
pub const DEFAULT_AMOUNT: Money = 500.0;

/// Frequency shown when the calculator first renders.
pub const DEFAULT_FREQUENCY: u32 = 2;

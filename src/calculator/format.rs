//! Display formatting for calculator figures.
//!
//! Engine values stay unrounded; rounding happens here, once, when a figure is shown.
use crate::calculator::{Money, SavingsSummary};

/// Formats money amounts with a currency symbol.
#[derive(Debug, Clone)]
pub struct MoneyFormat {
    symbol: String,
}

impl MoneyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        MoneyFormat {
            symbol: symbol.into(),
        }
    }

    /// Per-transfer figure, rounded to cents: `$1,234.50`.
    pub fn per_transfer(&self, value: Money) -> String {
        self.render(value, 2)
    }

    /// Yearly figure, rounded to whole units: `$96,840`.
    pub fn annual(&self, value: Money) -> String {
        self.render(value, 0)
    }

    fn render(&self, value: Money, decimals: usize) -> String {
        let digits = format!("{:.*}", decimals, value.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };
        let negative = value < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0');

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 4);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        MoneyFormat::new("$")
    }
}

/// Inserts a comma between every three digits: `8248` becomes `8,248`.
pub fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Caption shown under the savings figure.
pub fn savings_headline(savings: &SavingsSummary) -> String {
    format!(
        "Based on {} transfers per year",
        savings.annual_transfer_count
    )
}

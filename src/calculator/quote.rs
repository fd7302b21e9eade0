//! Pricing policies and the quotes they produce.
use crate::calculator::Money;

/// How a provider prices a single transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPolicy {
    /// Share of the amount charged as a transfer fee.
    pub percent_fee_rate: f64,
    /// Flat transfer fee charged on every transfer.
    pub flat_transfer_fee: Money,
    /// Share of the amount lost to a worse-than-market exchange rate.
    pub exchange_markup_rate: f64,
    /// Flat charge not disclosed upfront.
    pub hidden_fees: Money,
}

impl PricingPolicy {
    /// The traditional money-transfer provider used as the comparison baseline.
    pub const TRADITIONAL: PricingPolicy = PricingPolicy {
        percent_fee_rate: 0.05,
        flat_transfer_fee: 0.0,
        exchange_markup_rate: 0.036,
        hidden_fees: 2.0,
    };

    /// VaultPay's own pricing.
    pub const VAULTPAY: PricingPolicy = PricingPolicy {
        percent_fee_rate: 0.0,
        flat_transfer_fee: 5.0,
        exchange_markup_rate: 0.005,
        hidden_fees: 0.0,
    };

    /// Quotes a transfer of `amount`, projected over `annual_transfer_count` transfers.
    pub fn quote(&self, amount: Money, annual_transfer_count: u64) -> ProviderQuote {
        let transfer_fee = self.flat_transfer_fee + amount * self.percent_fee_rate;
        let exchange_markup = amount * self.exchange_markup_rate;
        let total_per_transfer = transfer_fee + exchange_markup + self.hidden_fees;
        ProviderQuote {
            transfer_fee,
            exchange_markup,
            hidden_fees: self.hidden_fees,
            total_per_transfer,
            total_per_year: total_per_transfer * annual_transfer_count as Money,
        }
    }
}

/// Cost breakdown of one provider for one transfer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderQuote {
    pub transfer_fee: Money,
    pub exchange_markup: Money,
    pub hidden_fees: Money,
    pub total_per_transfer: Money,
    pub total_per_year: Money,
}

/// Projected yearly savings of the product over the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsSummary {
    /// Negative when the product costs more than the baseline.
    pub annual_savings: Money,
    pub annual_transfer_count: u64,
}

impl SavingsSummary {
    pub fn between(
        baseline: &ProviderQuote,
        product: &ProviderQuote,
        annual_transfer_count: u64,
    ) -> Self {
        SavingsSummary {
            annual_savings: (baseline.total_per_transfer - product.total_per_transfer)
                * annual_transfer_count as Money,
            annual_transfer_count,
        }
    }
}

//! The fee comparison engine: a pure mapping from a transfer input to both quotes and the savings.
use crate::calculator::{PricingPolicy, ProviderQuote, SavingsSummary, TransferInput};

/// Result of comparing the baseline provider with VaultPay for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub baseline: ProviderQuote,
    pub product: ProviderQuote,
    pub savings: SavingsSummary,
}

impl Comparison {
    /// False when a figure overflowed, which only happens for amounts near `f64::MAX`.
    pub fn is_finite(&self) -> bool {
        [self.baseline, self.product].iter().all(|quote| {
            quote.total_per_transfer.is_finite() && quote.total_per_year.is_finite()
        }) && self.savings.annual_savings.is_finite()
    }
}

/// Compares the traditional provider with VaultPay pricing.
pub fn evaluate(input: &TransferInput) -> Comparison {
    evaluate_with(&PricingPolicy::TRADITIONAL, &PricingPolicy::VAULTPAY, input)
}

/// Compares two arbitrary pricing policies. The destination is ignored: pricing is flat-rate.
pub fn evaluate_with(
    baseline_policy: &PricingPolicy,
    product_policy: &PricingPolicy,
    input: &TransferInput,
) -> Comparison {
    let annual_transfer_count = input.annual_transfer_count();
    let baseline = baseline_policy.quote(input.get_amount(), annual_transfer_count);
    let product = product_policy.quote(input.get_amount(), annual_transfer_count);
    Comparison {
        savings: SavingsSummary::between(&baseline, &product, annual_transfer_count),
        baseline,
        product,
    }
}

#[cfg(test)]
mod tests {
    use crate::calculator::{
        Destination, PricingPolicy, TransferInput, evaluate, evaluate_with,
    };

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn input(amount: f64, frequency: u32) -> TransferInput {
        TransferInput::new(amount, frequency, Destination::Nigeria).unwrap()
    }

    #[test]
    fn test_default_form_scenario() {
        let result = evaluate(&input(500.0, 2));
        assert_close(result.baseline.transfer_fee, 25.0);
        assert_close(result.baseline.exchange_markup, 18.0);
        assert_close(result.baseline.hidden_fees, 2.0);
        assert_close(result.baseline.total_per_transfer, 45.0);
        assert_close(result.product.transfer_fee, 5.0);
        assert_close(result.product.exchange_markup, 2.5);
        assert_close(result.product.hidden_fees, 0.0);
        assert_close(result.product.total_per_transfer, 7.5);
        assert_eq!(result.savings.annual_transfer_count, 24);
        assert_close(result.savings.annual_savings, 900.0);
    }

    #[test]
    fn test_lowest_form_amount() {
        let result = evaluate(&input(50.0, 1));
        assert_close(result.baseline.total_per_transfer, 6.3);
        assert_close(result.product.total_per_transfer, 5.25);
        assert_eq!(result.savings.annual_transfer_count, 12);
        assert_close(result.savings.annual_savings, 12.6);
    }

    #[test]
    fn test_small_amount_costs_more() {
        // Below 3 / 0.081 the flat VaultPay fee outweighs the traditional percentages.
        let result = evaluate(&input(20.0, 1));
        assert_close(result.baseline.total_per_transfer, 3.72);
        assert_close(result.product.total_per_transfer, 5.1);
        assert!(result.product.total_per_transfer > result.baseline.total_per_transfer);
        assert!(result.savings.annual_savings < 0.0);
        assert_close(result.savings.annual_savings, -16.56);

        let result = evaluate(&input(30.0, 3));
        assert!(result.savings.annual_savings < 0.0);
        assert_close(result.savings.annual_savings, (4.58 - 5.15) * 36.0);
    }

    #[test]
    fn test_overflowing_amount_is_reported() {
        assert!(evaluate(&input(500.0, 2)).is_finite());
        assert!(evaluate(&input(0.0, 1)).is_finite());
        assert!(!evaluate(&input(f64::MAX, 1)).is_finite());
        assert!(!evaluate(&input(f64::MAX / 100.0, u32::MAX)).is_finite());
    }

    #[test]
    fn test_largest_form_values() {
        let result = evaluate(&input(10_000.0, 10));
        assert_close(result.baseline.total_per_transfer, 862.0);
        assert_close(result.product.total_per_transfer, 55.0);
        assert_eq!(result.savings.annual_transfer_count, 120);
        assert_close(result.savings.annual_savings, 96_840.0);
    }

    #[test]
    fn test_formulas_hold_across_amounts() {
        for amount in [0.0, 0.01, 1.0, 73.25, 999.99, 2500.0, 1e7] {
            let result = evaluate(&input(amount, 3));
            assert_eq!(
                result.baseline.total_per_transfer,
                amount * 0.05 + amount * 0.036 + 2.0
            );
            assert_eq!(result.product.total_per_transfer, 5.0 + amount * 0.005);
        }
    }

    #[test]
    fn test_yearly_totals_are_exact() {
        for frequency in [1, 2, 7, 10, 1000] {
            let result = evaluate(&input(321.0, frequency));
            let count = f64::from(frequency * 12);
            assert_eq!(
                result.baseline.total_per_year,
                result.baseline.total_per_transfer * count
            );
            assert_eq!(
                result.product.total_per_year,
                result.product.total_per_transfer * count
            );
            assert_eq!(
                result.savings.annual_savings,
                (result.baseline.total_per_transfer - result.product.total_per_transfer) * count
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let x = input(1234.56, 4);
        let first = evaluate(&x);
        let second = evaluate(&x);
        assert_eq!(first, second);
        assert_eq!(
            first.savings.annual_savings.to_bits(),
            second.savings.annual_savings.to_bits()
        );
    }

    #[test]
    fn test_totals_increase_with_amount() {
        let mut previous = evaluate(&input(50.0, 1));
        for step in 1..200 {
            let current = evaluate(&input(50.0 + f64::from(step) * 50.0, 1));
            assert!(current.baseline.total_per_transfer > previous.baseline.total_per_transfer);
            assert!(current.product.total_per_transfer > previous.product.total_per_transfer);
            previous = current;
        }
    }

    #[test]
    fn test_destination_does_not_change_numbers() {
        let reference = evaluate(&input(750.0, 3));
        for destination in Destination::ALL {
            let result = evaluate(&TransferInput::new(750.0, 3, destination).unwrap());
            assert_eq!(result, reference);
        }
    }

    #[test]
    fn test_pricier_product_yields_negative_savings() {
        let pricey = PricingPolicy {
            percent_fee_rate: 0.2,
            ..PricingPolicy::TRADITIONAL
        };
        let result = evaluate_with(&PricingPolicy::TRADITIONAL, &pricey, &input(500.0, 2));
        assert!(result.product.total_per_transfer > result.baseline.total_per_transfer);
        assert_close(result.savings.annual_savings, -75.0 * 24.0);
    }
}

//! Evaluates a stream of transfer records received over a channel.
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::calculator::{Comparison, InputError, Money, TransferInput, TransferRecord, evaluate};

/// One output row: an input and the figures computed for it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    amount: Money,
    frequency: u32,
    destination: String,
    traditional_per_transfer: Money,
    traditional_per_year: Money,
    vaultpay_per_transfer: Money,
    vaultpay_per_year: Money,
    annual_transfers: u64,
    annual_savings: Money,
}

impl ComparisonRow {
    pub fn new(input: &TransferInput, comparison: &Comparison) -> Self {
        ComparisonRow {
            amount: input.get_amount(),
            frequency: input.get_frequency_per_month(),
            destination: input.get_destination().to_string(),
            traditional_per_transfer: comparison.baseline.total_per_transfer,
            traditional_per_year: comparison.baseline.total_per_year,
            vaultpay_per_transfer: comparison.product.total_per_transfer,
            vaultpay_per_year: comparison.product.total_per_year,
            annual_transfers: comparison.savings.annual_transfer_count,
            annual_savings: comparison.savings.annual_savings,
        }
    }
}

/// Collects comparisons for every valid record received, in arrival order.
pub struct BatchEvaluator {
    /// Rows computed so far.
    rows: Vec<ComparisonRow>,
    /// Number of records that failed validation.
    rejected: usize,
    /// A channel receiver for incoming records.
    receiver: mpsc::Receiver<TransferRecord>,
}

impl BatchEvaluator {
    /// Creates a new evaluator with no rows.
    pub fn new(receiver: mpsc::Receiver<TransferRecord>) -> Self {
        BatchEvaluator {
            rows: Vec::new(),
            rejected: 0,
            receiver,
        }
    }

    /// Rows computed so far.
    pub fn get_rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Number of records rejected so far.
    pub fn get_rejected(&self) -> usize {
        self.rejected
    }

    /// Validates and evaluates a single record.
    fn process_record(&mut self, record: TransferRecord) -> Result<(), InputError> {
        let input = TransferInput::try_from(record)?;
        if !input.within_ui_bounds() {
            debug!(
                amount = input.get_amount(),
                frequency = input.get_frequency_per_month(),
                "Input outside calculator form bounds"
            );
        }
        let comparison = evaluate(&input);
        self.rows.push(ComparisonRow::new(&input, &comparison));
        Ok(())
    }

    /// Runs until every sender is dropped, processing records as they arrive.
    pub async fn run(&mut self) {
        while let Some(record) = self.receiver.recv().await {
            if let Err(e) = self.process_record(record) {
                self.rejected += 1;
                warn!("Skipping record: {e}");
            }
        }
    }
}

use crate::core::scoring::calculate_points;
use crate::core::{Receipt, ReceiptStore};
use crate::utils::error::Result;
use std::sync::Arc;

/// Scores receipts and records the result in the injected store.
#[derive(Clone)]
pub struct ReceiptProcessor {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptProcessor {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    pub fn process(&self, receipt: Receipt) -> Result<String> {
        let result = calculate_points(&receipt);
        let retailer = receipt.retailer.clone();
        let item_count = receipt.items.len();

        let id = self.store.put(result.points, receipt)?;

        tracing::info!(
            "Processed receipt {} from '{}' ({} items): {} points",
            id,
            retailer,
            item_count,
            result.points
        );
        for contribution in &result.breakdown {
            tracing::debug!(
                "  {} -> +{}",
                contribution.rule.label(),
                contribution.points
            );
        }

        Ok(id)
    }

    pub fn points(&self, id: &str) -> Result<u64> {
        let record = self.store.get(id)?;
        tracing::debug!("Lookup {}: {} points", id, record.points);
        Ok(record.points)
    }
}

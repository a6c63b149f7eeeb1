use crate::domain::model::{Receipt, ScoreRecord};
use crate::utils::error::Result;

/// Identifier-keyed store for processed receipts.
///
/// Implementations must make a record visible to every caller as soon as
/// `put` returns, and must never hand out the same identifier twice.
pub trait ReceiptStore: Send + Sync {
    /// Store `points` (and the receipt they came from) under a fresh identifier.
    fn put(&self, points: u64, receipt: Receipt) -> Result<String>;

    /// `ReceiptError::NotFound` for identifiers this store never issued.
    fn get(&self, id: &str) -> Result<ScoreRecord>;
}

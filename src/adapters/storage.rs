use crate::core::{Receipt, ReceiptStore, ScoreRecord};
use crate::utils::error::{ReceiptError, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

type Records = Arc<RwLock<HashMap<String, ScoreRecord>>>;

/// Process-lifetime store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, ScoreRecord>>> {
        self.records.read().map_err(|e| ReceiptError::StoreError {
            message: format!("record map lock poisoned: {}", e),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, ScoreRecord>>> {
        self.records.write().map_err(|e| ReceiptError::StoreError {
            message: format!("record map lock poisoned: {}", e),
        })
    }
}

impl ReceiptStore for MemoryStore {
    fn put(&self, points: u64, receipt: Receipt) -> Result<String> {
        loop {
            // Generated before taking the lock; only the insert is guarded.
            let id = Uuid::new_v4().to_string();

            let mut records = self.write()?;
            match records.entry(id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(ScoreRecord {
                        id: id.clone(),
                        points,
                        receipt,
                    });
                    return Ok(id);
                }
                Entry::Occupied(_) => {
                    tracing::warn!("Generated id {} already in use, retrying", id);
                }
            }
        }
    }

    fn get(&self, id: &str) -> Result<ScoreRecord> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptError::NotFound { id: id.to_string() })
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{create_router, AppState};
pub use adapters::storage::MemoryStore;
pub use config::ServerConfig;
pub use crate::core::{processor::ReceiptProcessor, scoring::score};
pub use domain::model::{Item, Receipt, ScoreRecord};
pub use domain::ports::ReceiptStore;
pub use utils::error::{ReceiptError, Result};

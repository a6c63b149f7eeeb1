// Adapters layer: concrete implementations for the outside world (storage, http).

pub mod http;
pub mod storage;

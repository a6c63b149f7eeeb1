// Domain layer: receipt models and the store port. No HTTP or locking concerns here.

pub mod model;
pub mod ports;

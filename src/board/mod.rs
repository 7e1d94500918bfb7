//! LifeBoard engine internals and public API.

mod config;
mod engine;
mod error;
mod rules;
mod topology;

pub use config::{BoardConfig, BorderPolicy, DEFAULT_SEED};
pub use engine::{LifeBoard, Snapshot};
pub use error::BoardError;
pub use topology::Topology;

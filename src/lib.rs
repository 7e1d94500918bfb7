//! Square-grid Conway's Game of Life engine (B3/S23) with bounded and
//! toroidal edges.

pub mod board;
pub mod cli;
pub mod history;
pub mod session;

pub use board::{BoardConfig, BoardError, BorderPolicy, LifeBoard, Snapshot, Topology};
pub use history::History;
pub use session::{Key, Session, SessionConfig};

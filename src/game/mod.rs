//! Core game logic module for Snake
//!
//! Everything here is a plain state machine over [`Board`], [`Snake`] and
//! [`Food`], with no I/O or rendering. A harness calls [`GameEngine::tick`]
//! at a fixed rate and reads the state back to draw it.

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use board::Board;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use error::ConfigError;
pub use food::Food;
pub use state::{Cell, Snake};

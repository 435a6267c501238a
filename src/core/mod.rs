//! Core module - pure game logic with no I/O dependencies
//!
//! This module contains all the game rules and state management: tile
//! geometry and occlusion, level dealing, the match/slot state machine,
//! boosters, and the resume snapshot. It has zero dependencies on UI,
//! networking, or the filesystem.

pub mod boosters;
pub mod game_state;
pub mod generator;
pub mod geometry;
pub mod rng;
pub mod snapshot;
pub mod tile;

// Re-export commonly used types
pub use boosters::{BoosterState, Boosters};
pub use game_state::{GameState, HistoryEntry};
pub use generator::generate_level;
pub use geometry::{compute_locked, overlaps, recompute_all_locks};
pub use rng::SimpleRng;
pub use snapshot::SessionSnapshot;
pub use tile::Tile;

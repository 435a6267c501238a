//! Tile-matching puzzle engine with a terminal front end.
//!
//! Players pick tiles off a stacked board into a seven-slot bar; three of a
//! kind vanish, overflowing the bar loses, clearing everything wins. The
//! interesting machinery - occlusion, level dealing, slot insertion, match
//! resolution, undo - lives in [`core`], which is pure, deterministic, and
//! free of I/O:
//!
//! - **Deterministic**: the same seed deals identical boards (for tests
//!   and session resume)
//! - **Testable**: every rule has unit coverage; no globals, one engine
//!   instance per session
//! - **Portable**: any front end can drive it; the bundled terminal UI is
//!   one consumer among possible many
//!
//! # Module Structure
//!
//! - [`types`]: shared enums and constants (tile kinds, phases, capacities)
//! - [`core`]: geometry/occlusion, level generator, match/slot state
//!   machine, boosters, resume snapshot
//! - [`engine`]: typed-error wrappers for drivers that want diagnostics
//! - [`adapter`]: versioned JSON session persistence
//! - [`term`]: framebuffer renderer and the pure state-to-screen view
//! - [`input`]: key-to-intent mapping for the terminal front end
//!
//! # Game Rules
//!
//! - **Occlusion**: a tile is pickable only if no higher tile overlaps its
//!   footprint; locks are recomputed from scratch after every mutation
//! - **Slot bar**: capacity 7, same-kind tiles kept adjacent by insertion
//! - **Match**: a third same-kind tile removes the triple immediately
//! - **Loss**: the bar fills with no match pending
//! - **Win**: board, bar, and buffer are all empty
//! - **Boosters**: move-out, undo, and shuffle; one shot each per game,
//!   gated by an external activation hook
//!
//! # Example
//!
//! ```
//! use tui_triples::core::GameState;
//! use tui_triples::types::GamePhase;
//!
//! // Deal the tutorial level.
//! let mut game = GameState::new(12345);
//! game.init_level(1);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! // Every tutorial tile starts unlocked; pick one.
//! let id = game.clickable_ids()[0];
//! assert!(game.click_tile(id));
//! assert_eq!(game.slots().len(), 1);
//! ```

pub mod adapter;
pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;

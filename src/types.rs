//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the crate.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, persistence).
//!
//! # Board Lattice
//!
//! Tiles live on a half-tile lattice so that stacked tiles can partially
//! overlap. Positions are stored in **half-tile units**:
//!
//! - A tile footprint spans [`TILE_SPAN`] (= 2) half-units per axis.
//! - Whole-tile anchors are even coordinates, half-tile anchors are odd.
//! - The visible board is 8x10 whole tiles, so anchors range over
//!   `0..=LATTICE_MAX_X` and `0..=LATTICE_MAX_Y`.
//!
//! Integer half-units keep overlap tests exact; there is no floating point
//! anywhere in the engine.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `KIND_COUNT` | 14 | Distinct tile flavors |
//! | `SLOT_CAPACITY` | 7 | Slot row size; overflow without a match loses |
//! | `MATCH_SIZE` | 3 | Same-kind tiles needed for a match |
//! | `MOVE_OUT_COUNT` | 3 | Slot tiles moved to the buffer by the booster |
//! | `MAX_STACK` | 30 | Exclusive upper bound for generated z order |
//!
//! # Examples
//!
//! ```
//! use tui_triples::types::{TileKind, GamePhase, KIND_COUNT, ALL_KINDS};
//!
//! assert_eq!(ALL_KINDS.len(), KIND_COUNT);
//! assert_eq!(TileKind::from_str("wool"), Some(TileKind::Wool));
//! assert_eq!(TileKind::Wool.as_str(), "wool");
//! assert!(!GamePhase::Playing.is_terminal());
//! assert!(GamePhase::Lost.is_terminal());
//! ```

/// Number of distinct tile kinds in the full enumeration.
pub const KIND_COUNT: usize = 14;

/// Slot row capacity; reaching it with no pending match loses the game.
pub const SLOT_CAPACITY: usize = 7;

/// Number of same-kind tiles that form a match.
pub const MATCH_SIZE: usize = 3;

/// Number of slot tiles moved into the buffer by the move-out booster.
pub const MOVE_OUT_COUNT: usize = 3;

/// Tile footprint side length in half-tile units.
pub const TILE_SPAN: i8 = 2;

/// Largest valid x anchor in half-tile units (8 whole tiles wide).
pub const LATTICE_MAX_X: i8 = 14;

/// Largest valid y anchor in half-tile units (10 whole tiles tall).
pub const LATTICE_MAX_Y: i8 = 18;

/// Exclusive upper bound for generated stacking order.
pub const MAX_STACK: u8 = 30;

/// Number of distinct kinds on a tutorial (level 1) board.
pub const TUTORIAL_KINDS: usize = 3;

/// Copies of each kind on a tutorial board.
pub const TUTORIAL_COPIES: usize = 3;

/// Fixed, non-overlapping anchors for the 9 tutorial tiles (half-units).
///
/// Anchors are 4 half-units (2 whole tiles) apart on both axes, so no
/// footprint touches another and the board starts fully unlocked.
pub const LEVEL_ONE_ANCHORS: [(i8, i8); 9] = [
    (2, 4),
    (6, 4),
    (10, 4),
    (2, 8),
    (6, 8),
    (10, 8),
    (2, 12),
    (6, 12),
    (10, 12),
];

/// Per-kind tile counts rolled for "hell" levels (level 2 and up).
///
/// Both keep the per-kind total divisible by [`MATCH_SIZE`], which is what
/// lets a board clear fully.
pub const HELL_COUNT_LOW: usize = 6;
pub const HELL_COUNT_HIGH: usize = 9;

/// Unique, immutable identifier of a tile within one dealt level.
pub type TileId = u32;

/// The fourteen tile flavors.
///
/// The theme is cosmetic; the engine only ever compares kinds for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Carrot,
    Corn,
    Wheat,
    Grass,
    Log,
    Wool,
    Milk,
    Bell,
    Berry,
    Mushroom,
    Pumpkin,
    Clover,
    Honey,
    Turnip,
}

/// All tile kinds in a fixed order (used by the generator and for iteration).
pub const ALL_KINDS: [TileKind; KIND_COUNT] = [
    TileKind::Carrot,
    TileKind::Corn,
    TileKind::Wheat,
    TileKind::Grass,
    TileKind::Log,
    TileKind::Wool,
    TileKind::Milk,
    TileKind::Bell,
    TileKind::Berry,
    TileKind::Mushroom,
    TileKind::Pumpkin,
    TileKind::Clover,
    TileKind::Honey,
    TileKind::Turnip,
];

impl TileKind {
    /// Parse tile kind from string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_triples::types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("carrot"), Some(TileKind::Carrot));
    /// assert_eq!(TileKind::from_str("BELL"), Some(TileKind::Bell));
    /// assert_eq!(TileKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "carrot" => Some(TileKind::Carrot),
            "corn" => Some(TileKind::Corn),
            "wheat" => Some(TileKind::Wheat),
            "grass" => Some(TileKind::Grass),
            "log" => Some(TileKind::Log),
            "wool" => Some(TileKind::Wool),
            "milk" => Some(TileKind::Milk),
            "bell" => Some(TileKind::Bell),
            "berry" => Some(TileKind::Berry),
            "mushroom" => Some(TileKind::Mushroom),
            "pumpkin" => Some(TileKind::Pumpkin),
            "clover" => Some(TileKind::Clover),
            "honey" => Some(TileKind::Honey),
            "turnip" => Some(TileKind::Turnip),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Carrot => "carrot",
            TileKind::Corn => "corn",
            TileKind::Wheat => "wheat",
            TileKind::Grass => "grass",
            TileKind::Log => "log",
            TileKind::Wool => "wool",
            TileKind::Milk => "milk",
            TileKind::Bell => "bell",
            TileKind::Berry => "berry",
            TileKind::Mushroom => "mushroom",
            TileKind::Pumpkin => "pumpkin",
            TileKind::Clover => "clover",
            TileKind::Honey => "honey",
            TileKind::Turnip => "turnip",
        }
    }

    /// One-character glyph used by the terminal view.
    pub fn symbol(&self) -> char {
        match self {
            TileKind::Carrot => 'C',
            TileKind::Corn => 'N',
            TileKind::Wheat => 'W',
            TileKind::Grass => 'G',
            TileKind::Log => 'L',
            TileKind::Wool => 'O',
            TileKind::Milk => 'M',
            TileKind::Bell => 'B',
            TileKind::Berry => 'R',
            TileKind::Mushroom => 'U',
            TileKind::Pumpkin => 'P',
            TileKind::Clover => 'V',
            TileKind::Honey => 'H',
            TileKind::Turnip => 'T',
        }
    }
}

/// Life-cycle stage of a tile.
///
/// `Removed` tiles stay in the board collection for bookkeeping; removal is
/// logical, not physical deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    OnBoard,
    InSlot,
    InBuffer,
    Removed,
}

impl TileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileStatus::OnBoard => "on_board",
            TileStatus::InSlot => "in_slot",
            TileStatus::InBuffer => "in_buffer",
            TileStatus::Removed => "removed",
        }
    }
}

/// Session state machine: `NotStarted -> Playing -> {Won, Lost}`.
///
/// `Won` and `Lost` are terminal until an explicit level init or restart.
/// `Lost` can additionally be cleared by the undo and move-out boosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    /// True for `Won` and `Lost`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "not_started",
            GamePhase::Playing => "playing",
            GamePhase::Won => "won",
            GamePhase::Lost => "lost",
        }
    }
}

/// Feedback cue emitted after an effecting operation.
///
/// Consumed by observers via `GameState::take_last_event`; purely advisory,
/// never read back by the engine itself. At most one cue per operation, with
/// `Win`/`Loss` taking precedence over `Match`/`Place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Place,
    Match,
    Loss,
    Win,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Place => "place",
            GameEvent::Match => "match",
            GameEvent::Loss => "loss",
            GameEvent::Win => "win",
        }
    }
}

/// The three one-shot boosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoosterKind {
    MoveOut,
    Undo,
    Shuffle,
}

/// All boosters in a fixed order (also the storage order in `Boosters`).
pub const ALL_BOOSTERS: [BoosterKind; 3] = [
    BoosterKind::MoveOut,
    BoosterKind::Undo,
    BoosterKind::Shuffle,
];

impl BoosterKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "move_out" | "moveout" => Some(BoosterKind::MoveOut),
            "undo" => Some(BoosterKind::Undo),
            "shuffle" => Some(BoosterKind::Shuffle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoosterKind::MoveOut => "move_out",
            BoosterKind::Undo => "undo",
            BoosterKind::Shuffle => "shuffle",
        }
    }
}

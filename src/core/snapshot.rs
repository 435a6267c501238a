//! Plain resume record for a game session.
//!
//! `SessionSnapshot` is a full copy of everything needed to rebuild a
//! session bit-for-bit: tile collection, slot row, buffer, history,
//! booster flags, phase, level, episode, and the RNG state. It carries no
//! serialization itself; the `adapter` module owns the wire format and
//! converts to and from this type.

use arrayvec::ArrayVec;

use crate::core::boosters::BoosterState;
use crate::core::game_state::HistoryEntry;
use crate::core::tile::Tile;
use crate::types::{GamePhase, TileId, ALL_BOOSTERS, SLOT_CAPACITY};

/// Everything a session needs to resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub tiles: Vec<Tile>,
    pub slots: ArrayVec<TileId, SLOT_CAPACITY>,
    pub buffer: Vec<TileId>,
    pub history: Vec<HistoryEntry>,
    /// Booster flags in [`ALL_BOOSTERS`] order.
    pub boosters: [BoosterState; ALL_BOOSTERS.len()],
    pub level: u32,
    pub phase: GamePhase,
    pub episode_id: u32,
    pub rng_state: u32,
}

impl SessionSnapshot {
    /// An empty, not-started session record.
    pub fn empty() -> Self {
        Self {
            tiles: Vec::new(),
            slots: ArrayVec::new(),
            buffer: Vec::new(),
            history: Vec::new(),
            boosters: [BoosterState::default(); ALL_BOOSTERS.len()],
            level: 0,
            phase: GamePhase::NotStarted,
            episode_id: 0,
            rng_state: 1,
        }
    }
}

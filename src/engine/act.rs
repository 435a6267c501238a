//! Typed-error wrappers over the core's silent no-op operations.
//!
//! Each wrapper re-checks the operation's preconditions in order and
//! reports the first one that fails as a stable `code()`/`message()` pair,
//! then delegates to the core. The core stays free of error plumbing; the
//! presentation layer gets something it can show.

use crate::core::GameState;
use crate::types::{BoosterKind, GamePhase, TileId, MOVE_OUT_COUNT, SLOT_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActError {
    NotPlayable,
    NoLevel,
    UnknownTile,
    TileNotOnBoard,
    TileLocked,
    TileNotInBuffer,
    SlotRowFull,
    BoosterNotActivated,
    BoosterConsumed,
    NothingToUndo,
    BufferOccupied,
    NotEnoughSlotTiles,
}

impl ActError {
    pub fn code(self) -> &'static str {
        match self {
            ActError::NotPlayable => "not_playable",
            ActError::NoLevel => "no_level",
            ActError::UnknownTile | ActError::TileNotOnBoard | ActError::TileNotInBuffer => {
                "invalid_tile"
            }
            ActError::TileLocked => "tile_locked",
            ActError::SlotRowFull => "slot_row_full",
            ActError::BoosterNotActivated | ActError::BoosterConsumed => "booster_unavailable",
            ActError::NothingToUndo | ActError::BufferOccupied | ActError::NotEnoughSlotTiles => {
                "booster_precondition"
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ActError::NotPlayable => "game is not in a playable phase",
            ActError::NoLevel => "no level has been dealt yet",
            ActError::UnknownTile => "no tile with that id exists",
            ActError::TileNotOnBoard => "tile is not on the board",
            ActError::TileLocked => "tile is occluded by a higher tile",
            ActError::TileNotInBuffer => "tile is not in the buffer",
            ActError::SlotRowFull => "slot row has no free capacity",
            ActError::BoosterNotActivated => "booster has not been activated",
            ActError::BoosterConsumed => "booster was already used this game",
            ActError::NothingToUndo => "history is empty",
            ActError::BufferOccupied => "buffer already holds tiles",
            ActError::NotEnoughSlotTiles => "slot row holds fewer than three tiles",
        }
    }
}

/// Pick a board tile into the slot row, or explain why it cannot happen.
pub fn apply_click(state: &mut GameState, id: TileId) -> Result<(), ActError> {
    if state.phase() != GamePhase::Playing {
        return Err(ActError::NotPlayable);
    }
    if state.slots().len() == SLOT_CAPACITY {
        return Err(ActError::SlotRowFull);
    }
    let Some(tile) = state.tile(id) else {
        return Err(ActError::UnknownTile);
    };
    if !tile.is_on_board() {
        return Err(ActError::TileNotOnBoard);
    }
    if tile.locked {
        return Err(ActError::TileLocked);
    }

    if state.click_tile(id) {
        Ok(())
    } else {
        Err(ActError::NotPlayable)
    }
}

/// Move a buffer tile into the slot row, or explain why it cannot happen.
pub fn apply_buffer_click(state: &mut GameState, id: TileId) -> Result<(), ActError> {
    if state.phase() != GamePhase::Playing {
        return Err(ActError::NotPlayable);
    }
    if state.slots().len() == SLOT_CAPACITY {
        return Err(ActError::SlotRowFull);
    }
    if !state.buffer().contains(&id) {
        return Err(ActError::TileNotInBuffer);
    }

    if state.click_buffer_tile(id) {
        Ok(())
    } else {
        Err(ActError::NotPlayable)
    }
}

/// Run a booster effect, or explain why it cannot happen.
pub fn apply_booster(state: &mut GameState, kind: BoosterKind) -> Result<(), ActError> {
    let phase_ok = match kind {
        // Undo and move-out are the full-slot-row relief valves and stay
        // legal while `Lost`; shuffle only rearranges a live board.
        BoosterKind::Undo | BoosterKind::MoveOut => {
            matches!(state.phase(), GamePhase::Playing | GamePhase::Lost)
        }
        BoosterKind::Shuffle => state.phase() == GamePhase::Playing,
    };
    if !phase_ok {
        return Err(ActError::NotPlayable);
    }
    if !state.boosters().is_activated(kind) {
        return Err(ActError::BoosterNotActivated);
    }
    if state.boosters().is_used(kind) {
        return Err(ActError::BoosterConsumed);
    }

    let ok = match kind {
        BoosterKind::Undo => {
            if state.history().is_empty() {
                return Err(ActError::NothingToUndo);
            }
            state.undo()
        }
        BoosterKind::MoveOut => {
            if !state.buffer().is_empty() {
                return Err(ActError::BufferOccupied);
            }
            if state.slots().len() < MOVE_OUT_COUNT {
                return Err(ActError::NotEnoughSlotTiles);
            }
            state.move_out()
        }
        BoosterKind::Shuffle => state.shuffle(),
    };

    if ok {
        Ok(())
    } else {
        Err(ActError::NotPlayable)
    }
}

/// Re-deal the current level, or explain why there is nothing to restart.
pub fn apply_restart(state: &mut GameState) -> Result<(), ActError> {
    if state.level() == 0 {
        return Err(ActError::NoLevel);
    }
    if state.restart() {
        Ok(())
    } else {
        Err(ActError::NoLevel)
    }
}

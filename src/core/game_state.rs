//! Game state module - the match/slot state machine.
//!
//! This module ties together all core components: tile set, occlusion,
//! slot row, buffer, history, and boosters. It handles tile clicks, slot
//! insertion, match resolution, undo, and the win/loss life cycle.
//!
//! All operations are silent no-ops when their preconditions do not hold
//! (they return `false` and change nothing). The presentation layer is
//! expected to gate the UI; a stray call is a normal race, not an error.
//! Callers that want a diagnostic instead use the `engine` wrappers.

use arrayvec::ArrayVec;

use crate::core::boosters::Boosters;
use crate::core::generator::generate_level;
use crate::core::geometry::recompute_all_locks;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::SessionSnapshot;
use crate::core::tile::Tile;
use crate::types::{
    BoosterKind, GameEvent, GamePhase, TileId, TileKind, TileStatus, MATCH_SIZE, MOVE_OUT_COUNT,
    SLOT_CAPACITY,
};

/// One board-to-slot click, recorded for undo.
///
/// Holds independent copies (not references): `tile` is the clicked tile
/// exactly as it sat on the board, `slots` is the slot row just before the
/// insertion. Restoring both reverses the click and any match it triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub tile: Tile,
    pub slots: ArrayVec<TileId, SLOT_CAPACITY>,
}

/// Complete state of one game session.
///
/// The engine is an explicit instance owned by the caller; there is no
/// global store. Every operation runs to completion on the calling thread
/// and mutates only `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Every tile dealt for the current level, including removed ones
    /// (removal is logical bookkeeping, not deletion).
    tiles: Vec<Tile>,
    /// Ordered slot row; same-kind tiles kept adjacent by insertion policy.
    slots: ArrayVec<TileId, SLOT_CAPACITY>,
    /// Move-out holding area, in the order tiles left the slot row.
    buffer: Vec<TileId>,
    /// One entry per successful board click, newest last.
    history: Vec<HistoryEntry>,
    boosters: Boosters,
    level: u32,
    phase: GamePhase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last feedback cue (consumed by observers).
    last_event: Option<GameEvent>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new, not-yet-started session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            tiles: Vec::new(),
            slots: ArrayVec::new(),
            buffer: Vec::new(),
            history: Vec::new(),
            boosters: Boosters::new(),
            level: 0,
            phase: GamePhase::NotStarted,
            episode_id: 0,
            last_event: None,
            rng: SimpleRng::new(seed),
        }
    }

    /// Deal `level` and enter `Playing`.
    ///
    /// Clears slots, buffer, history, booster flags, and any terminal
    /// phase. Each call deals a fresh board from the ongoing RNG stream.
    pub fn init_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.tiles = generate_level(self.level, &mut self.rng);
        recompute_all_locks(&mut self.tiles);
        self.slots.clear();
        self.buffer.clear();
        self.history.clear();
        self.boosters.reset();
        self.phase = GamePhase::Playing;
        self.last_event = None;
    }

    /// Re-deal the current level. No-op before the first `init_level`.
    pub fn restart(&mut self) -> bool {
        if self.level == 0 {
            return false;
        }
        self.episode_id = self.episode_id.wrapping_add(1);
        self.init_level(self.level);
        true
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn slots(&self) -> &[TileId] {
        &self.slots
    }

    pub fn buffer(&self) -> &[TileId] {
        &self.buffer
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn boosters(&self) -> &Boosters {
        &self.boosters
    }

    /// Tiles still on the board.
    pub fn remaining(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_on_board()).count()
    }

    /// Current RNG state (deterministic resume).
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Ids of tiles the player may pick right now, in paint order.
    pub fn clickable_ids(&self) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|t| t.is_clickable())
            .map(|t| t.id)
            .collect()
    }

    /// Take and clear the last feedback cue.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Record an external booster activation (economy layer hook).
    pub fn activate_booster(&mut self, kind: BoosterKind) -> bool {
        self.boosters.activate(kind)
    }

    /// Pick an on-board tile into the slot row.
    ///
    /// Preconditions (silent no-op otherwise): playing, tile exists, on
    /// board, unlocked, slot row below capacity. On success the click is
    /// pushed to history, the tile is inserted next to its kind, a triple
    /// is resolved if one formed, occlusion is recomputed, and the win/loss
    /// rule is evaluated.
    pub fn click_tile(&mut self, id: TileId) -> bool {
        if self.phase != GamePhase::Playing || self.slots.is_full() {
            return false;
        }
        let Some(idx) = self.tile_index(id) else {
            return false;
        };
        let tile = self.tiles[idx];
        if !tile.is_clickable() {
            return false;
        }

        self.history.push(HistoryEntry {
            tile,
            slots: self.slots.clone(),
        });

        self.tiles[idx].status = TileStatus::InSlot;
        let at = self.slot_insert_index(tile.kind);
        self.slots.insert(at, id);

        let matched = self.resolve_match();
        recompute_all_locks(&mut self.tiles);
        self.finish_move(matched);
        true
    }

    /// Move a buffer tile into the slot row.
    ///
    /// Uses the same insertion and match rules as [`click_tile`], but is
    /// not recorded in history: buffer tiles can only ever proceed into
    /// slots, never back to the board.
    ///
    /// [`click_tile`]: GameState::click_tile
    pub fn click_buffer_tile(&mut self, id: TileId) -> bool {
        if self.phase != GamePhase::Playing || self.slots.is_full() {
            return false;
        }
        let Some(pos) = self.buffer.iter().position(|&b| b == id) else {
            return false;
        };
        let Some(idx) = self.tile_index(id) else {
            return false;
        };

        self.buffer.remove(pos);
        let kind = self.tiles[idx].kind;
        self.tiles[idx].status = TileStatus::InSlot;
        let at = self.slot_insert_index(kind);
        self.slots.insert(at, id);

        let matched = self.resolve_match();
        recompute_all_locks(&mut self.tiles);
        self.finish_move(matched);
        true
    }

    /// Undo the most recent board click (one-shot booster).
    ///
    /// Restores the clicked tile to its exact prior position and the slot
    /// row to its pre-click snapshot; a match triggered by that click is
    /// reversed as a consequence. Clears a `Lost` phase. Consumes the
    /// booster even though the history may hold more entries.
    pub fn undo(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::Lost) {
            return false;
        }
        if !self.boosters.ready(BoosterKind::Undo) {
            return false;
        }
        let Some(entry) = self.history.pop() else {
            return false;
        };

        self.slots = entry.slots.clone();
        for i in 0..self.slots.len() {
            let id = self.slots[i];
            if let Some(ti) = self.tile_index(id) {
                self.tiles[ti].status = TileStatus::InSlot;
            }
        }
        if let Some(ti) = self.tile_index(entry.tile.id) {
            self.tiles[ti] = entry.tile;
        }

        recompute_all_locks(&mut self.tiles);
        self.phase = GamePhase::Playing;
        self.boosters.consume(BoosterKind::Undo);
        self.last_event = None;
        true
    }

    /// Move the first three slot tiles into the buffer (one-shot booster).
    ///
    /// The primary relief mechanic for a full slot row: clears a `Lost`
    /// phase. Requires an empty buffer and at least three slot tiles.
    pub fn move_out(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::Lost) {
            return false;
        }
        if !self.boosters.ready(BoosterKind::MoveOut) {
            return false;
        }
        if !self.buffer.is_empty() || self.slots.len() < MOVE_OUT_COUNT {
            return false;
        }

        for _ in 0..MOVE_OUT_COUNT {
            let id = self.slots.remove(0);
            if let Some(ti) = self.tile_index(id) {
                self.tiles[ti].status = TileStatus::InBuffer;
            }
            self.buffer.push(id);
        }

        recompute_all_locks(&mut self.tiles);
        self.phase = GamePhase::Playing;
        self.boosters.consume(BoosterKind::MoveOut);
        self.last_event = None;
        true
    }

    /// Re-deal positions among the remaining board tiles (one-shot booster).
    ///
    /// The multiset of `(x, y, z)` triples is preserved; tiles are
    /// reassigned to a uniform permutation of it. Slots, buffer, and
    /// history are untouched.
    pub fn shuffle(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        if !self.boosters.ready(BoosterKind::Shuffle) {
            return false;
        }

        let board: Vec<usize> = (0..self.tiles.len())
            .filter(|&i| self.tiles[i].is_on_board())
            .collect();
        let mut coords: Vec<(i8, i8, u8)> = board
            .iter()
            .map(|&i| (self.tiles[i].x, self.tiles[i].y, self.tiles[i].z))
            .collect();
        self.rng.shuffle(&mut coords);
        for (slot, &i) in board.iter().enumerate() {
            let (x, y, z) = coords[slot];
            self.tiles[i].x = x;
            self.tiles[i].y = y;
            self.tiles[i].z = z;
        }

        recompute_all_locks(&mut self.tiles);
        self.boosters.consume(BoosterKind::Shuffle);
        true
    }

    /// Copy the full session into a plain resume record.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tiles: self.tiles.clone(),
            slots: self.slots.clone(),
            buffer: self.buffer.clone(),
            history: self.history.clone(),
            boosters: self.boosters.as_array(),
            level: self.level,
            phase: self.phase,
            episode_id: self.episode_id,
            rng_state: self.rng.state(),
        }
    }

    /// Rebuild a session from a resume record.
    ///
    /// Occlusion is recomputed rather than trusted from the record.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let mut state = Self {
            tiles: snapshot.tiles,
            slots: snapshot.slots,
            buffer: snapshot.buffer,
            history: snapshot.history,
            boosters: Boosters::from_array(snapshot.boosters),
            level: snapshot.level,
            phase: snapshot.phase,
            episode_id: snapshot.episode_id,
            last_event: None,
            rng: SimpleRng::new(snapshot.rng_state),
        };
        recompute_all_locks(&mut state.tiles);
        state
    }

    fn tile_index(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    fn kind_of(&self, id: TileId) -> Option<TileKind> {
        self.tile(id).map(|t| t.kind)
    }

    /// Adjacency-preserving insertion point: just past the last tile of the
    /// existing same-kind run, or the end of the row if the kind is absent.
    fn slot_insert_index(&self, kind: TileKind) -> usize {
        let mut i = 0;
        while i < self.slots.len() {
            if self.kind_of(self.slots[i]) == Some(kind) {
                while i < self.slots.len() && self.kind_of(self.slots[i]) == Some(kind) {
                    i += 1;
                }
                return i;
            }
            i += 1;
        }
        self.slots.len()
    }

    /// Remove one formed triple, if any. Insertion raises at most one
    /// kind's count, so at most one kind can newly cross the threshold.
    fn resolve_match(&mut self) -> bool {
        let mut matched_kind = None;
        for &id in &self.slots {
            let Some(kind) = self.kind_of(id) else {
                continue;
            };
            let count = self
                .slots
                .iter()
                .filter(|&&s| self.kind_of(s) == Some(kind))
                .count();
            if count >= MATCH_SIZE {
                matched_kind = Some(kind);
                break;
            }
        }
        let Some(kind) = matched_kind else {
            return false;
        };

        let mut removed: ArrayVec<TileId, MATCH_SIZE> = ArrayVec::new();
        for &id in &self.slots {
            if removed.len() == MATCH_SIZE {
                break;
            }
            if self.kind_of(id) == Some(kind) {
                removed.push(id);
            }
        }
        self.slots.retain(|id| !removed.contains(id));
        for id in removed {
            if let Some(ti) = self.tile_index(id) {
                self.tiles[ti].status = TileStatus::Removed;
            }
        }
        true
    }

    /// Win/loss evaluation plus feedback cue, shared by both click paths.
    fn finish_move(&mut self, matched: bool) {
        if self.remaining() == 0 && self.slots.is_empty() && self.buffer.is_empty() {
            self.phase = GamePhase::Won;
            self.last_event = Some(GameEvent::Win);
        } else if self.slots.is_full() {
            self.phase = GamePhase::Lost;
            self.last_event = Some(GameEvent::Loss);
        } else if matched {
            self.last_event = Some(GameEvent::Match);
        } else {
            self.last_event = Some(GameEvent::Place);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

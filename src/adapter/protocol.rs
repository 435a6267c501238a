//! Protocol module - JSON record types for session persistence.
//!
//! These DTOs mirror `core::snapshot::SessionSnapshot` field-for-field but
//! use lowercase string enums and plain `Vec`s so the on-disk format stays
//! readable and independent of in-memory representation choices. The
//! record is versioned; loaders reject versions they do not understand.

use serde::{Deserialize, Serialize};

use crate::core::{BoosterState, HistoryEntry, SessionSnapshot, Tile};
use crate::types::{GamePhase, TileId, TileKind, TileStatus};

/// Bumped whenever the record layout changes incompatibly.
pub const SESSION_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindLower {
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

impl From<TileKind> for KindLower {
    fn from(value: TileKind) -> Self {
        match value {
            TileKind::Carrot => KindLower::Carrot,
            TileKind::Corn => KindLower::Corn,
            TileKind::Wheat => KindLower::Wheat,
            TileKind::Grass => KindLower::Grass,
            TileKind::Log => KindLower::Log,
            TileKind::Wool => KindLower::Wool,
            TileKind::Milk => KindLower::Milk,
            TileKind::Bell => KindLower::Bell,
            TileKind::Berry => KindLower::Berry,
            TileKind::Mushroom => KindLower::Mushroom,
            TileKind::Pumpkin => KindLower::Pumpkin,
            TileKind::Clover => KindLower::Clover,
            TileKind::Honey => KindLower::Honey,
            TileKind::Turnip => KindLower::Turnip,
        }
    }
}

impl From<KindLower> for TileKind {
    fn from(value: KindLower) -> Self {
        match value {
            KindLower::Carrot => TileKind::Carrot,
            KindLower::Corn => TileKind::Corn,
            KindLower::Wheat => TileKind::Wheat,
            KindLower::Grass => TileKind::Grass,
            KindLower::Log => TileKind::Log,
            KindLower::Wool => TileKind::Wool,
            KindLower::Milk => TileKind::Milk,
            KindLower::Bell => TileKind::Bell,
            KindLower::Berry => TileKind::Berry,
            KindLower::Mushroom => TileKind::Mushroom,
            KindLower::Pumpkin => TileKind::Pumpkin,
            KindLower::Clover => TileKind::Clover,
            KindLower::Honey => TileKind::Honey,
            KindLower::Turnip => TileKind::Turnip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLower {
    OnBoard,
    InSlot,
    InBuffer,
    Removed,
}

impl From<TileStatus> for StatusLower {
    fn from(value: TileStatus) -> Self {
        match value {
            TileStatus::OnBoard => StatusLower::OnBoard,
            TileStatus::InSlot => StatusLower::InSlot,
            TileStatus::InBuffer => StatusLower::InBuffer,
            TileStatus::Removed => StatusLower::Removed,
        }
    }
}

impl From<StatusLower> for TileStatus {
    fn from(value: StatusLower) -> Self {
        match value {
            StatusLower::OnBoard => TileStatus::OnBoard,
            StatusLower::InSlot => TileStatus::InSlot,
            StatusLower::InBuffer => TileStatus::InBuffer,
            StatusLower::Removed => TileStatus::Removed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseLower {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl From<GamePhase> for PhaseLower {
    fn from(value: GamePhase) -> Self {
        match value {
            GamePhase::NotStarted => PhaseLower::NotStarted,
            GamePhase::Playing => PhaseLower::Playing,
            GamePhase::Won => PhaseLower::Won,
            GamePhase::Lost => PhaseLower::Lost,
        }
    }
}

impl From<PhaseLower> for GamePhase {
    fn from(value: PhaseLower) -> Self {
        match value {
            PhaseLower::NotStarted => GamePhase::NotStarted,
            PhaseLower::Playing => GamePhase::Playing,
            PhaseLower::Won => GamePhase::Won,
            PhaseLower::Lost => GamePhase::Lost,
        }
    }
}

/// One tile, with its derived lock flag included for readability of saved
/// files; loaders recompute occlusion and ignore the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub id: TileId,
    pub kind: KindLower,
    pub x: i8,
    pub y: i8,
    pub z: u8,
    pub status: StatusLower,
    pub locked: bool,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id,
            kind: tile.kind.into(),
            x: tile.x,
            y: tile.y,
            z: tile.z,
            status: tile.status.into(),
            locked: tile.locked,
        }
    }
}

impl From<&TileRecord> for Tile {
    fn from(record: &TileRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind.into(),
            x: record.x,
            y: record.y,
            z: record.z,
            status: record.status.into(),
            locked: record.locked,
        }
    }
}

/// One undo history entry: pre-click tile copy plus pre-click slot row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub tile: TileRecord,
    pub slots: Vec<TileId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoosterFlags {
    pub activated: bool,
    pub used: bool,
}

impl From<BoosterState> for BoosterFlags {
    fn from(value: BoosterState) -> Self {
        Self {
            activated: value.activated,
            used: value.used,
        }
    }
}

impl From<BoosterFlags> for BoosterState {
    fn from(value: BoosterFlags) -> Self {
        Self {
            activated: value.activated,
            used: value.used,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostersRecord {
    pub move_out: BoosterFlags,
    pub undo: BoosterFlags,
    pub shuffle: BoosterFlags,
}

/// The complete persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub version: u32,
    pub level: u32,
    pub episode_id: u32,
    pub phase: PhaseLower,
    pub rng_state: u32,
    pub tiles: Vec<TileRecord>,
    pub slots: Vec<TileId>,
    pub buffer: Vec<TileId>,
    pub history: Vec<HistoryRecord>,
    pub boosters: BoostersRecord,
}

impl SessionRecord {
    /// Build a record from a core snapshot.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            version: SESSION_FORMAT_VERSION,
            level: snapshot.level,
            episode_id: snapshot.episode_id,
            phase: snapshot.phase.into(),
            rng_state: snapshot.rng_state,
            tiles: snapshot.tiles.iter().map(TileRecord::from).collect(),
            slots: snapshot.slots.to_vec(),
            buffer: snapshot.buffer.clone(),
            history: snapshot
                .history
                .iter()
                .map(|entry| HistoryRecord {
                    tile: TileRecord::from(&entry.tile),
                    slots: entry.slots.to_vec(),
                })
                .collect(),
            boosters: BoostersRecord {
                move_out: snapshot.boosters[0].into(),
                undo: snapshot.boosters[1].into(),
                shuffle: snapshot.boosters[2].into(),
            },
        }
    }

    /// Convert back into a core snapshot.
    ///
    /// Purely structural; bounded-collection and referential validation
    /// happens in `session::load_session`.
    pub fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            tiles: self.tiles.iter().map(Tile::from).collect(),
            slots: self.slots.iter().copied().collect(),
            buffer: self.buffer,
            history: self
                .history
                .iter()
                .map(|record| HistoryEntry {
                    tile: Tile::from(&record.tile),
                    slots: record.slots.iter().copied().collect(),
                })
                .collect(),
            boosters: [
                self.boosters.move_out.into(),
                self.boosters.undo.into(),
                self.boosters.shuffle.into(),
            ],
            level: self.level,
            phase: self.phase.into(),
            episode_id: self.episode_id,
            rng_state: self.rng_state,
        }
    }
}

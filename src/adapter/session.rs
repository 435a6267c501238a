//! Session save/load - JSON serialization with structural validation.
//!
//! Saving is plain serialization of the current snapshot. Loading is
//! defensive: the record came from disk, so every bounded collection and
//! id reference is validated before the core ever sees it.

use anyhow::{anyhow, bail, Result};

use crate::adapter::protocol::{SessionRecord, SESSION_FORMAT_VERSION};
use crate::core::GameState;
use crate::types::{TileId, SLOT_CAPACITY};

/// Serialize the session to a JSON string.
pub fn save_session(state: &GameState) -> Result<String> {
    let record = SessionRecord::from_snapshot(&state.snapshot());
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Deserialize and validate a session from JSON.
///
/// Occlusion flags in the record are ignored; the rebuilt engine
/// recomputes them from the tile set.
pub fn load_session(json: &str) -> Result<GameState> {
    let record: SessionRecord =
        serde_json::from_str(json).map_err(|e| anyhow!("session: invalid json: {}", e))?;
    validate(&record)?;
    Ok(GameState::from_snapshot(record.into_snapshot()))
}

fn validate(record: &SessionRecord) -> Result<()> {
    if record.version != SESSION_FORMAT_VERSION {
        bail!(
            "session: unsupported format version {} (expected {})",
            record.version,
            SESSION_FORMAT_VERSION
        );
    }

    let mut ids: Vec<TileId> = record.tiles.iter().map(|t| t.id).collect();
    let tile_count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != tile_count {
        bail!("session: duplicate tile ids");
    }

    check_refs("slots", &record.slots, &ids)?;
    check_refs("buffer", &record.buffer, &ids)?;
    if record.slots.len() > SLOT_CAPACITY {
        bail!(
            "session: slot row holds {} tiles (capacity {})",
            record.slots.len(),
            SLOT_CAPACITY
        );
    }
    for entry in &record.history {
        check_refs("history", &entry.slots, &ids)?;
        if entry.slots.len() > SLOT_CAPACITY {
            bail!("session: history slot row exceeds capacity");
        }
        if ids.binary_search(&entry.tile.id).is_err() {
            bail!("session: history references unknown tile {}", entry.tile.id);
        }
    }

    Ok(())
}

fn check_refs(field: &str, refs: &[TileId], ids: &[TileId]) -> Result<()> {
    for &id in refs {
        if ids.binary_search(&id).is_err() {
            bail!("session: {} references unknown tile {}", field, id);
        }
    }
    Ok(())
}

//! Geometry module - footprint overlap and occlusion (lock) computation.
//!
//! Occlusion determines clickability: only unlocked, on-board tiles are
//! interactive, mirroring physical stacked cards where a tile is pickable
//! only if nothing lies on top of it within its footprint.
//!
//! Positions are in half-tile units, so every comparison here is exact
//! integer arithmetic. The O(n^2) full recompute is deliberate: boards top
//! out around 130 tiles and the recompute runs once per discrete user
//! action, not per frame.

use crate::core::tile::Tile;
use crate::types::TILE_SPAN;

/// Two tiles overlap iff their axis-aligned footprints intersect with
/// positive area. Footprints that merely touch at an edge do not overlap.
pub fn overlaps(a: &Tile, b: &Tile) -> bool {
    (a.x - b.x).abs() < TILE_SPAN && (a.y - b.y).abs() < TILE_SPAN
}

/// A tile is locked iff some other `OnBoard` tile with strictly greater z
/// overlaps it. Tiles not on the board are never locked.
pub fn compute_locked(tile: &Tile, tiles: &[Tile]) -> bool {
    if !tile.is_on_board() {
        return false;
    }
    tiles.iter().any(|other| {
        other.id != tile.id && other.is_on_board() && other.z > tile.z && overlaps(tile, other)
    })
}

/// Recompute the `locked` flag of every tile from scratch.
///
/// Must be called after every mutation that changes any tile's status,
/// position, or stacking order; `locked` is never carried over.
pub fn recompute_all_locks(tiles: &mut [Tile]) {
    for i in 0..tiles.len() {
        let mut locked = false;
        if tiles[i].is_on_board() {
            for j in 0..tiles.len() {
                if i == j {
                    continue;
                }
                if tiles[j].is_on_board()
                    && tiles[j].z > tiles[i].z
                    && overlaps(&tiles[i], &tiles[j])
                {
                    locked = true;
                    break;
                }
            }
        }
        tiles[i].locked = locked;
    }
}

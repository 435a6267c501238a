//! Level generator - deals the initial tile set for a level.
//!
//! Two recipes exist:
//!
//! - **Level 1 (tutorial)**: 3 random distinct kinds, 3 tiles each, at 9
//!   fixed non-overlapping anchors, all at z = 0. Zero initial occlusion,
//!   trivially solvable.
//! - **Level 2+ ("hell")**: all 14 kinds, each dealt 6 or 9 copies (fair
//!   coin), anchors drawn uniformly from the half-tile lattice, z uniform
//!   in `[0, MAX_STACK)`. The result is sorted by ascending z (paint and
//!   evaluation order).
//!
//! Per-kind counts are always multiples of 3; that is the invariant that
//! makes a full clear possible at all. The generator does NOT guarantee a
//! hell board is winnable without overflowing the slot row - the game can
//! become unwinnable by chance, matching the source difficulty curve.
//!
//! Lock flags are left false here; the consumer recomputes occlusion once
//! the set is installed (`geometry::recompute_all_locks`).

use crate::core::rng::SimpleRng;
use crate::core::tile::Tile;
use crate::types::{
    TileId, ALL_KINDS, HELL_COUNT_HIGH, HELL_COUNT_LOW, LATTICE_MAX_X, LATTICE_MAX_Y,
    LEVEL_ONE_ANCHORS, MAX_STACK, TUTORIAL_COPIES,
};

/// Deal the tile set for `level`. Level numbers below 2 use the tutorial
/// recipe.
pub fn generate_level(level: u32, rng: &mut SimpleRng) -> Vec<Tile> {
    if level <= 1 {
        generate_tutorial(rng)
    } else {
        generate_hell(rng)
    }
}

fn generate_tutorial(rng: &mut SimpleRng) -> Vec<Tile> {
    let mut kinds = ALL_KINDS;
    rng.shuffle(&mut kinds);

    let mut tiles = Vec::with_capacity(LEVEL_ONE_ANCHORS.len());
    for (i, &(x, y)) in LEVEL_ONE_ANCHORS.iter().enumerate() {
        let kind = kinds[i / TUTORIAL_COPIES];
        tiles.push(Tile::new(i as TileId, kind, x, y, 0));
    }
    tiles
}

fn generate_hell(rng: &mut SimpleRng) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut next_id: TileId = 0;

    for &kind in ALL_KINDS.iter() {
        let count = if rng.coin() {
            HELL_COUNT_LOW
        } else {
            HELL_COUNT_HIGH
        };
        for _ in 0..count {
            let x = rng.next_range(LATTICE_MAX_X as u32 + 1) as i8;
            let y = rng.next_range(LATTICE_MAX_Y as u32 + 1) as i8;
            let z = rng.next_range(MAX_STACK as u32) as u8;
            tiles.push(Tile::new(next_id, kind, x, y, z));
            next_id += 1;
        }
    }

    // Paint/evaluation order: lowest z first. Stable, so equal-z tiles keep
    // their deal order.
    tiles.sort_by_key(|t| t.z);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TileKind, TileStatus, KIND_COUNT, MATCH_SIZE, TUTORIAL_KINDS};
    use std::collections::HashMap;

    fn kind_counts(tiles: &[Tile]) -> HashMap<TileKind, usize> {
        let mut counts = HashMap::new();
        for tile in tiles {
            *counts.entry(tile.kind).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn tutorial_board_shape() {
        let mut rng = SimpleRng::new(12345);
        let tiles = generate_level(1, &mut rng);

        assert_eq!(tiles.len(), TUTORIAL_KINDS * TUTORIAL_COPIES);
        let counts = kind_counts(&tiles);
        assert_eq!(counts.len(), TUTORIAL_KINDS);
        for (_, count) in counts {
            assert_eq!(count, TUTORIAL_COPIES);
        }
        for tile in &tiles {
            assert_eq!(tile.z, 0);
            assert_eq!(tile.status, TileStatus::OnBoard);
        }
    }

    #[test]
    fn tutorial_kinds_vary_with_seed() {
        // Over a handful of seeds the selected kind triples cannot all be
        // the same one out of C(14, 3) possibilities.
        let mut seen = std::collections::HashSet::new();
        for seed in 1..=10u32 {
            let mut rng = SimpleRng::new(seed);
            let mut kinds: Vec<TileKind> = kind_counts(&generate_level(1, &mut rng))
                .into_keys()
                .collect();
            kinds.sort_by_key(|k| k.as_str());
            seen.insert(kinds);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn hell_board_uses_all_kinds_with_legal_counts() {
        let mut rng = SimpleRng::new(2024);
        let tiles = generate_level(2, &mut rng);

        let counts = kind_counts(&tiles);
        assert_eq!(counts.len(), KIND_COUNT);
        for (kind, count) in counts {
            assert!(
                count == HELL_COUNT_LOW || count == HELL_COUNT_HIGH,
                "{:?} dealt {} times",
                kind,
                count
            );
        }
    }

    #[test]
    fn every_level_has_kind_counts_divisible_by_three() {
        for level in 1..=8 {
            let mut rng = SimpleRng::new(level * 31 + 7);
            let tiles = generate_level(level, &mut rng);
            for (kind, count) in kind_counts(&tiles) {
                assert_eq!(
                    count % MATCH_SIZE,
                    0,
                    "level {} kind {:?} count {}",
                    level,
                    kind,
                    count
                );
            }
        }
    }

    #[test]
    fn hell_board_is_sorted_by_z() {
        let mut rng = SimpleRng::new(5);
        let tiles = generate_level(3, &mut rng);
        for pair in tiles.windows(2) {
            assert!(pair[0].z <= pair[1].z);
        }
    }

    #[test]
    fn hell_positions_stay_on_the_lattice() {
        let mut rng = SimpleRng::new(8);
        let tiles = generate_level(4, &mut rng);
        for tile in &tiles {
            assert!(tile.x >= 0 && tile.x <= LATTICE_MAX_X);
            assert!(tile.y >= 0 && tile.y <= LATTICE_MAX_Y);
            assert!(tile.z < MAX_STACK);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut rng = SimpleRng::new(11);
        let tiles = generate_level(2, &mut rng);
        let mut ids: Vec<TileId> = tiles.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tiles.len());
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let mut rng1 = SimpleRng::new(404);
        let mut rng2 = SimpleRng::new(404);
        assert_eq!(generate_level(2, &mut rng1), generate_level(2, &mut rng2));
    }
}

//! Reusable heightmap shapes.
//!
//! - [`flat`]: open pool, every column the same height.
//! - [`basin`]: bowl that deepens toward the centre.
//! - [`ridge`]: flat floor split by a wall along x with a gap in it.
//! - [`staircase`]: columns rising one step per x.
//! - [`seeded_terrain`]: deterministic pseudo-random relief.

use sonar_space::HeightMap;

/// Every column at `floor`.
pub fn flat(length: u32, width: u32, floor: u32) -> HeightMap {
    HeightMap::flat(length, width, floor).expect("fixture dimensions are non-zero")
}

/// A bowl of the given `depth`: rim columns are `depth` high and height
/// drops by one per step toward the centre (Chebyshev rings).
pub fn basin(size: u32, depth: u32) -> HeightMap {
    HeightMap::from_fn(size, size, |x, y| {
        let ring = x.min(y).min(size - 1 - x).min(size - 1 - y);
        depth.saturating_sub(ring)
    })
    .expect("fixture dimensions are non-zero")
}

/// A wall of `wall_height` at `x = wall_x` across the whole width, except
/// for a one-column gap at `y = gap_y` where the floor stays at zero.
pub fn ridge(length: u32, width: u32, wall_x: u32, wall_height: u32, gap_y: u32) -> HeightMap {
    HeightMap::from_fn(length, width, |x, y| {
        if x == wall_x && y != gap_y {
            wall_height
        } else {
            0
        }
    })
    .expect("fixture dimensions are non-zero")
}

/// Column height equals its x coordinate.
pub fn staircase(length: u32, width: u32) -> HeightMap {
    HeightMap::from_fn(length, width, |x, _| x).expect("fixture dimensions are non-zero")
}

/// Deterministic relief in `[0, max_height]` derived from `seed`.
pub fn seeded_terrain(length: u32, width: u32, max_height: u32, seed: u64) -> HeightMap {
    HeightMap::from_fn(length, width, |x, y| {
        let mut h = seed
            ^ (u64::from(x)).wrapping_mul(6364136223846793007)
            ^ (u64::from(y)).wrapping_mul(1442695040888963407);
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51afd7ed558ccd);
        h ^= h >> 33;
        (h % (u64::from(max_height) + 1)) as u32
    })
    .expect("fixture dimensions are non-zero")
}

//! Benchmark profiles and utilities for the Sonar simulation.
//!
//! Provides pre-built [`PoolConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 24x24 seabed, 8 layers (4.6K cells)
//! - [`stress_profile`]: 64x64 seabed, 12 layers (~49K cells)
//! - [`centre_source`]: source resting on the bottom of the middle column

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sonar_engine::{PoolConfig, SourceConfig};
use sonar_propagators::Placement;
use sonar_space::HeightMap;

/// Build a reference benchmark profile: 24x24 columns, 8 layers.
///
/// Terrain is a bowl with seeded bumps up to 3 cells tall on its floor.
pub fn reference_profile(seed: u64) -> PoolConfig {
    PoolConfig::new(8, seabed(24, 5, seed)).with_seed(seed)
}

/// Build a stress benchmark profile: 64x64 columns, 12 layers.
pub fn stress_profile(seed: u64) -> PoolConfig {
    PoolConfig::new(12, seabed(64, 8, seed)).with_seed(seed)
}

/// A source in the middle column of `config`, lying on the bottom.
pub fn centre_source(config: &PoolConfig, enhanced_realism: bool) -> SourceConfig {
    SourceConfig {
        placement: Placement::random()
            .with_x(config.heightmap.length() / 2)
            .with_y(config.heightmap.width() / 2),
        enhanced_realism,
        ..SourceConfig::default()
    }
}

/// Square seabed: walls `rim` tall falling toward the centre, with bumps.
fn seabed(size: u32, rim: u32, seed: u64) -> HeightMap {
    let half = size / 2;
    HeightMap::from_fn(size, size, |x, y| {
        // Keep the centre column clear for the source.
        if x == half && y == half {
            return 0;
        }
        let edge = x.min(y).min(size - 1 - x).min(size - 1 - y);
        let wall = rim.saturating_sub(edge);
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(u64::from(y * size + x).wrapping_mul(1442695040888963407));
        let bump = ((h >> 33) % 4) as u32;
        wall.max(bump.min(rim - 2))
    })
    .unwrap()
}

//! Test utilities for Sonar development.
//!
//! Provides reusable heightmap shapes ([`fixtures`]) and shortcuts for
//! building grids from them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use sonar_core::GridError;
use sonar_space::{HeightMap, VoxelGrid};

/// Build a grid one layer taller than the tallest column of `map`.
pub fn fitted_grid(map: &HeightMap) -> Result<VoxelGrid, GridError> {
    VoxelGrid::new(map.max_height() + 1, map)
}

/// Build a grid with `headroom` water layers above the tallest column.
pub fn grid_with_headroom(map: &HeightMap, headroom: u32) -> Result<VoxelGrid, GridError> {
    VoxelGrid::new(map.max_height() + headroom.max(1), map)
}

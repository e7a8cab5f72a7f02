//! Spatial data structures for Sonar simulations.
//!
//! - [`HeightMap`]: validated per-column terrain heights, the only input
//!   needed to shape a pool.
//! - [`VoxelGrid`]: the dense 3D store of [`Cell`]s with its immutable
//!   26-connected neighbour graph and terrain carved in from a heightmap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod heightmap;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::Cell;
pub use grid::VoxelGrid;
pub use heightmap::HeightMap;

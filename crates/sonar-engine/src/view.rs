//! Read-only pool view for renderers.
//!
//! [`PoolView`] exposes what a visualisation needs per frame: the terrain
//! layout, where the source and the submarine are, the submarine's trail,
//! and intensity slices. It borrows the pool immutably, so the pool cannot
//! change while a view is alive.

use sonar_core::Coord3;
use sonar_space::{HeightMap, VoxelGrid};

/// Borrowed, read-only snapshot of a [`Pool`](crate::Pool).
#[derive(Clone, Copy, Debug)]
pub struct PoolView<'p> {
    grid: &'p VoxelGrid,
    agent: Option<Coord3>,
    trail: &'p [Coord3],
}

impl<'p> PoolView<'p> {
    pub(crate) fn new(grid: &'p VoxelGrid, agent: Option<Coord3>, trail: &'p [Coord3]) -> Self {
        Self { grid, agent, trail }
    }

    /// `(length, width, height)`.
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.grid.length(), self.grid.width(), self.grid.height())
    }

    /// Terrain column heights.
    pub fn terrain(&self) -> &'p HeightMap {
        self.grid.terrain()
    }

    /// Terrain height of column `(x, y)`, or `None` outside the pool.
    pub fn terrain_height(&self, x: u32, y: u32) -> Option<u32> {
        self.grid.terrain().get(x, y)
    }

    /// Sound source marker position.
    pub fn source(&self) -> Option<Coord3> {
        self.grid.source_coord()
    }

    /// Submarine position.
    pub fn agent(&self) -> Option<Coord3> {
        self.agent
    }

    /// Every cell the submarine visited, in order.
    pub fn trail(&self) -> &'p [Coord3] {
        self.trail
    }

    /// Intensities of layer `z`, row-major by y. `None` for terrain and
    /// unresolved cells; empty if `z` is out of range.
    pub fn layer_intensities(&self, z: u32) -> Vec<Option<f64>> {
        self.grid.layer(z).iter().map(|c| c.intensity()).collect()
    }

    /// Smallest and largest intensity over all cells, once any is set.
    pub fn intensity_range(&self) -> Option<(f64, f64)> {
        self.grid
            .cells()
            .iter()
            .filter_map(|c| c.intensity())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Scene-space position of the centre of `coord`.
    ///
    /// Centres the pool on the origin in the horizontal plane, puts the
    /// vertical axis second (scaled by `z_scale`) and mirrors y so the
    /// pool is not seen flipped from above.
    pub fn scene_position(&self, coord: Coord3, z_scale: f64) -> [f64; 3] {
        let length = f64::from(self.grid.length());
        let width = f64::from(self.grid.width());
        [
            f64::from(coord.x) - length / 2.0,
            (f64::from(coord.z) + 0.5) * z_scale,
            width - 1.0 - f64::from(coord.y) - width / 2.0,
        ]
    }
}

//! A single voxel.

use sonar_core::{CellIndex, Coord3, Material, NEIGHBOUR_COUNT, NEIGHBOUR_OFFSETS};

/// One voxel of the pool.
///
/// The neighbour slots are filled once when the grid is built and never
/// change afterwards; only [`material`](Cell::material) and
/// [`intensity`](Cell::intensity) mutate later, and only through
/// [`VoxelGrid`](crate::VoxelGrid).
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub(crate) coord: Coord3,
    pub(crate) material: Material,
    pub(crate) intensity: Option<f64>,
    pub(crate) neighbours: [Option<CellIndex>; NEIGHBOUR_COUNT],
}

impl Cell {
    pub(crate) fn water(coord: Coord3) -> Self {
        Self {
            coord,
            material: Material::Water,
            intensity: None,
            neighbours: [None; NEIGHBOUR_COUNT],
        }
    }

    /// Position of this cell.
    pub fn coord(&self) -> Coord3 {
        self.coord
    }

    /// Current material.
    pub fn material(&self) -> Material {
        self.material
    }

    /// Shorthand for `material().is_water()`.
    pub fn is_water(&self) -> bool {
        self.material.is_water()
    }

    /// Sound intensity, `None` until propagated or seeded.
    pub fn intensity(&self) -> Option<f64> {
        self.intensity
    }

    /// All 26 neighbour slots in [`NEIGHBOUR_OFFSETS`] order; `None` where
    /// the offset leaves the grid.
    pub fn neighbour_slots(&self) -> &[Option<CellIndex>; NEIGHBOUR_COUNT] {
        &self.neighbours
    }

    /// Present neighbours as `(slot, index)` pairs, in slot order.
    pub fn neighbours(&self) -> impl Iterator<Item = (usize, CellIndex)> + '_ {
        self.neighbours
            .iter()
            .enumerate()
            .filter_map(|(slot, n)| n.map(|idx| (slot, idx)))
    }

    /// Number of in-bounds neighbours (26 in the interior, 7 in a corner).
    pub fn degree(&self) -> usize {
        self.neighbours.iter().filter(|n| n.is_some()).count()
    }

    /// Index of the neighbour reached by `offset`, if present.
    pub fn neighbour_towards(&self, offset: sonar_core::Offset3) -> Option<CellIndex> {
        let slot = NEIGHBOUR_OFFSETS.iter().position(|&o| o == offset)?;
        self.neighbours[slot]
    }
}

//! Grid invariant test helpers.
//!
//! Reused by the grid unit tests and property tests to check that a
//! constructed [`VoxelGrid`] honours its structural contract.

use crate::grid::VoxelGrid;
use crate::heightmap::HeightMap;
use indexmap::IndexSet;
use sonar_core::{opposite_slot, Material};

/// Assert `z < h(x, y)` is terrain and everything above is water.
pub fn assert_material_layout(grid: &VoxelGrid, map: &HeightMap) {
    for cell in grid.cells() {
        let c = cell.coord();
        let h = map.get(c.x, c.y).expect("heightmap covers the grid");
        let expected = if c.z < h {
            Material::Terrain
        } else {
            Material::Water
        };
        assert_eq!(
            cell.material(),
            expected,
            "cell {c} has {:?}, column height is {h}",
            cell.material()
        );
    }
}

/// Assert that if A reaches B through slot `d`, B reaches A through `-d`.
pub fn assert_neighbours_symmetric(grid: &VoxelGrid) {
    for (i, cell) in grid.cells().iter().enumerate() {
        for (slot, nb) in cell.neighbours() {
            let back = opposite_slot(slot).expect("every slot has an opposite");
            let back_idx = grid.cell(nb).neighbour_slots()[back];
            assert_eq!(
                back_idx.map(|b| b.0),
                Some(i),
                "neighbour symmetry violated between {} and {}",
                cell.coord(),
                grid.cell(nb).coord()
            );
        }
    }
}

/// Assert each cell has exactly the in-bounds neighbours its position allows.
pub fn assert_degree_matches_position(grid: &VoxelGrid) {
    let span = |v: u32, len: u32| -> usize {
        let lo = usize::from(v > 0);
        let hi = usize::from(v + 1 < len);
        1 + lo + hi
    };
    for cell in grid.cells() {
        let c = cell.coord();
        let expected = span(c.x, grid.length()) * span(c.y, grid.width())
            * span(c.z, grid.height())
            - 1;
        assert_eq!(cell.degree(), expected, "wrong degree at {c}");
    }
}

/// Assert no cell lists the same neighbour twice or lists itself.
pub fn assert_neighbours_unique(grid: &VoxelGrid) {
    for (i, cell) in grid.cells().iter().enumerate() {
        let set: IndexSet<usize> = cell.neighbours().map(|(_, n)| n.0).collect();
        assert_eq!(set.len(), cell.degree(), "duplicate neighbour at {}", cell.coord());
        assert!(!set.contains(&i), "cell {} is its own neighbour", cell.coord());
    }
}

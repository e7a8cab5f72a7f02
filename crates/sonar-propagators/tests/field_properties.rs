//! Integration tests for propagation and navigation over generated terrain.
//!
//! These run the full pipeline: carve a heightmap, place a source with a
//! seeded RNG, propagate, then sail a submarine up the field.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sonar_core::{Coord3, FieldError, Material};
use sonar_propagators::{
    shortest_curve, Envelope, NavState, Placement, SoundField, StepBudget, Submarine,
};
use sonar_space::VoxelGrid;
use sonar_test_utils::{fitted_grid, fixtures, grid_with_headroom};

fn field(enhanced: bool, parallel: bool) -> SoundField {
    SoundField::builder()
        .enhanced_realism(enhanced)
        .parallel(parallel)
        .build()
        .unwrap()
}

fn propagated(grid: &mut VoxelGrid, rng: &mut ChaCha8Rng, enhanced: bool) -> Coord3 {
    let at = Placement::random().resolve_source(grid, rng).unwrap();
    field(enhanced, false).emit(grid, at).unwrap();
    at
}

// ── Concrete scenarios ───────────────────────────────────────────────

#[test]
fn flat_cube_inverse_square_shells() {
    let mut grid = VoxelGrid::new(3, &fixtures::flat(3, 3, 0)).unwrap();
    let source = Coord3::new(1, 1, 1);
    let report = field(false, false).emit(&mut grid, source).unwrap();
    assert_eq!(report.resolved_cells, 26);

    for cell in grid.cells() {
        let c = cell.coord();
        if c == source {
            continue;
        }
        let changed = [c.x, c.y, c.z].iter().filter(|&&v| v != 1).count() as f64;
        let got = cell.intensity().unwrap();
        assert!((got - 1000.0 / changed).abs() < 1e-9, "{c}: {got}");
    }
}

#[test]
fn ridge_gap_lengthens_curves_behind_the_wall() {
    let map = fixtures::ridge(7, 5, 3, 4, 2);
    let mut grid = grid_with_headroom(&map, 1).unwrap();
    let source = Coord3::new(1, 2, 0);
    field(false, false).emit(&mut grid, source).unwrap();

    // In line with the gap the curve is the straight line.
    assert_eq!(grid.intensity(Coord3::new(5, 2, 0)), Some(1000.0 / 16.0));
    // Behind the wall it climbs over the top, well past the straight
    // line (squared length 20).
    let hidden = grid.intensity(Coord3::new(5, 0, 0)).unwrap();
    assert!(hidden < 1000.0 / 20.0);
}

#[test]
fn terrain_target_is_rejected_without_mutation() {
    let map = fixtures::staircase(4, 2);
    let grid = fitted_grid(&map).unwrap();
    let before = grid.cells().to_vec();
    let target = Coord3::new(3, 0, 1);
    assert_eq!(grid.material(target), Some(Material::Terrain));
    assert_eq!(
        shortest_curve(&grid, Coord3::new(0, 0, 0), target, Envelope::scan(&grid), true),
        Err(FieldError::TargetNotWater { coord: target })
    );
    assert_eq!(grid.cells(), before.as_slice());
}

#[test]
fn basin_voyage_descends_onto_the_source() {
    let map = fixtures::basin(7, 3);
    let mut grid = grid_with_headroom(&map, 2).unwrap();
    let source = Coord3::new(3, 3, 1);
    field(true, false).emit(&mut grid, source).unwrap();
    assert_eq!(grid.intensity(Coord3::new(3, 3, 3)), Some(250.0));

    // Straight down the centre column: the cell just above the source
    // reads 1000 and its loudest neighbour, the source, is no louder.
    let mut sub = Submarine::new(Coord3::new(3, 3, 3));
    let voyage = sub.voyage(&grid, StepBudget::Unlimited).unwrap();
    assert_eq!(voyage.path, vec![Coord3::new(3, 3, 3), Coord3::new(3, 3, 2)]);
    assert_eq!(voyage.state, NavState::Reached);
}

// ── Properties ───────────────────────────────────────────────────────
//
// The waterline scan starts at z = 1, so every pool keeps at least two
// water layers above its tallest column. Voyages get a third: once the
// source sits on the bottom of a column, an agent drawn into that column
// still needs water above it.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_water_cell_gets_a_positive_intensity(
        length in 2u32..6,
        width in 2u32..6,
        relief in 0u32..3,
        headroom in 2u32..4,
        terrain_seed in any::<u64>(),
        rng_seed in any::<u64>(),
        enhanced in any::<bool>(),
    ) {
        let map = fixtures::seeded_terrain(length, width, relief, terrain_seed);
        let mut grid = grid_with_headroom(&map, headroom).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let source = propagated(&mut grid, &mut rng, enhanced);

        for cell in grid.cells() {
            match cell.material() {
                Material::Water => {
                    let v = cell.intensity().unwrap();
                    prop_assert!(v.is_finite() && v > 0.0 && v <= 1000.0);
                }
                Material::Terrain => prop_assert!(cell.intensity().is_none()),
                Material::Source => {
                    prop_assert_eq!(cell.coord(), source);
                    prop_assert_eq!(cell.intensity(), Some(1000.0));
                }
            }
        }
    }

    #[test]
    fn second_pass_changes_nothing(
        length in 2u32..6,
        width in 2u32..6,
        relief in 0u32..3,
        terrain_seed in any::<u64>(),
        rng_seed in any::<u64>(),
    ) {
        let map = fixtures::seeded_terrain(length, width, relief, terrain_seed);
        let mut grid = grid_with_headroom(&map, 2).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        propagated(&mut grid, &mut rng, false);

        let before = grid.cells().to_vec();
        let report = field(false, false).propagate(&mut grid).unwrap();
        prop_assert_eq!(report.resolved_cells, 0);
        prop_assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn parallel_matches_sequential(
        length in 2u32..6,
        width in 2u32..6,
        relief in 0u32..3,
        terrain_seed in any::<u64>(),
        rng_seed in any::<u64>(),
        enhanced in any::<bool>(),
    ) {
        let map = fixtures::seeded_terrain(length, width, relief, terrain_seed);
        let mut seq = grid_with_headroom(&map, 2).unwrap();
        let mut par = seq.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let at = Placement::random().resolve_source(&seq, &mut rng).unwrap();

        field(enhanced, false).emit(&mut seq, at).unwrap();
        field(enhanced, true).emit(&mut par, at).unwrap();
        prop_assert_eq!(seq.cells(), par.cells());
    }

    #[test]
    fn unlimited_voyage_terminates_climbing(
        length in 2u32..6,
        width in 2u32..6,
        relief in 0u32..3,
        terrain_seed in any::<u64>(),
        rng_seed in any::<u64>(),
    ) {
        let map = fixtures::seeded_terrain(length, width, relief, terrain_seed);
        let mut grid = grid_with_headroom(&map, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        propagated(&mut grid, &mut rng, false);

        let mut sub = Submarine::place(&grid, &Placement::random(), &mut rng).unwrap();
        let voyage = sub.voyage(&grid, StepBudget::Unlimited).unwrap();
        prop_assert_eq!(voyage.state, NavState::Reached);
        prop_assert!(voyage.moves() <= grid.cell_count());

        let levels: Vec<f64> = voyage
            .path
            .iter()
            .map(|&c| grid.intensity(c).unwrap())
            .collect();
        prop_assert!(levels.windows(2).all(|w| w[1] >= w[0]));
    }
}

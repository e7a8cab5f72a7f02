//! Integration tests: whole-pool runs through the public `Pool` API.

use sonar_core::Coord3;
use sonar_engine::{Pool, PoolConfig, PoolError, SourceConfig};
use sonar_propagators::{NavState, Placement, StepBudget};
use sonar_test_utils::fixtures;

fn run(seed: u64, parallel: bool) -> (Coord3, Vec<Coord3>, Vec<Option<f64>>) {
    let config = PoolConfig::new(5, fixtures::seeded_terrain(6, 5, 3, 99))
        .with_seed(seed)
        .with_parallel(parallel);
    let mut pool = Pool::new(config).unwrap();
    let report = pool.add_sound_source(&SourceConfig::default()).unwrap();
    pool.add_agent(&Placement::random()).unwrap();
    let voyage = pool.move_agent(StepBudget::Unlimited).unwrap();
    let field = pool.grid().cells().iter().map(|c| c.intensity()).collect();
    (report.source, voyage.path, field)
}

#[test]
fn same_seed_same_run() {
    assert_eq!(run(42, false), run(42, false));
}

#[test]
fn parallel_run_is_identical() {
    assert_eq!(run(7, false), run(7, true));
}

#[test]
fn reference_cube_scenario() {
    let mut pool = Pool::new(PoolConfig::new(3, fixtures::flat(3, 3, 0))).unwrap();
    let source = SourceConfig::at(1, 1, 1)
        .with_intensity(1000.0)
        .with_enhanced_realism(false);
    let report = pool.add_sound_source(&source).unwrap();
    assert_eq!(report.resolved_cells, 26);

    let view = pool.view();
    let face = pool.grid().intensity(Coord3::new(1, 1, 0)).unwrap();
    let edge = pool.grid().intensity(Coord3::new(0, 1, 0)).unwrap();
    let corner = pool.grid().intensity(Coord3::new(0, 0, 0)).unwrap();
    assert!((face - 1000.0).abs() < 1e-9);
    assert!((edge - 500.0).abs() < 1e-9);
    assert!((corner - 1000.0 / 3.0).abs() < 1e-9);
    assert_eq!(view.source(), Some(Coord3::new(1, 1, 1)));
}

#[test]
fn explicit_out_of_range_placement_is_redrawn() {
    let mut pool = Pool::new(PoolConfig::new(4, fixtures::flat(3, 3, 1)).with_seed(3)).unwrap();
    let at = pool.add_agent(&Placement::at(10, 1, 0)).unwrap();
    assert!(at.x < 3);
    assert_eq!(at.y, 1);
    // z = 0 is terrain; the depth is drawn from [waterline, height).
    assert!((1..4).contains(&at.z));
}

#[test]
fn full_session_on_a_basin() {
    let mut pool = Pool::new(PoolConfig::fitted(fixtures::basin(7, 3)).with_seed(11)).unwrap();
    pool.add_sound_source(&SourceConfig::at(3, 3, 1)).unwrap();

    for _ in 0..3 {
        pool.add_agent(&Placement::random()).unwrap();
        let voyage = pool.move_agent(StepBudget::Unlimited).unwrap();
        assert_eq!(voyage.state, NavState::Reached);
        assert_eq!(pool.view().trail(), voyage.path.as_slice());
    }

    assert!(matches!(
        pool.add_sound_source(&SourceConfig::default()),
        Err(PoolError::Field(_))
    ));
}

#[test]
fn limited_budget_stops_early() {
    let mut pool = Pool::new(PoolConfig::new(6, fixtures::flat(6, 6, 0))).unwrap();
    pool.add_sound_source(&SourceConfig::at(5, 5, 1).with_enhanced_realism(false))
        .unwrap();
    pool.add_agent(&Placement::at(0, 0, 5)).unwrap();
    let voyage = pool.move_agent(StepBudget::Limited(1)).unwrap();
    assert_eq!(voyage.state, NavState::StepBudgetExhausted);
    assert_eq!(voyage.moves(), 1);
    assert_eq!(pool.agent(), voyage.path.last().copied());
}

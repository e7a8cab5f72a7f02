//! End-to-end run on a small seabed.
//!
//! Demonstrates: heightmap → pool → sound source → submarine voyages →
//! renderer view. Set `RUST_LOG=debug` to see per-layer progress.

use sonar::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Sonar Quickstart ===\n");

    // A bowl with a shelf on one side: terrain heights per column.
    #[rustfmt::skip]
    let rows: [[u32; 8]; 8] = [
        [4, 4, 4, 4, 4, 4, 4, 4],
        [4, 2, 2, 2, 1, 1, 1, 4],
        [4, 2, 3, 3, 1, 0, 1, 4],
        [4, 2, 3, 3, 0, 0, 1, 4],
        [4, 1, 1, 0, 0, 0, 1, 4],
        [4, 1, 0, 0, 0, 0, 1, 4],
        [4, 1, 1, 1, 1, 1, 1, 4],
        [4, 4, 4, 4, 4, 4, 4, 4],
    ];
    let map = HeightMap::from_rows(&rows)?;
    let config = PoolConfig::new(map.max_height() + 3, map).with_seed(2021);
    let mut pool = Pool::new(config)?;
    println!(
        "Pool {}x{}x{}: {} water cells",
        pool.grid().length(),
        pool.grid().width(),
        pool.grid().height(),
        pool.grid().water_cell_count()
    );

    // Source on the bottom of a random column.
    let report = pool.add_sound_source(&SourceConfig::default())?;
    println!(
        "Source at {}, envelope {:?}, {} cells resolved\n",
        report.source, report.envelope, report.resolved_cells
    );

    // Three submarines, each dropped at a random spot.
    for run in 1..=3 {
        let start = pool.add_agent(&Placement::random())?;
        let voyage = pool.move_agent(StepBudget::Unlimited)?;
        println!(
            "Submarine {run}: {start} -> {} in {} moves ({:?})",
            voyage.path.last().copied().unwrap_or(start),
            voyage.moves(),
            voyage.state
        );
    }

    // What a renderer would draw for the last trail.
    let view = pool.view();
    println!("\nScene positions of the last trail (z scale 0.5):");
    for &cell in view.trail() {
        let [x, y, z] = view.scene_position(cell, 0.5);
        println!("  {cell} -> ({x:.1}, {y:.2}, {z:.1})");
    }

    Ok(())
}

//! The free-space envelope ("parallelepiped of assumptions").
//!
//! The narrowest contiguous run of water anywhere in the pool bounds how
//! far sideways the curve estimator looks from each waypoint. This keeps
//! per-cell cost bounded in large open pools at the price of a narrower
//! search near irregular terrain.

use sonar_core::Coord3;
use sonar_space::VoxelGrid;

/// Lateral half-extents of the curve estimator's search window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Half-extent along x.
    pub box_length: u32,
    /// Half-extent along y.
    pub box_width: u32,
}

impl Envelope {
    /// An explicit envelope. Zero extents are raised to one so the search
    /// window always contains the neighbouring columns.
    pub fn new(box_length: u32, box_width: u32) -> Self {
        Self {
            box_length: box_length.max(1),
            box_width: box_width.max(1),
        }
    }

    /// Scan every layer for the shortest unbroken run of water along x
    /// (per row) and along y (per column).
    ///
    /// Starts from `(length, width)` and only ever shrinks; layers with no
    /// water contribute nothing.
    pub fn scan(grid: &VoxelGrid) -> Self {
        let (length, width, height) = (grid.length(), grid.width(), grid.height());
        let mut box_length = length;
        let mut box_width = width;

        for z in 0..height {
            for y in 0..width {
                let runs = water_runs((0..length).map(|x| grid.is_water(Coord3::new(x, y, z))));
                box_length = box_length.min(runs.unwrap_or(box_length));
            }
            for x in 0..length {
                let runs = water_runs((0..width).map(|y| grid.is_water(Coord3::new(x, y, z))));
                box_width = box_width.min(runs.unwrap_or(box_width));
            }
        }

        let envelope = Self::new(box_length, box_width);
        tracing::info!(
            box_length = envelope.box_length,
            box_width = envelope.box_width,
            "free-space envelope scanned"
        );
        envelope
    }
}

/// Length of the shortest non-empty run of `true`, if any.
fn water_runs(line: impl Iterator<Item = bool>) -> Option<u32> {
    let mut shortest: Option<u32> = None;
    let mut run = 0u32;
    for water in line.chain(std::iter::once(false)) {
        if water {
            run += 1;
        } else if run > 0 {
            shortest = Some(shortest.map_or(run, |s| s.min(run)));
            run = 0;
        }
    }
    shortest
}

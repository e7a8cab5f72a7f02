//! Heuristic length of the shortest water-only route between two cells.
//!
//! Instead of a full shortest-path search, the estimator advances one
//! waypoint at a time toward the target, choosing each waypoint from a
//! window bounded by the [`Envelope`] around the current position, and
//! sums the straight-line hop lengths. The result is a deterministic
//! polyline length, not an optimal geodesic.
//!
//! # Waypoint selection
//!
//! ```text
//! enhanced: candidates = window(x ± box_length, y ± box_width) × all z
//!           pick min remaining |Δx|+|Δy|+|Δz| among water candidates that
//!             - strictly reduce the total remaining distance, and
//!             - do not increase the remaining |Δx|+|Δy|
//!           ties: first in (z, y, x) order
//! fallback: columns   = window(x ± box_length, y ± box_width)
//!           for columns by remaining |Δx|+|Δy| (ties in (y, x) order):
//!             first water z, nearest the target's z first (lower wins ties)
//!             accept unless it is the current position
//! ```
//!
//! Enhanced mode falls back when it finds no acceptable candidate.

use crate::envelope::Envelope;
use sonar_core::{Coord3, FieldError};
use sonar_space::VoxelGrid;
use std::ops::RangeInclusive;

/// A configured curve estimator.
///
/// Holds no per-call state; one instance can be shared across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortestCurve {
    envelope: Envelope,
    enhanced_realism: bool,
}

impl ShortestCurve {
    /// Create an estimator with the given search window and mode.
    pub fn new(envelope: Envelope, enhanced_realism: bool) -> Self {
        Self {
            envelope,
            enhanced_realism,
        }
    }

    /// The search window.
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Whether the full-volume candidate scan is enabled.
    pub fn enhanced_realism(&self) -> bool {
        self.enhanced_realism
    }

    /// Estimate the curve length from `from` to `to`.
    ///
    /// If the target already carries an intensity, that value is returned
    /// unchanged: resolved cells (and the source itself) are never
    /// recomputed. This returns an intensity where a length is expected,
    /// which callers must treat as "already resolved".
    ///
    /// # Errors
    ///
    /// - [`FieldError::CoordOutOfBounds`] if either endpoint is outside the grid.
    /// - [`FieldError::TargetNotWater`] if the unresolved target is not water.
    /// - [`FieldError::Unroutable`] if no progress can be made, or the hop
    ///   count exceeds the number of cells in the grid.
    pub fn length(&self, grid: &VoxelGrid, from: Coord3, to: Coord3) -> Result<f64, FieldError> {
        if !grid.contains(from) {
            return Err(FieldError::CoordOutOfBounds { coord: from });
        }
        let target = grid
            .cell_at(to)
            .ok_or(FieldError::CoordOutOfBounds { coord: to })?;
        if let Some(resolved) = target.intensity() {
            return Ok(resolved);
        }
        if !target.is_water() {
            return Err(FieldError::TargetNotWater { coord: to });
        }

        let max_hops = grid.cell_count();
        let mut current = from;
        let mut curve_len = 0.0;
        let mut hops = 0usize;

        while current != to {
            if hops >= max_hops {
                return Err(FieldError::Unroutable { target: to, hops });
            }
            let next = self
                .enhanced_realism
                .then(|| self.enhanced_step(grid, current, to))
                .flatten()
                .or_else(|| self.fallback_step(grid, current, to))
                .ok_or(FieldError::Unroutable { target: to, hops })?;

            curve_len += current.euclidean(next);
            current = next;
            hops += 1;
        }
        Ok(curve_len)
    }

    /// Window bounds around `c`, clipped to the grid.
    fn window(&self, grid: &VoxelGrid, c: Coord3) -> (RangeInclusive<u32>, RangeInclusive<u32>) {
        let xs = c.x.saturating_sub(self.envelope.box_length)
            ..=(c.x.saturating_add(self.envelope.box_length)).min(grid.length() - 1);
        let ys = c.y.saturating_sub(self.envelope.box_width)
            ..=(c.y.saturating_add(self.envelope.box_width)).min(grid.width() - 1);
        (xs, ys)
    }

    fn enhanced_step(&self, grid: &VoxelGrid, current: Coord3, target: Coord3) -> Option<Coord3> {
        let total_now = current.manhattan(target);
        let xy_now = current.xy_manhattan(target);
        let (xs, ys) = self.window(grid, current);

        let mut best: Option<(u32, Coord3)> = None;
        for z in 0..grid.height() {
            for y in ys.clone() {
                for x in xs.clone() {
                    let candidate = Coord3::new(x, y, z);
                    let total = candidate.manhattan(target);
                    if total >= total_now || best.is_some_and(|(b, _)| total >= b) {
                        continue;
                    }
                    if candidate.xy_manhattan(target) > xy_now || !grid.is_water(candidate) {
                        continue;
                    }
                    best = Some((total, candidate));
                }
            }
        }
        best.map(|(_, c)| c)
    }

    fn fallback_step(&self, grid: &VoxelGrid, current: Coord3, target: Coord3) -> Option<Coord3> {
        let (xs, ys) = self.window(grid, current);

        let mut best: Option<(u32, Coord3)> = None;
        for y in ys {
            for x in xs.clone() {
                let xy = Coord3::new(x, y, 0).xy_manhattan(target);
                if best.is_some_and(|(b, _)| xy >= b) {
                    continue;
                }
                let found = proximity_order(target.z, grid.height())
                    .map(|z| Coord3::new(x, y, z))
                    .find(|&c| grid.is_water(c));
                if let Some(c) = found.filter(|&c| c != current) {
                    best = Some((xy, c));
                }
            }
        }
        best.map(|(_, c)| c)
    }
}

/// `z` values in `[0, height)` ordered by distance from `centre`, the
/// lower of each equidistant pair first.
fn proximity_order(centre: u32, height: u32) -> impl Iterator<Item = u32> {
    let centre = centre.min(height.saturating_sub(1));
    let reach = centre.max(height.saturating_sub(1) - centre);
    std::iter::once(centre).chain((1..=reach).flat_map(move |d| {
        let below = centre.checked_sub(d);
        let above = centre.checked_add(d).filter(|&z| z < height);
        below.into_iter().chain(above)
    }))
}

/// One-shot form of [`ShortestCurve::length`].
pub fn shortest_curve(
    grid: &VoxelGrid,
    from: Coord3,
    to: Coord3,
    envelope: Envelope,
    enhanced_realism: bool,
) -> Result<f64, FieldError> {
    ShortestCurve::new(envelope, enhanced_realism).length(grid, from, to)
}

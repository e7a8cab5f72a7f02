//! Error types for the Sonar simulation.
//!
//! Grouped by subsystem: grid construction and placement, field
//! propagation, and navigation. Every variant is a local precondition
//! violation; none of them is retried internally.

use crate::id::Coord3;
use std::error::Error;
use std::fmt;

/// Errors from building a grid or locating cells in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The configured pool height does not exceed the tallest terrain column.
    InvalidDimension {
        /// Configured vertical extent.
        height: u32,
        /// Tallest column in the heightmap.
        max_terrain: u32,
    },
    /// Scanning upward for the waterline ran off the top of the pool.
    NoWaterColumn {
        /// Column x.
        x: u32,
        /// Column y.
        y: u32,
    },
    /// The heightmap has no columns.
    EmptyGrid,
    /// A heightmap row has a different length from the first row.
    RaggedHeightMap {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A raw pixel buffer does not cover `length * width` columns.
    PixelCountMismatch {
        /// `length * width`.
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                height,
                max_terrain,
            } => write!(
                f,
                "pool height {height} must be greater than the tallest terrain column ({max_terrain})"
            ),
            Self::NoWaterColumn { x, y } => {
                write!(f, "column ({x}, {y}) has no water above the floor")
            }
            Self::EmptyGrid => write!(f, "heightmap must have at least one column"),
            Self::RaggedHeightMap {
                row,
                expected,
                actual,
            } => write!(
                f,
                "heightmap row {row} has {actual} columns, expected {expected}"
            ),
            Self::PixelCountMismatch { expected, actual } => {
                write!(f, "expected {expected} heightmap pixels, got {actual}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from sound field propagation and the curve-length estimator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A distance was requested for a cell that is not water.
    TargetNotWater {
        /// The requested target.
        coord: Coord3,
    },
    /// A source or target coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
    },
    /// Propagation was requested before a source was placed.
    NoSource,
    /// The pool already has a source; a second one would corrupt the field.
    SourceAlreadyPlaced {
        /// Where the existing source sits.
        at: Coord3,
    },
    /// The curve estimator stopped making progress toward the target.
    Unroutable {
        /// The unreachable target.
        target: Coord3,
        /// Hops taken before giving up.
        hops: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetNotWater { coord } => {
                write!(f, "cell {coord} is not water; intensity is only defined for water")
            }
            Self::CoordOutOfBounds { coord } => write!(f, "coordinate {coord} is outside the grid"),
            Self::NoSource => write!(f, "no sound source has been placed"),
            Self::SourceAlreadyPlaced { at } => {
                write!(f, "a sound source is already placed at {at}")
            }
            Self::Unroutable { target, hops } => {
                write!(f, "no route to {target} after {hops} hops")
            }
        }
    }
}

impl Error for FieldError {}

/// Errors from moving the navigating agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavError {
    /// A finite step budget must be at least one.
    InvalidStepCount {
        /// The rejected budget.
        requested: u32,
    },
    /// No neighbour of the current cell carries an intensity. The field
    /// was never propagated, or the cell is sealed in by barriers.
    NoNavigableNeighbor {
        /// Where the agent was stuck.
        coord: Coord3,
    },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepCount { requested } => {
                write!(f, "step count must be positive, got {requested}")
            }
            Self::NoNavigableNeighbor { coord } => {
                write!(f, "no neighbour of {coord} carries an intensity")
            }
        }
    }
}

impl Error for NavError {}

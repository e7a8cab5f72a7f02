//! Intensity-following navigation.
//!
//! A [`Submarine`] greedily climbs the sound field: each step it moves to
//! the neighbour with the greatest intensity, and it stops when that
//! neighbour is no louder than where it already is (the source plateau).

use crate::placement::Placement;
use rand::Rng;
use sonar_core::{Coord3, GridError, NavError};
use sonar_space::VoxelGrid;

/// How far a [`Submarine::voyage`] may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepBudget {
    /// At most this many moves. Must be at least one.
    Limited(u32),
    /// Keep moving until the plateau is reached.
    ///
    /// Capped at the grid's cell count, which no greedy ascent can exceed
    /// without revisiting a cell.
    Unlimited,
}

/// Navigation state after a step or a voyage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Moved and may keep going.
    Moving,
    /// No neighbour is louder than the current cell.
    ///
    /// Usually the source plateau, where the neighbours match the source's
    /// own intensity. The curve estimator can also leave a local peak
    /// elsewhere, with every neighbour strictly quieter; the agent stops
    /// there too, away from the source.
    Reached,
    /// The budget ran out before reaching the plateau.
    StepBudgetExhausted,
}

/// Outcome of a [`Submarine::voyage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voyage {
    /// Every cell visited, starting cell first, final cell last.
    pub path: Vec<Coord3>,
    /// How the voyage ended: `Reached` or `StepBudgetExhausted`.
    pub state: NavState,
}

impl Voyage {
    /// Number of moves made.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// The navigating agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submarine {
    position: Coord3,
}

impl Submarine {
    /// An agent at an explicit position.
    pub fn new(position: Coord3) -> Self {
        Self { position }
    }

    /// Place an agent in `grid`, drawing unspecified axes from `rng`.
    pub fn place<R: Rng>(
        grid: &VoxelGrid,
        placement: &Placement,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let position = placement.resolve_agent(grid, rng)?;
        tracing::info!(%position, "submarine placed");
        Ok(Self { position })
    }

    /// Current position.
    pub fn position(&self) -> Coord3 {
        self.position
    }

    /// Take a single greedy step.
    ///
    /// Returns [`NavState::Reached`] without moving when the loudest
    /// neighbour is no louder than the current cell (the source plateau or
    /// a local peak), otherwise moves and returns [`NavState::Moving`].
    /// Among equally loud neighbours the last one in neighbour-slot order
    /// wins.
    pub fn step(&mut self, grid: &VoxelGrid) -> Result<NavState, NavError> {
        match next_cell(grid, self.position)? {
            Some(next) => {
                self.position = next;
                Ok(NavState::Moving)
            }
            None => Ok(NavState::Reached),
        }
    }

    /// Move until the plateau is reached or `budget` runs out.
    ///
    /// The agent only moves if the whole voyage succeeds; on error it stays
    /// where it started.
    ///
    /// # Errors
    ///
    /// - [`NavError::InvalidStepCount`] for `StepBudget::Limited(0)`.
    /// - [`NavError::NoNavigableNeighbor`] if the field around some cell on
    ///   the way was never propagated.
    pub fn voyage(&mut self, grid: &VoxelGrid, budget: StepBudget) -> Result<Voyage, NavError> {
        let mut remaining = match budget {
            StepBudget::Limited(0) => return Err(NavError::InvalidStepCount { requested: 0 }),
            StepBudget::Limited(n) => n as usize,
            StepBudget::Unlimited => grid.cell_count(),
        };

        let mut position = self.position;
        let mut path = vec![position];
        let state = loop {
            if remaining == 0 {
                break NavState::StepBudgetExhausted;
            }
            match next_cell(grid, position)? {
                Some(next) => {
                    position = next;
                    path.push(next);
                    remaining -= 1;
                }
                None => break NavState::Reached,
            }
        };

        self.position = position;
        tracing::info!(
            from = %path[0],
            to = %position,
            moves = path.len() - 1,
            ?state,
            "voyage finished"
        );
        Ok(Voyage { path, state })
    }
}

/// The loudest neighbour of `at`, or `None` if it is no louder than `at`.
fn next_cell(grid: &VoxelGrid, at: Coord3) -> Result<Option<Coord3>, NavError> {
    let cell = grid
        .cell_at(at)
        .ok_or(NavError::NoNavigableNeighbor { coord: at })?;

    // `max_by` keeps the last of several equal maxima.
    let (best, loudest) = cell
        .neighbours()
        .filter_map(|(_, idx)| {
            let n = grid.cell(idx);
            n.intensity().map(|v| (n.coord(), v))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or(NavError::NoNavigableNeighbor { coord: at })?;

    // Equal is the source plateau; quieter only happens at a local peak
    // left by the curve estimator, which counts as arrival too.
    if cell.intensity().is_some_and(|here| loudest <= here) {
        Ok(None)
    } else {
        Ok(Some(best))
    }
}

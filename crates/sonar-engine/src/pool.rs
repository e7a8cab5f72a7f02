//! The simulated pool.
//!
//! [`Pool`] is the user-facing API. It is built once from a
//! [`PoolConfig`], receives at most one sound source, and hosts one
//! submarine at a time.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self` and [`view()`](Pool::view)
//! borrows from `self`, so a renderer can never observe a half-written
//! field. Every operation is all-or-nothing: a failing call leaves the
//! grid, the source, the agent and the placement RNG as they were.

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sonar_core::{Coord3, FieldError, GridError, NavError};
use sonar_propagators::{FieldReport, Placement, SoundField, StepBudget, Submarine, Voyage};
use sonar_space::VoxelGrid;

use crate::config::{ConfigError, PoolConfig, SourceConfig};
use crate::view::PoolView;

// ── PoolError ──────────────────────────────────────────────────────

/// Errors from operating on a [`Pool`].
#[derive(Debug, PartialEq)]
pub enum PoolError {
    /// A source configuration was rejected.
    Config(ConfigError),
    /// Placement failed (no water in the chosen column).
    Grid(GridError),
    /// Seeding or propagating the sound field failed.
    Field(FieldError),
    /// Moving the submarine failed.
    Nav(NavError),
    /// [`Pool::move_agent`] was called before [`Pool::add_agent`].
    NoAgent,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Field(e) => write!(f, "field: {e}"),
            Self::Nav(e) => write!(f, "navigation: {e}"),
            Self::NoAgent => write!(f, "no submarine has been added"),
        }
    }
}

impl Error for PoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Field(e) => Some(e),
            Self::Nav(e) => Some(e),
            Self::NoAgent => None,
        }
    }
}

impl From<ConfigError> for PoolError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for PoolError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<FieldError> for PoolError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

impl From<NavError> for PoolError {
    fn from(e: NavError) -> Self {
        Self::Nav(e)
    }
}

// ── Pool ───────────────────────────────────────────────────────────

/// A body of water over carved terrain, with its sound field and agent.
///
/// # Example
///
/// ```
/// use sonar_engine::{Pool, PoolConfig, SourceConfig};
/// use sonar_propagators::{Placement, StepBudget, NavState};
/// use sonar_space::HeightMap;
///
/// let map = HeightMap::flat(3, 3, 0).unwrap();
/// let mut pool = Pool::new(PoolConfig::new(3, map)).unwrap();
/// pool.add_sound_source(&SourceConfig::at(1, 1, 1).with_enhanced_realism(false))
///     .unwrap();
/// pool.add_agent(&Placement::at(0, 0, 2)).unwrap();
/// let voyage = pool.move_agent(StepBudget::Unlimited).unwrap();
/// assert_eq!(voyage.state, NavState::Reached);
/// ```
pub struct Pool {
    grid: VoxelGrid,
    rng: ChaCha8Rng,
    seed: u64,
    parallel: bool,
    field: Option<FieldReport>,
    submarine: Option<Submarine>,
    trail: Vec<Coord3>,
}

impl Pool {
    /// Validate `config` and build the grid.
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = VoxelGrid::new(config.height, &config.heightmap)?;
        Ok(Self {
            grid,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            seed: config.seed,
            parallel: config.parallel,
            field: None,
            submarine: None,
            trail: Vec::new(),
        })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Seed the placement RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Summary of the propagation pass, once a source was added.
    pub fn field(&self) -> Option<&FieldReport> {
        self.field.as_ref()
    }

    /// Coordinate of the sound source, once added.
    pub fn source(&self) -> Option<Coord3> {
        self.grid.source_coord()
    }

    /// Current position of the submarine, once added.
    pub fn agent(&self) -> Option<Coord3> {
        self.submarine.map(|s| s.position())
    }

    /// Cells visited by the current submarine, starting cell first.
    pub fn trail(&self) -> &[Coord3] {
        &self.trail
    }

    /// Place the sound source and propagate its field to every water cell.
    ///
    /// Unspecified axes of `source.placement` are drawn from the pool's
    /// RNG; the default depth is the bottom of the chosen column.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Config`] for an invalid intensity.
    /// - [`PoolError::Field`] with [`FieldError::SourceAlreadyPlaced`] on a
    ///   second call, or any propagation failure.
    /// - [`PoolError::Grid`] if the chosen column holds no water.
    pub fn add_sound_source(&mut self, source: &SourceConfig) -> Result<FieldReport, PoolError> {
        source.validate()?;
        if let Some(at) = self.grid.source_coord() {
            return Err(FieldError::SourceAlreadyPlaced { at }.into());
        }
        let field = SoundField::builder()
            .intensity(source.intensity)
            .enhanced_realism(source.enhanced_realism)
            .parallel(self.parallel)
            .build()
            .map_err(|_| ConfigError::InvalidIntensity {
                value: source.intensity,
            })?;

        // Draws and seeding happen before propagation can fail; work on
        // copies and commit both together.
        let mut rng = self.rng.clone();
        let at = source.placement.resolve_source(&self.grid, &mut rng)?;
        let mut grid = self.grid.clone();
        let report = field.emit(&mut grid, at)?;
        self.grid = grid;
        self.rng = rng;
        self.field = Some(report);
        Ok(report)
    }

    /// Put a submarine in the pool, replacing any previous one.
    ///
    /// Unspecified axes are drawn from the pool's RNG; the default depth
    /// is drawn from `[waterline, height)`.
    pub fn add_agent(&mut self, placement: &Placement) -> Result<Coord3, PoolError> {
        let mut rng = self.rng.clone();
        let submarine = Submarine::place(&self.grid, placement, &mut rng)?;
        self.rng = rng;
        if let Some(previous) = self.submarine.replace(submarine) {
            tracing::debug!(previous = %previous.position(), "submarine replaced");
        }
        let position = submarine.position();
        self.trail = vec![position];
        Ok(position)
    }

    /// Move the submarine up the intensity gradient.
    ///
    /// The returned [`Voyage`] also becomes the pool's [`trail`](Self::trail).
    /// On error the submarine stays where it was.
    pub fn move_agent(&mut self, budget: StepBudget) -> Result<Voyage, PoolError> {
        let submarine = self.submarine.as_mut().ok_or(PoolError::NoAgent)?;
        let voyage = submarine.voyage(&self.grid, budget)?;
        self.trail.clone_from(&voyage.path);
        Ok(voyage)
    }

    /// Read-only view for renderers.
    pub fn view(&self) -> PoolView<'_> {
        PoolView::new(&self.grid, self.agent(), &self.trail)
    }
}

//! Pool configuration, validation, and error types.
//!
//! [`PoolConfig`] is the builder-input for constructing a [`Pool`](crate::Pool);
//! [`SourceConfig`] describes the sound source added to it afterwards.
//! Both are checked by `validate()` before anything is allocated.

use std::error::Error;
use std::fmt;

use sonar_core::GridError;
use sonar_propagators::sound_field::DEFAULT_INTENSITY;
use sonar_propagators::Placement;
use sonar_space::HeightMap;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`PoolConfig`] or [`SourceConfig`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid cannot be built from this configuration.
    Grid(GridError),
    /// Source intensity is NaN, infinite, zero, or negative.
    InvalidIntensity {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidIntensity { value } => {
                write!(f, "source intensity must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidIntensity { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── PoolConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Pool`](crate::Pool).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Vertical extent. Must exceed the tallest terrain column.
    pub height: u32,
    /// Terrain height per `(x, y)` column.
    pub heightmap: HeightMap,
    /// RNG seed for default placement. Default: 0.
    pub seed: u64,
    /// Resolve the sound field on the rayon thread pool. Default: false.
    pub parallel: bool,
}

impl PoolConfig {
    /// A pool `height` cells tall over `heightmap`, seed 0, sequential.
    pub fn new(height: u32, heightmap: HeightMap) -> Self {
        Self {
            height,
            heightmap,
            seed: 0,
            parallel: false,
        }
    }

    /// A pool exactly one layer taller than the tallest column.
    pub fn fitted(heightmap: HeightMap) -> Self {
        let height = heightmap.max_height().saturating_add(1);
        Self::new(height, heightmap)
    }

    /// Set the placement seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable parallel propagation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate structural invariants without building the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_terrain = self.heightmap.max_height();
        if self.height <= max_terrain {
            return Err(ConfigError::Grid(GridError::InvalidDimension {
                height: self.height,
                max_terrain,
            }));
        }
        Ok(())
    }
}

// ── SourceConfig ───────────────────────────────────────────────────

/// Configuration of the sound source added by
/// [`Pool::add_sound_source`](crate::Pool::add_sound_source).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceConfig {
    /// Source strength. Default: 1000.
    pub intensity: f64,
    /// Where to put it. Default: every axis drawn, resting on the bottom.
    pub placement: Placement,
    /// Full-volume candidate scan in the curve estimator. Default: true.
    pub enhanced_realism: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            placement: Placement::random(),
            enhanced_realism: true,
        }
    }
}

impl SourceConfig {
    /// Default source at an explicit position.
    pub fn at(x: u32, y: u32, z: u32) -> Self {
        Self {
            placement: Placement::at(x, y, z),
            ..Self::default()
        }
    }

    /// Set the source strength.
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Enable or disable the full-volume candidate scan.
    pub fn with_enhanced_realism(mut self, enabled: bool) -> Self {
        self.enhanced_realism = enabled;
        self
    }

    /// Reject non-finite or non-positive intensities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.intensity.is_finite() || self.intensity <= 0.0 {
            return Err(ConfigError::InvalidIntensity {
                value: self.intensity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_test_utils::fixtures;

    #[test]
    fn fitted_is_one_above_tallest_column() {
        let cfg = PoolConfig::fitted(fixtures::basin(5, 3));
        assert_eq!(cfg.height, 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_height_at_terrain() {
        let cfg = PoolConfig::new(3, fixtures::basin(5, 3));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::InvalidDimension {
                height: 3,
                max_terrain: 3
            }))
        );
    }

    #[test]
    fn builder_setters() {
        let cfg = PoolConfig::new(4, fixtures::flat(2, 2, 0))
            .with_seed(7)
            .with_parallel(true);
        assert_eq!(cfg.seed, 7);
        assert!(cfg.parallel);
    }

    #[test]
    fn source_defaults() {
        let src = SourceConfig::default();
        assert_eq!(src.intensity, 1000.0);
        assert_eq!(src.placement, Placement::random());
        assert!(src.enhanced_realism);
        assert!(src.validate().is_ok());
    }

    #[test]
    fn source_rejects_bad_intensity() {
        for value in [0.0, -1.0, f64::INFINITY] {
            let src = SourceConfig::default().with_intensity(value);
            assert_eq!(src.validate(), Err(ConfigError::InvalidIntensity { value }));
        }
        assert!(SourceConfig::default()
            .with_intensity(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn config_error_chains_grid_error() {
        let err = ConfigError::from(GridError::EmptyGrid);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("grid: "));
        assert!(ConfigError::InvalidIntensity { value: 0.0 }.source().is_none());
    }
}

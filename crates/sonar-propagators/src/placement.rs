//! Resolving partially specified coordinates against a grid.
//!
//! Any axis left unspecified (or specified outside its valid range) is
//! drawn uniformly with the caller's random number generator. The column
//! is chosen first; the vertical range then depends on that column's
//! waterline.

use rand::Rng;
use sonar_core::{Coord3, GridError};
use sonar_space::VoxelGrid;

/// Requested coordinates; `None` means "draw at random".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Requested x.
    pub x: Option<u32>,
    /// Requested y.
    pub y: Option<u32>,
    /// Requested z.
    pub z: Option<u32>,
}

impl Placement {
    /// Every axis drawn at random.
    pub fn random() -> Self {
        Self::default()
    }

    /// Every axis fixed.
    pub fn at(x: u32, y: u32, z: u32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Fix x.
    pub fn with_x(mut self, x: u32) -> Self {
        self.x = Some(x);
        self
    }

    /// Fix y.
    pub fn with_y(mut self, y: u32) -> Self {
        self.y = Some(y);
        self
    }

    /// Fix z.
    pub fn with_z(mut self, z: u32) -> Self {
        self.z = Some(z);
        self
    }

    /// Resolve a sound source position.
    ///
    /// Unless a valid z is given the source lies on the bottom: the
    /// column's waterline.
    pub fn resolve_source<R: Rng>(
        &self,
        grid: &VoxelGrid,
        rng: &mut R,
    ) -> Result<Coord3, GridError> {
        let (x, y, floor) = self.resolve_column(grid, rng)?;
        let z = self.valid_z(grid, floor).unwrap_or(floor);
        Ok(Coord3::new(x, y, z))
    }

    /// Resolve an agent position.
    ///
    /// Unless a valid z is given the depth is drawn from
    /// `[waterline, height)`.
    pub fn resolve_agent<R: Rng>(
        &self,
        grid: &VoxelGrid,
        rng: &mut R,
    ) -> Result<Coord3, GridError> {
        let (x, y, floor) = self.resolve_column(grid, rng)?;
        let z = match self.valid_z(grid, floor) {
            Some(z) => z,
            None => rng.random_range(floor..grid.height()),
        };
        Ok(Coord3::new(x, y, z))
    }

    fn resolve_column<R: Rng>(
        &self,
        grid: &VoxelGrid,
        rng: &mut R,
    ) -> Result<(u32, u32, u32), GridError> {
        let x = pick_axis("x", self.x, grid.length(), rng);
        let y = pick_axis("y", self.y, grid.width(), rng);
        let floor = grid.waterline(x, y)?;
        Ok((x, y, floor))
    }

    fn valid_z(&self, grid: &VoxelGrid, floor: u32) -> Option<u32> {
        let z = self.z?;
        if (floor..grid.height()).contains(&z) {
            Some(z)
        } else {
            tracing::warn!(
                z,
                floor,
                height = grid.height(),
                "requested depth out of range, using default"
            );
            None
        }
    }
}

fn pick_axis<R: Rng>(axis: &str, requested: Option<u32>, len: u32, rng: &mut R) -> u32 {
    match requested {
        Some(v) if v < len => v,
        Some(v) => {
            tracing::warn!(axis, value = v, len, "requested coordinate out of range, drawing one");
            rng.random_range(0..len)
        }
        None => rng.random_range(0..len),
    }
}

//! What a voxel is made of.

/// Material of a single cell.
///
/// Every cell starts as [`Water`](Material::Water). Terrain carving flips
/// cells below the heightmap to [`Terrain`](Material::Terrain), and placing
/// the sound source flips exactly one water cell to
/// [`Source`](Material::Source). No transition ever returns a cell to water.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Material {
    /// Passable water; carries an intensity once the field is propagated.
    #[default]
    Water,
    /// Seabed; an impassable barrier that never carries intensity.
    Terrain,
    /// The emitting voxel. A barrier like terrain, but it carries the
    /// fixed source intensity.
    Source,
}

impl Material {
    /// `true` only for [`Material::Water`].
    pub fn is_water(self) -> bool {
        matches!(self, Material::Water)
    }
}

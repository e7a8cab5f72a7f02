//! The voxel grid: dense cell storage, the 26-neighbour graph, and
//! terrain carving.

use crate::cell::Cell;
use crate::heightmap::HeightMap;
use smallvec::SmallVec;
use sonar_core::{
    CellIndex, Coord3, FieldError, GridError, Material, NEIGHBOUR_COUNT, NEIGHBOUR_OFFSETS,
};

/// A body of water shaped by a heightmap.
///
/// Cells are stored layer-major (see [`CellIndex`]), so each Z layer is a
/// contiguous slice. Construction happens in three passes:
///
/// 1. every cell is created as water;
/// 2. the 26-neighbour graph is linked for every cell;
/// 3. terrain is carved: cells with `z < h(x, y)` become terrain.
///
/// Carving after linking keeps terrain cells in the graph as barriers, so
/// water and terrain cells share the same neighbour layout.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    length: u32,
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    terrain: HeightMap,
    source: Option<CellIndex>,
}

impl VoxelGrid {
    /// Build a grid `heightmap.length() x heightmap.width() x height`.
    ///
    /// Returns `Err(GridError::InvalidDimension)` unless `height` strictly
    /// exceeds the tallest column. Cost is `O(length * width * height)`.
    pub fn new(height: u32, heightmap: &HeightMap) -> Result<Self, GridError> {
        let max_terrain = heightmap.max_height();
        if height <= max_terrain {
            return Err(GridError::InvalidDimension {
                height,
                max_terrain,
            });
        }
        let length = heightmap.length();
        let width = heightmap.width();
        let total = (length as usize)
            .checked_mul(width as usize)
            .and_then(|n| n.checked_mul(height as usize))
            .ok_or_else(|| GridError::CoordOutOfBounds {
                coord: Coord3::new(length, width, height),
                bounds: "cell count overflows usize".into(),
            })?;

        let mut cells = Vec::with_capacity(total);
        for z in 0..height {
            for y in 0..width {
                for x in 0..length {
                    cells.push(Cell::water(Coord3::new(x, y, z)));
                }
            }
        }

        let mut grid = Self {
            length,
            width,
            height,
            cells,
            terrain: heightmap.clone(),
            source: None,
        };
        grid.link_neighbours();
        grid.carve_terrain();

        tracing::info!(
            length,
            width,
            height,
            water_cells = grid.water_cell_count(),
            "voxel grid built"
        );
        Ok(grid)
    }

    fn link_neighbours(&mut self) {
        for i in 0..self.cells.len() {
            let coord = self.cells[i].coord;
            let mut slots = [None; NEIGHBOUR_COUNT];
            for (slot, &offset) in NEIGHBOUR_OFFSETS.iter().enumerate() {
                slots[slot] = coord
                    .checked_offset(offset, self.length, self.width, self.height)
                    .map(|n| CellIndex(self.flat_index(n)));
            }
            self.cells[i].neighbours = slots;
            if coord.x + 1 == self.length && coord.y + 1 == self.width {
                tracing::debug!(layer = coord.z, "neighbour layer linked");
            }
        }
    }

    fn carve_terrain(&mut self) {
        for y in 0..self.width {
            for x in 0..self.length {
                let h = self.terrain.get(x, y).unwrap_or(0);
                for z in 0..h {
                    let i = self.flat_index(Coord3::new(x, y, z));
                    self.cells[i].material = Material::Terrain;
                }
            }
        }
    }

    fn flat_index(&self, c: Coord3) -> usize {
        (c.z as usize * self.width as usize + c.y as usize) * self.length as usize + c.x as usize
    }

    /// Extent along x.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Extent along y.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Vertical extent.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, terrain included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cells per Z layer.
    pub fn layer_len(&self) -> usize {
        self.length as usize * self.width as usize
    }

    /// The heightmap the grid was carved from.
    pub fn terrain(&self) -> &HeightMap {
        &self.terrain
    }

    /// `true` if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord3) -> bool {
        coord.x < self.length && coord.y < self.width && coord.z < self.height
    }

    /// Dense index of `coord`, or `None` outside the grid.
    pub fn index_of(&self, coord: Coord3) -> Option<CellIndex> {
        self.contains(coord).then(|| CellIndex(self.flat_index(coord)))
    }

    /// Like [`index_of`](Self::index_of), with a descriptive error.
    pub fn checked_index(&self, coord: Coord3) -> Result<CellIndex, GridError> {
        self.index_of(coord).ok_or_else(|| GridError::CoordOutOfBounds {
            coord,
            bounds: format!(
                "[0, {}) x [0, {}) x [0, {})",
                self.length, self.width, self.height
            ),
        })
    }

    /// All cells in canonical (z, then y, then x) order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this grid.
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index.0]
    }

    /// The cell at `coord`, or `None` outside the grid.
    pub fn cell_at(&self, coord: Coord3) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i.0])
    }

    /// One Z layer, row-major by y. Empty if `z` is out of range.
    pub fn layer(&self, z: u32) -> &[Cell] {
        if z >= self.height {
            return &[];
        }
        let n = self.layer_len();
        let start = z as usize * n;
        &self.cells[start..start + n]
    }

    /// Material at `coord`, or `None` outside the grid.
    pub fn material(&self, coord: Coord3) -> Option<Material> {
        self.cell_at(coord).map(Cell::material)
    }

    /// `true` if `coord` is inside the grid and holds water.
    pub fn is_water(&self, coord: Coord3) -> bool {
        self.material(coord).is_some_and(Material::is_water)
    }

    /// Intensity at `coord`, if inside the grid and set.
    pub fn intensity(&self, coord: Coord3) -> Option<f64> {
        self.cell_at(coord).and_then(Cell::intensity)
    }

    /// Coordinates of the present neighbours of `coord`, in slot order.
    pub fn neighbour_coords(&self, coord: Coord3) -> SmallVec<[Coord3; NEIGHBOUR_COUNT]> {
        match self.cell_at(coord) {
            Some(cell) => cell
                .neighbours()
                .map(|(_, idx)| self.cells[idx.0].coord)
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// Number of water cells.
    pub fn water_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_water()).count()
    }

    /// Lowest water cell of column `(x, y)`, scanning upward from `z = 1`.
    ///
    /// The floor layer is never considered. Returns
    /// `Err(GridError::NoWaterColumn)` if the scan leaves the grid.
    pub fn waterline(&self, x: u32, y: u32) -> Result<u32, GridError> {
        if x >= self.length || y >= self.width {
            return Err(GridError::CoordOutOfBounds {
                coord: Coord3::new(x, y, 0),
                bounds: format!("[0, {}) x [0, {})", self.length, self.width),
            });
        }
        (1..self.height)
            .find(|&z| self.is_water(Coord3::new(x, y, z)))
            .ok_or(GridError::NoWaterColumn { x, y })
    }

    /// The designated sound source, once placed.
    pub fn source(&self) -> Option<CellIndex> {
        self.source
    }

    /// Coordinate of the sound source, once placed.
    pub fn source_coord(&self) -> Option<Coord3> {
        self.source.map(|i| self.cells[i.0].coord)
    }

    /// Turn the water cell at `coord` into the sound source with a fixed
    /// `intensity`.
    ///
    /// The source is a barrier (no longer water) that still carries
    /// intensity. Fails if a source already exists or the cell is not water.
    pub fn place_source(&mut self, coord: Coord3, intensity: f64) -> Result<CellIndex, FieldError> {
        if let Some(at) = self.source_coord() {
            return Err(FieldError::SourceAlreadyPlaced { at });
        }
        let idx = self
            .index_of(coord)
            .ok_or(FieldError::CoordOutOfBounds { coord })?;
        let cell = &mut self.cells[idx.0];
        if !cell.is_water() {
            return Err(FieldError::TargetNotWater { coord });
        }
        cell.material = Material::Source;
        cell.intensity = Some(intensity);
        self.source = Some(idx);
        Ok(idx)
    }

    /// Record the intensity of a water cell.
    ///
    /// Returns `Err(FieldError::TargetNotWater)` for terrain and for the
    /// source, whose intensity is fixed once placed.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this grid.
    pub fn set_intensity(&mut self, index: CellIndex, intensity: f64) -> Result<(), FieldError> {
        let cell = &mut self.cells[index.0];
        if !cell.is_water() {
            return Err(FieldError::TargetNotWater { coord: cell.coord });
        }
        cell.intensity = Some(intensity);
        Ok(())
    }
}

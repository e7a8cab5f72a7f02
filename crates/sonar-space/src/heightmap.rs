//! Per-column terrain heights.

use sonar_core::GridError;

/// Terrain height for every `(x, y)` column of a pool.
///
/// Stored row-major by `y`: `heights[y * length + x]`. A column of height
/// `h` has terrain for `z` in `[0, h)` and water above.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    length: u32,
    width: u32,
    heights: Vec<u32>,
}

impl HeightMap {
    /// Build from rows indexed by `y`, each holding one height per `x`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for no rows or empty rows and
    /// `Err(GridError::RaggedHeightMap)` if rows differ in length.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::EmptyGrid)?.as_ref().len();
        if first == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut heights = Vec::with_capacity(first * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != first {
                return Err(GridError::RaggedHeightMap {
                    row,
                    expected: first,
                    actual: values.len(),
                });
            }
            heights.extend_from_slice(values);
        }
        Ok(Self {
            length: dim(first)?,
            width: dim(rows.len())?,
            heights,
        })
    }

    /// Build a `length x width` map by evaluating `f(x, y)` per column.
    pub fn from_fn(
        length: u32,
        width: u32,
        mut f: impl FnMut(u32, u32) -> u32,
    ) -> Result<Self, GridError> {
        if length == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut heights = Vec::with_capacity(length as usize * width as usize);
        for y in 0..width {
            for x in 0..length {
                heights.push(f(x, y));
            }
        }
        Ok(Self {
            length,
            width,
            heights,
        })
    }

    /// A map where every column has the same height.
    pub fn flat(length: u32, width: u32, height: u32) -> Result<Self, GridError> {
        Self::from_fn(length, width, |_, _| height)
    }

    /// Build from a decoded grayscale image: one 8-bit luminance value per
    /// column, row-major, the value being the column height.
    ///
    /// Returns `Err(GridError::PixelCountMismatch)` unless
    /// `pixels.len() == length * width`.
    pub fn from_grayscale(length: u32, width: u32, pixels: &[u8]) -> Result<Self, GridError> {
        let expected = length as usize * width as usize;
        if pixels.len() != expected {
            return Err(GridError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Self::from_fn(length, width, |x, y| {
            u32::from(pixels[y as usize * length as usize + x as usize])
        })
    }

    /// Extent along x.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Extent along y.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Terrain height of column `(x, y)`, or `None` outside the map.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.length || y >= self.width {
            return None;
        }
        self.heights
            .get(y as usize * self.length as usize + x as usize)
            .copied()
    }

    /// Height of the tallest column.
    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// Raw heights, row-major by `y`.
    pub fn as_slice(&self) -> &[u32] {
        &self.heights
    }
}

fn dim(n: usize) -> Result<u32, GridError> {
    u32::try_from(n).map_err(|_| GridError::CoordOutOfBounds {
        coord: Default::default(),
        bounds: format!("heightmap dimension {n} exceeds u32::MAX"),
    })
}

//! Voxel coordinates, offsets, and dense cell indices.

use std::fmt;

/// Dense index of a cell inside a grid's flat storage.
///
/// Storage is layer-major: `index = z * (length * width) + y * length + x`,
/// so every Z layer is one contiguous run of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub usize);

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CellIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Integer position of a voxel: `x` along the length, `y` along the
/// width, `z` upward from the pool floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coord3 {
    /// Position along the length axis.
    pub x: u32,
    /// Position along the width axis.
    pub y: u32,
    /// Height above the pool floor.
    pub z: u32,
}

impl Coord3 {
    /// Create a coordinate from its three components.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Sum of absolute per-axis differences.
    pub fn manhattan(self, other: Coord3) -> u32 {
        self.xy_manhattan(other) + self.z.abs_diff(other.z)
    }

    /// Manhattan distance ignoring the vertical axis.
    pub fn xy_manhattan(self, other: Coord3) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance between two voxel centres.
    pub fn euclidean(self, other: Coord3) -> f64 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        let dz = f64::from(self.z.abs_diff(other.z));
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Apply `offset`, returning `None` if the result leaves
    /// `[0, length) x [0, width) x [0, height)`.
    pub fn checked_offset(
        self,
        offset: Offset3,
        length: u32,
        width: u32,
        height: u32,
    ) -> Option<Coord3> {
        let x = shift_axis(self.x, offset.dx, length)?;
        let y = shift_axis(self.y, offset.dy, width)?;
        let z = shift_axis(self.z, offset.dz, height)?;
        Some(Coord3 { x, y, z })
    }
}

fn shift_axis(value: u32, delta: i32, len: u32) -> Option<u32> {
    let shifted = value.checked_add_signed(delta)?;
    (shifted < len).then_some(shifted)
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(u32, u32, u32)> for Coord3 {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self { x, y, z }
    }
}

impl From<Coord3> for (u32, u32, u32) {
    fn from(c: Coord3) -> Self {
        (c.x, c.y, c.z)
    }
}

/// A unit step in 3D: each component is -1, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset3 {
    /// Step along the length axis.
    pub dx: i32,
    /// Step along the width axis.
    pub dy: i32,
    /// Vertical step.
    pub dz: i32,
}

impl Offset3 {
    /// Create an offset from its three components.
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// The offset pointing the opposite way.
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }

    /// Number of axes this offset changes (1 = face, 2 = edge, 3 = corner).
    pub fn axes_changed(self) -> u32 {
        u32::from(self.dx != 0) + u32::from(self.dy != 0) + u32::from(self.dz != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn manhattan_and_xy_split() {
        let a = Coord3::new(1, 5, 2);
        let b = Coord3::new(4, 3, 7);
        assert_eq!(a.xy_manhattan(b), 5);
        assert_eq!(a.manhattan(b), 10);
    }

    #[test]
    fn euclidean_of_corner_step_is_sqrt3() {
        let d = Coord3::new(1, 1, 1).euclidean(Coord3::new(0, 0, 0));
        assert!((d - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn checked_offset_rejects_underflow_and_overflow() {
        let origin = Coord3::new(0, 0, 0);
        assert_eq!(origin.checked_offset(Offset3::new(-1, 0, 0), 3, 3, 3), None);
        let far = Coord3::new(2, 2, 2);
        assert_eq!(far.checked_offset(Offset3::new(0, 0, 1), 3, 3, 3), None);
        assert_eq!(
            far.checked_offset(Offset3::new(-1, -1, -1), 3, 3, 3),
            Some(Coord3::new(1, 1, 1))
        );
    }

    #[test]
    fn display_is_tuple_like() {
        assert_eq!(Coord3::new(3, 0, 9).to_string(), "(3, 0, 9)");
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(
            ax in 0u32..50, ay in 0u32..50, az in 0u32..50,
            bx in 0u32..50, by in 0u32..50, bz in 0u32..50,
        ) {
            let a = Coord3::new(ax, ay, az);
            let b = Coord3::new(bx, by, bz);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(a.euclidean(b) <= f64::from(a.manhattan(b)) + 1e-9);
        }
    }
}

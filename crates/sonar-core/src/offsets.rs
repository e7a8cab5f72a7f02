//! The fixed 26-direction neighbourhood.
//!
//! Slot order matters: navigation breaks intensity ties in favour of the
//! last slot, so this table must never be reordered.

use crate::id::Offset3;

/// Number of neighbour slots per cell.
pub const NEIGHBOUR_COUNT: usize = 26;

/// Every `{-1, 0, 1}^3` offset except the zero offset: six faces first,
/// then twelve edges, then eight corners.
pub const NEIGHBOUR_OFFSETS: [Offset3; NEIGHBOUR_COUNT] = [
    Offset3::new(1, 0, 0),
    Offset3::new(-1, 0, 0),
    Offset3::new(0, 0, 1),
    Offset3::new(0, 0, -1),
    Offset3::new(0, 1, 0),
    Offset3::new(0, -1, 0),
    Offset3::new(1, 0, -1),
    Offset3::new(1, 0, 1),
    Offset3::new(1, 1, 0),
    Offset3::new(1, -1, 0),
    Offset3::new(-1, 0, -1),
    Offset3::new(-1, 0, 1),
    Offset3::new(-1, 1, 0),
    Offset3::new(-1, -1, 0),
    Offset3::new(0, 1, -1),
    Offset3::new(0, 1, 1),
    Offset3::new(0, -1, 1),
    Offset3::new(0, -1, -1),
    Offset3::new(1, 1, -1),
    Offset3::new(1, 1, 1),
    Offset3::new(1, -1, 1),
    Offset3::new(1, -1, -1),
    Offset3::new(-1, 1, -1),
    Offset3::new(-1, 1, 1),
    Offset3::new(-1, -1, 1),
    Offset3::new(-1, -1, -1),
];

/// Slot holding the reverse of the offset in `slot`.
///
/// Returns `None` for an out-of-range slot.
pub fn opposite_slot(slot: usize) -> Option<usize> {
    let reversed = NEIGHBOUR_OFFSETS.get(slot)?.reversed();
    NEIGHBOUR_OFFSETS.iter().position(|&o| o == reversed)
}

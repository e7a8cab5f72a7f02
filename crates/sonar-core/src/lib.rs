//! Core types for the Sonar voxel pool simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! voxel coordinates and offsets, the fixed 26-direction neighbourhood,
//! cell materials, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod material;
pub mod offsets;

pub use error::{FieldError, GridError, NavError};
pub use id::{CellIndex, Coord3, Offset3};
pub use material::Material;
pub use offsets::{opposite_slot, NEIGHBOUR_COUNT, NEIGHBOUR_OFFSETS};

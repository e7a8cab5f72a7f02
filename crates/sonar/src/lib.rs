//! Sonar: a voxel pool simulation where a submarine homes in on a sound
//! source by climbing an obstacle-aware intensity field.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sonar sub-crates. For most users, adding `sonar` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sonar::prelude::*;
//!
//! // A 3x3 flat-bottomed pool, three layers deep.
//! let map = HeightMap::flat(3, 3, 0).unwrap();
//! let mut pool = Pool::new(PoolConfig::new(3, map).with_seed(42)).unwrap();
//!
//! // Source in the middle; every water cell receives 1000 / distance².
//! let source = SourceConfig::at(1, 1, 1).with_enhanced_realism(false);
//! let report = pool.add_sound_source(&source).unwrap();
//! assert_eq!(report.resolved_cells, 26);
//!
//! // A submarine in a top corner climbs the field to the source.
//! pool.add_agent(&Placement::at(0, 0, 2)).unwrap();
//! let voyage = pool.move_agent(StepBudget::Unlimited).unwrap();
//! assert_eq!(voyage.state, NavState::Reached);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sonar-core` | Coordinates, materials, neighbour offsets, errors |
//! | [`space`] | `sonar-space` | Heightmaps and the voxel grid |
//! | [`propagators`] | `sonar-propagators` | Envelope, curve estimator, sound field, submarine |
//! | [`engine`] | `sonar-engine` | Pool orchestration, configuration, renderer view |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`sonar-core`).
///
/// Contains [`types::Coord3`], [`types::Material`], the 26-direction
/// offset table and the error taxonomy.
pub use sonar_core as types;

/// Heightmaps and the voxel grid (`sonar-space`).
pub use sonar_space as space;

/// Field propagation and navigation (`sonar-propagators`).
///
/// Includes [`propagators::SoundField`], [`propagators::shortest_curve`]
/// and [`propagators::Submarine`].
pub use sonar_propagators as propagators;

/// Pool orchestration (`sonar-engine`).
///
/// [`engine::Pool`] owns the grid, the seeded RNG, the source and the
/// submarine; [`engine::PoolView`] is the read-only renderer surface.
pub use sonar_engine as engine;

/// Common imports for typical Sonar usage.
///
/// ```rust
/// use sonar::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sonar_core::{Coord3, Material};

    // Errors
    pub use sonar_core::{FieldError, GridError, NavError};

    // Space
    pub use sonar_space::{HeightMap, VoxelGrid};

    // Propagators
    pub use sonar_propagators::{
        FieldReport, NavState, Placement, SoundField, StepBudget, Submarine, Voyage,
    };

    // Engine
    pub use sonar_engine::{ConfigError, Pool, PoolConfig, PoolError, PoolView, SourceConfig};
}

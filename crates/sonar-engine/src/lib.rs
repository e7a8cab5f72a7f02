//! Pool orchestration for Sonar simulations.
//!
//! A [`Pool`] owns the voxel grid, the seeded random number generator
//! used for default placement, the sound source and the submarine. It is
//! built from a validated [`PoolConfig`] and exposes a read-only
//! [`PoolView`] for renderers.
//!
//! Phases are strictly sequential: build the pool, add the sound source
//! (which propagates the field), then add and move the agent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pool;
pub mod view;

pub use config::{ConfigError, PoolConfig, SourceConfig};
pub use pool::{Pool, PoolError};
pub use view::PoolView;

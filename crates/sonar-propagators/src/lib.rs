//! Sound propagation and navigation for Sonar pools.
//!
//! # Pipeline
//!
//! 1. [`SoundField::seed`] turns one water cell into the source.
//! 2. [`SoundField::propagate`] scans the free-space [`Envelope`], then
//!    estimates a [`shortest_curve`] from the source to every water cell
//!    and stores `intensity = source / length²`.
//! 3. A [`Submarine`] climbs the resulting intensity field one neighbour
//!    at a time until it reaches the source plateau.
//!
//! [`Placement`] resolves partially specified coordinates against a grid
//! with an injected random number generator.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod envelope;
pub mod navigator;
pub mod placement;
pub mod shortest_curve;
pub mod sound_field;

pub use envelope::Envelope;
pub use navigator::{NavState, StepBudget, Submarine, Voyage};
pub use placement::Placement;
pub use shortest_curve::{shortest_curve, ShortestCurve};
pub use sound_field::{FieldReport, SoundField, SoundFieldBuilder};

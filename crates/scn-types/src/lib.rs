//! Foundation types for the screenplay diff engine.
//!
//! This crate provides the document model shared by the parser, the
//! comparator, and the command line front end. Every other `scn` crate
//! depends on `scn-types`.
//!
//! # Key Types
//!
//! - [`Line`] — One raw source line and its 1-based position
//! - [`Scene`] — A numbered, headered segment of a screenplay
//! - [`SceneNumber`] — The numeral token of a scene header, totally ordered
//! - [`SceneHash`] — Content digest used to match scenes across renumbering

pub mod error;
pub mod hash;
pub mod line;
pub mod scene;
pub mod scene_number;

pub use error::TypeError;
pub use hash::SceneHash;
pub use line::Line;
pub use scene::Scene;
pub use scene_number::SceneNumber;

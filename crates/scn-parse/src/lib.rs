//! Scene parser for the screenplay diff engine.
//!
//! Splits raw screenplay text into an ordered list of [`Scene`]s and
//! computes each scene's content hash. A scene starts at a header line of
//! the form `#<digits>. <location>` and runs until the next header or the
//! end of the document. Parsing never fails: text before the first header
//! is dropped and malformed headers are treated as body text.
//!
//! [`Scene`]: scn_types::Scene

pub mod document;
pub mod hasher;
pub mod parser;

pub use document::{find_scene, render_scenes, scene_at_line};
pub use hasher::{normalize_content, ContentHasher};
pub use parser::{assemble_scene, parse_header, parse_scenes, SceneHeader};

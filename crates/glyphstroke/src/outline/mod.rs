//! Outline model: points, segments, paths, and closed sub-paths.
//!
//! Purpose
//! - Typed line / quadratic segments with the endpoint tangents the cusp
//!   detector needs.
//! - `break_path` partitions one glyph path into maximal continuous runs.
//!
//! Code cross-refs: `cusp::detect`, `cusp::merge`, `analysis::analyze_glyph`

mod decompose;
pub mod rand;
mod types;

pub use decompose::break_path;
pub use types::{point, signed_angle, Path, Point, Segment, SubPath};

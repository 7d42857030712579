//! Stroke reconstruction from flattened glyph outlines.
//!
//! Pipeline
//! - `outline`: segment/path model and the decomposer that breaks one path
//!   into closed sub-paths.
//! - `cusp`: detection of sharp vertices, merging of near-duplicate cusps,
//!   and the pairwise crossing test that connects cusps across the shape.
//! - `analysis`: the entry point running the whole pipeline for a glyph (or a
//!   batch of glyphs) under an explicit `StrokeCfg`.
//!
//! API Policy
//! - The crate backs the `glyphstroke` CLI. There is no stable public API;
//!   prefer the re-exports in `api` and `prelude`.

pub mod analysis;
pub mod api;
pub mod cfg;
pub mod cusp;
pub mod error;
pub mod outline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use analysis::{analyze_batch, analyze_glyph, GlyphInput, GlyphStrokes};
pub use cfg::StrokeCfg;
pub use error::StrokeError;
pub use outline::{Point, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze_batch, analyze_glyph, GlyphInput, GlyphStrokes};
    pub use crate::cfg::StrokeCfg;
    pub use crate::cusp::{ConnectionEdge, Cusp, CuspId, CuspRecord};
    pub use crate::error::StrokeError;
    pub use crate::outline::{break_path, point, Path, Point, Segment, SubPath};
}

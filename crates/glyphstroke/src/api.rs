//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is a convenience surface for the CLI, benches, and tests. Breaking
//!   changes are allowed.

// Outline model
pub use crate::outline::rand::{draw_outline, ContourCount, OutlineCfg, ReplayToken, VertexCount};
pub use crate::outline::{break_path, point, signed_angle, Path, Point, Segment, SubPath};
// Cusp pipeline
pub use crate::cusp::{
    connect, connect_cusps, crossing_features, cusp_at, detect_cusps, merge_cusps, try_connect,
    try_merge, vertex_tangents, ConnectionEdge, CrossingFeatures, Cusp, CuspId, CuspRecord,
};
// Entry points
pub use crate::analysis::{analyze_batch, analyze_glyph, find_cusps, GlyphInput, GlyphStrokes};
pub use crate::cfg::{StrokeCfg, CROSSING_ANGLE};
pub use crate::error::StrokeError;

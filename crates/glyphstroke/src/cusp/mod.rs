//! Cusps: sharp outline vertices and the strokes connecting them.
//!
//! Purpose
//! - `detect`: per sub-path, tangent vectors and signed turning angle at each
//!   vertex; keep vertices turning more than `min_cusp_angle`.
//! - `merge`: collapse cusps that are close both in the plane and along the
//!   outline into one representative.
//! - `connect`: heuristic crossing test deciding which cusp pairs are joined
//!   by a stroke through the filled shape.
//!
//! Cusps are `Copy` values that name their vertex by `CuspId` (sub-path index,
//! segment index), so every stage builds a fresh list instead of mutating
//! shared objects.
//!
//! Code cross-refs: `outline::{SubPath, signed_angle}`, `cfg::StrokeCfg`

mod connect;
mod detect;
mod merge;
mod types;

pub use connect::{connect, connect_cusps, crossing_features, try_connect, CrossingFeatures};
pub use detect::{cusp_at, detect_cusps, vertex_tangents};
pub use merge::{merge_cusps, try_merge};
pub use types::{ConnectionEdge, Cusp, CuspId, CuspRecord};

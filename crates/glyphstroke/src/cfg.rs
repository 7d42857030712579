//! Tunables for stroke extraction.
//!
//! Policy
//! - Distance/angle thresholds that callers reasonably tune per font live in
//!   `StrokeCfg` and are passed explicitly into every entry point.
//! - The crossing-classifier thresholds are fixed constants; changing them
//!   changes which strokes are found for every glyph.

use std::f64::consts::PI;

/// Angular threshold of the crossing classifier (radians).
pub const CROSSING_ANGLE: f64 = 0.3 * PI;

/// Stroke extraction configuration (font units / radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeCfg {
    /// Cusps farther apart than this are never connected.
    pub max_crossing_distance: f64,
    /// Bound on both the straight-line and the along-outline distance of two
    /// cusps that get merged.
    pub max_cusp_merge_distance: f64,
    /// A vertex is a cusp only if its |turning angle| exceeds this.
    pub min_cusp_angle: f64,
}

impl Default for StrokeCfg {
    fn default() -> Self {
        Self {
            max_crossing_distance: 64.0,
            max_cusp_merge_distance: 15.0,
            min_cusp_angle: 0.1 * PI,
        }
    }
}

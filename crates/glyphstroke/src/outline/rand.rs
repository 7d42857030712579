//! Random glyph-like outlines (star-shaped contours + replay tokens).
//!
//! Purpose
//! - Deterministic sampler of closed outlines for property tests and benches.
//!   Contours are star-shaped polygons whose edges are sometimes replaced by
//!   quadratic Beziers bulging in or out, so both convex and concave cusps
//!   appear.
//!
//! Model
//! - Contour `k` is centred at `(k * contour_spacing, 0)`; its `n` vertices
//!   sit at jittered, sorted angles with jittered radii.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{point, Path, Point, Segment};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Vertex count per contour.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Contour count per outline.
#[derive(Clone, Copy, Debug)]
pub enum ContourCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl ContourCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            ContourCount::Fixed(n) => n.max(1),
            ContourCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Outline sampler configuration (font units).
#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    pub contours: ContourCount,
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Distance between neighbouring contour centres along x.
    pub contour_spacing: f64,
    /// Probability that an edge is drawn as a quadratic. Clamped to [0, 1].
    pub quad_fraction: f64,
    /// Max control-point offset from the chord midpoint, relative to chord length.
    pub bulge: f64,
}
impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            contours: ContourCount::Fixed(1),
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.35,
            base_radius: 100.0,
            contour_spacing: 120.0,
            quad_fraction: 0.3,
            bulge: 0.4,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw an outline of one or more closed contours.
///
/// Zero-length segments cannot survive (`Path::from_segments` drops them),
/// so the result is ready for `break_path`.
pub fn draw_outline(cfg: OutlineCfg, tok: ReplayToken) -> Path {
    let mut rng = tok.to_std_rng();
    let contours = cfg.contours.sample(&mut rng);
    let mut path = Path::default();
    for k in 0..contours {
        let center = point(k as f64 * cfg.contour_spacing, 0.0);
        path.extend(draw_contour(&mut rng, &cfg, center));
    }
    path
}

fn draw_contour<R: Rng>(rng: &mut R, cfg: &OutlineCfg, center: Point) -> Path {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-6);
    let qf = cfg.quad_fraction.clamp(0.0, 1.0);
    let delta = 2.0 * PI / (n as f64);
    let phase = rng.gen::<f64>() * 2.0 * PI;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            center + Point::from_polar(r0 * (1.0 + u), th)
        })
        .collect();
    Path::from_segments((0..n).map(|k| {
        let start = pts[k];
        let end = pts[(k + 1) % n];
        if rng.gen_bool(qf) {
            let chord = end - start;
            // Unit normal to the chord, either side.
            let normal = chord * point(0.0, 1.0) / chord.norm().max(1e-12);
            let offset = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.bulge * chord.norm();
            let control = (start + end) * 0.5 + normal * offset;
            Segment::quad(start, control, end)
        } else {
            Segment::line(start, end)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::break_path;

    #[test]
    fn reproducible_draw() {
        let cfg = OutlineCfg {
            contours: ContourCount::Uniform { min: 1, max: 3 },
            ..OutlineCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_outline(cfg, tok), draw_outline(cfg, tok));
        let other = ReplayToken { seed: 42, index: 8 };
        assert_ne!(draw_outline(cfg, tok), draw_outline(cfg, other));
    }

    #[test]
    fn contours_become_separate_subpaths() {
        let cfg = OutlineCfg {
            contours: ContourCount::Fixed(3),
            vertex_count: VertexCount::Fixed(8),
            ..OutlineCfg::default()
        };
        let path = draw_outline(cfg, ReplayToken { seed: 5, index: 0 });
        assert_eq!(path.len(), 24);
        let subs = break_path(&path).unwrap();
        assert_eq!(subs.len(), 3);
        for sub in &subs {
            assert_eq!(sub.len(), 8);
            // Closed: the last segment ends where the first starts.
            assert_eq!(sub.segment(sub.len() - 1).end(), sub.segment(0).start());
        }
    }
}

use super::types::{Cusp, CuspId};
use crate::cfg::StrokeCfg;
use crate::outline::{Point, SubPath};

/// Tangents at vertex `j`: arriving along segment `j`, leaving along `j + 1`.
#[inline]
pub fn vertex_tangents(sub: &SubPath, j: usize) -> (Point, Point) {
    (sub.segment(j).end_tangent(), sub.segment(j + 1).start_tangent())
}

/// Cusp candidate at vertex `j` of sub-path `subpath`, regardless of angle.
pub fn cusp_at(subpath: usize, sub: &SubPath, j: usize) -> Cusp {
    let j = j % sub.len();
    let (tangent_in, tangent_out) = vertex_tangents(sub, j);
    Cusp::new(CuspId::new(subpath, j), sub.vertex(j), tangent_in, tangent_out)
}

/// Vertices of `sub` whose |turning angle| exceeds `cfg.min_cusp_angle`, in
/// segment order.
pub fn detect_cusps(subpath: usize, sub: &SubPath, cfg: &StrokeCfg) -> Vec<Cusp> {
    (0..sub.len())
        .map(|j| cusp_at(subpath, sub, j))
        .filter(|c| c.angle.abs() > cfg.min_cusp_angle)
        .collect()
}

use super::types::Cusp;
use crate::cfg::StrokeCfg;
use crate::error::StrokeError;
use crate::outline::SubPath;

/// Merge `next` into `c` if they are close both in the plane and along `sub`.
///
/// Returns `Ok(None)` when they stay separate. The merged cusp
/// - sits at whichever vertex has the larger |angle| (ties go to `next`),
/// - takes `tangent_in` from `c` and `tangent_out` from `next`,
/// - recomputes `angle` from those two tangents.
///
/// Errors with `MismatchedMerge` if the cusps live on different sub-paths.
pub fn try_merge(
    c: &Cusp,
    next: &Cusp,
    sub: &SubPath,
    cfg: &StrokeCfg,
) -> Result<Option<Cusp>, StrokeError> {
    if c.id.subpath != next.id.subpath {
        return Err(StrokeError::MismatchedMerge {
            left: c.id.subpath,
            right: next.id.subpath,
        });
    }
    let max = cfg.max_cusp_merge_distance;
    if (next.point - c.point).norm() > max {
        return Ok(None);
    }
    if sub.arc_length(c.id.vertex, next.id.vertex) > max {
        return Ok(None);
    }
    let (id, point) = if c.angle.abs() > next.angle.abs() {
        (c.id, c.point)
    } else {
        (next.id, next.point)
    };
    Ok(Some(Cusp::new(id, point, c.tangent_in, next.tangent_out)))
}

/// Collapse near-duplicate cusps of one sub-path; returns a new list.
///
/// Scans cyclically-adjacent pairs `(c, next)`. On a merge the survivor takes
/// `next`'s slot, `c` is dropped, and the scan stays on the same index so the
/// survivor can absorb further neighbours; otherwise it advances. Passes
/// repeat until one makes no merge, so the output is a fixed point. Lists
/// shorter than two are returned as-is.
pub fn merge_cusps(
    cusps: &[Cusp],
    sub: &SubPath,
    cfg: &StrokeCfg,
) -> Result<Vec<Cusp>, StrokeError> {
    let mut out = cusps.to_vec();
    loop {
        let mut merged_any = false;
        let mut j = 0usize;
        while out.len() >= 2 && j < out.len() {
            let k = (j + 1) % out.len();
            match try_merge(&out[j], &out[k], sub, cfg)? {
                Some(merged) => {
                    tracing::trace!(from = ?out[j].id, into = ?out[k].id, kept = ?merged.id, "cusp_merge");
                    out[k] = merged;
                    out.remove(j);
                    merged_any = true;
                }
                None => j += 1,
            }
        }
        if !merged_any {
            return Ok(out);
        }
    }
}

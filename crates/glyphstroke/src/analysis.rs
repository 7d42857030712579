//! Glyph-level entry points.
//!
//! Data flow (strict): path → sub-paths → per-sub-path cusps → merged cusps →
//! global cusp list → connection edges. No step keeps state between calls;
//! glyphs are independent of each other.

use crate::cfg::StrokeCfg;
use crate::cusp::{connect_cusps, detect_cusps, merge_cusps, ConnectionEdge, Cusp, CuspRecord};
use crate::error::StrokeError;
use crate::outline::{break_path, Path, SubPath};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// One glyph to analyze: a diagnostic identifier and its outline.
#[derive(Clone, Debug)]
pub struct GlyphInput {
    pub id: String,
    pub path: Path,
}

/// Analysis result for one glyph.
#[derive(Clone, Debug)]
pub struct GlyphStrokes {
    pub id: String,
    pub subpaths: usize,
    /// Merged cusps of all sub-paths, sub-path by sub-path.
    pub cusps: Vec<Cusp>,
    pub edges: Vec<ConnectionEdge>,
}

impl GlyphStrokes {
    /// `(point, angle)` markers for renderers.
    pub fn cusp_records(&self) -> Vec<CuspRecord> {
        self.cusps.iter().map(Cusp::record).collect()
    }
}

/// Detect and merge cusps on every sub-path; concatenated in sub-path order.
pub fn find_cusps(subpaths: &[SubPath], cfg: &StrokeCfg) -> Result<Vec<Cusp>, StrokeError> {
    let mut all = Vec::new();
    for (i, sub) in subpaths.iter().enumerate() {
        let detected = detect_cusps(i, sub, cfg);
        let merged = merge_cusps(&detected, sub, cfg)?;
        tracing::trace!(
            subpath = i,
            segments = sub.len(),
            detected = detected.len(),
            merged = merged.len(),
            "subpath_cusps"
        );
        all.extend(merged);
    }
    Ok(all)
}

/// Run the full pipeline for one glyph.
///
/// Fails only with `EmptyPath`; a glyph without cusps or edges is a valid
/// (empty) result.
pub fn analyze_glyph(id: &str, path: &Path, cfg: &StrokeCfg) -> Result<GlyphStrokes, StrokeError> {
    let subpaths = break_path(path).inspect_err(|err| {
        tracing::warn!(glyph = id, %err, "analyze_glyph");
    })?;
    let cusps = find_cusps(&subpaths, cfg)?;
    let edges = connect_cusps(&cusps, cfg);
    tracing::debug!(
        glyph = id,
        segments = path.len(),
        subpaths = subpaths.len(),
        cusps = cusps.len(),
        edges = edges.len(),
        "analyze_glyph"
    );
    Ok(GlyphStrokes {
        id: id.to_string(),
        subpaths: subpaths.len(),
        cusps,
        edges,
    })
}

/// Analyze many glyphs, results in input order.
///
/// `jobs > 1` runs the glyphs on a dedicated rayon pool of that many threads;
/// no state is shared between glyphs. The outer error only reports a pool
/// that could not be started; per-glyph failures stay in the inner results.
pub fn analyze_batch(
    glyphs: &[GlyphInput],
    cfg: &StrokeCfg,
    jobs: usize,
) -> Result<Vec<Result<GlyphStrokes, StrokeError>>, StrokeError> {
    if jobs <= 1 || glyphs.len() <= 1 {
        return Ok(glyphs
            .iter()
            .map(|g| analyze_glyph(&g.id, &g.path, cfg))
            .collect());
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|err| StrokeError::WorkerPool {
            jobs,
            reason: err.to_string(),
        })?;
    Ok(pool.install(|| {
        glyphs
            .par_iter()
            .map(|g| analyze_glyph(&g.id, &g.path, cfg))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::rand::{draw_outline, ContourCount, OutlineCfg, ReplayToken};
    use crate::outline::{point, Segment};

    fn plus_sign() -> Path {
        Path::polygon(&[
            point(40.0, 0.0),
            point(60.0, 0.0),
            point(60.0, 40.0),
            point(100.0, 40.0),
            point(100.0, 60.0),
            point(60.0, 60.0),
            point(60.0, 100.0),
            point(40.0, 100.0),
            point(40.0, 60.0),
            point(0.0, 60.0),
            point(0.0, 40.0),
            point(40.0, 40.0),
        ])
    }

    #[test]
    fn analyze_plus_sign() {
        let res = analyze_glyph("plus", &plus_sign(), &StrokeCfg::default()).unwrap();
        assert_eq!(res.id, "plus");
        assert_eq!(res.subpaths, 1);
        assert_eq!(res.cusps.len(), 12);
        assert_eq!(res.cusp_records().len(), 12);
        assert_eq!(res.edges.len(), 6);
    }

    #[test]
    fn analyze_empty_path_fails() {
        let degenerate = Path::from_segments([Segment::line(point(1.0, 1.0), point(1.0, 1.0))]);
        let err = analyze_glyph("dot", &degenerate, &StrokeCfg::default()).unwrap_err();
        assert_eq!(err, StrokeError::EmptyPath);
    }

    #[test]
    fn smooth_outline_has_no_cusps() {
        // 64-gon: each vertex turns by 2π/64 < 0.1π.
        let pts: Vec<_> = (0..64)
            .map(|k| {
                let th = k as f64 * std::f64::consts::TAU / 64.0;
                point(100.0 * th.cos(), 100.0 * th.sin())
            })
            .collect();
        let res = analyze_glyph("o", &Path::polygon(&pts), &StrokeCfg::default()).unwrap();
        assert!(res.cusps.is_empty());
        assert!(res.edges.is_empty());
    }

    #[test]
    fn batch_matches_sequential() {
        let cfg = StrokeCfg::default();
        let outline_cfg = OutlineCfg {
            contours: ContourCount::Uniform { min: 1, max: 3 },
            ..OutlineCfg::default()
        };
        let mut glyphs: Vec<GlyphInput> = (0..9)
            .map(|index| GlyphInput {
                id: format!("g{index}"),
                path: draw_outline(outline_cfg, ReplayToken { seed: 11, index }),
            })
            .collect();
        glyphs.push(GlyphInput {
            id: "empty".into(),
            path: Path::default(),
        });
        let seq = analyze_batch(&glyphs, &cfg, 1).unwrap();
        let par = analyze_batch(&glyphs, &cfg, 4).unwrap();
        assert_eq!(seq.len(), glyphs.len());
        assert_eq!(par.len(), glyphs.len());
        for (s, p) in seq.iter().zip(par.iter()) {
            match (s, p) {
                (Ok(s), Ok(p)) => {
                    assert_eq!(s.id, p.id);
                    assert_eq!(s.cusps, p.cusps);
                    assert_eq!(s.edges, p.edges);
                }
                (Err(s), Err(p)) => assert_eq!(s, p),
                _ => panic!("sequential and pooled runs disagree"),
            }
        }
        assert!(matches!(seq.last(), Some(Err(StrokeError::EmptyPath))));
    }

    #[test]
    fn batch_keeps_input_order_with_spare_workers() {
        let glyphs: Vec<GlyphInput> = ["a", "b", "c"]
            .into_iter()
            .map(|id| GlyphInput {
                id: id.into(),
                path: plus_sign(),
            })
            .collect();
        let res = analyze_batch(&glyphs, &StrokeCfg::default(), 16).unwrap();
        let ids: Vec<_> = res.iter().map(|r| r.as_ref().unwrap().id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(res.iter().all(|r| r.as_ref().unwrap().edges.len() == 6));
    }

    #[test]
    fn thresholds_come_from_cfg() {
        // Same outline, looser angle threshold: the 64-gon vertices become cusps.
        let pts: Vec<_> = (0..64)
            .map(|k| {
                let th = k as f64 * std::f64::consts::TAU / 64.0;
                point(100.0 * th.cos(), 100.0 * th.sin())
            })
            .collect();
        let cfg = StrokeCfg {
            min_cusp_angle: 0.01,
            max_cusp_merge_distance: 0.0,
            ..StrokeCfg::default()
        };
        let res = analyze_glyph("o", &Path::polygon(&pts), &cfg).unwrap();
        assert_eq!(res.cusps.len(), 64);
    }
}

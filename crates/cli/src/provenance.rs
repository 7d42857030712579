//! `<report>.provenance.json`: what an `analyze` run read, how it was tuned,
//! and what it found.

use crate::glyphs::Report;
use anyhow::{Context, Result};
use glyphstroke::StrokeCfg;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Thresholds of a run; `jobs` is absent outside `analyze`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Params {
    pub max_crossing_distance: f64,
    pub max_cusp_merge_distance: f64,
    pub min_cusp_angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Params {
    pub fn new(cfg: &StrokeCfg, jobs: Option<usize>) -> Self {
        Self {
            max_crossing_distance: cfg.max_crossing_distance,
            max_cusp_merge_distance: cfg.max_cusp_merge_distance,
            min_cusp_angle: cfg.min_cusp_angle,
            jobs,
        }
    }
}

/// The glyph document a run read.
#[derive(Debug, Serialize)]
pub struct InputStamp {
    pub path: PathBuf,
    pub bytes: u64,
    pub glyphs: usize,
}

/// Counts over a finished report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub glyphs: usize,
    pub failed: usize,
    pub cusps: usize,
    pub edges: usize,
}

impl Totals {
    pub fn of(report: &Report) -> Self {
        report.glyphs.iter().fold(
            Self {
                failed: report.failed(),
                ..Self::default()
            },
            |acc, g| Self {
                glyphs: acc.glyphs + 1,
                cusps: acc.cusps + g.cusps.len(),
                edges: acc.edges + g.edges.len(),
                ..acc
            },
        )
    }
}

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub code_rev: String,
    pub version: &'static str,
    pub params: Params,
    pub input: InputStamp,
    pub output: PathBuf,
    pub totals: Totals,
}

impl RunRecord {
    pub fn new(params: Params, input: &Path, output: &Path, report: &Report) -> Result<Self> {
        let bytes = fs::metadata(input)
            .with_context(|| format!("stat {}", input.display()))?
            .len();
        let totals = Totals::of(report);
        Ok(Self {
            code_rev: current_git_rev(),
            version: glyphstroke::VERSION,
            params,
            input: InputStamp {
                path: input.to_path_buf(),
                bytes,
                glyphs: totals.glyphs,
            },
            output: output.to_path_buf(),
            totals,
        })
    }

    /// Write the record next to its report; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(&self.output);
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `out/strokes.json` → `out/strokes.provenance.json`.
pub fn sidecar_path(report: &Path) -> PathBuf {
    let stem = report
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (run time, then build time), else the checkout's HEAD, else `"unknown"`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_string))
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|rev| rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::{CuspDoc, EdgeDoc, GlyphReport};
    use serde_json::Value;
    use tempfile::tempdir;

    fn glyph(id: &str, cusps: usize, edges: usize, error: Option<&str>) -> GlyphReport {
        GlyphReport {
            id: id.to_string(),
            subpaths: usize::from(error.is_none()),
            cusps: (0..cusps)
                .map(|k| CuspDoc {
                    x: k as f64,
                    y: 0.0,
                    angle: 1.0,
                })
                .collect(),
            edges: (0..edges)
                .map(|k| EdgeDoc {
                    a: [k as f64, 0.0],
                    b: [k as f64, 1.0],
                })
                .collect(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn sidecar_sits_next_to_report() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/strokes.json")),
            Path::new("/tmp/output/strokes.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("strokes")),
            Path::new("strokes.provenance.json")
        );
    }

    #[test]
    fn totals_count_glyphs_cusps_edges_and_failures() {
        let report = Report {
            glyphs: vec![
                glyph("a", 4, 0, None),
                glyph("b", 12, 6, None),
                glyph("c", 0, 0, Some("glyph c: empty")),
            ],
        };
        assert_eq!(
            Totals::of(&report),
            Totals {
                glyphs: 3,
                failed: 1,
                cusps: 16,
                edges: 6,
            }
        );
        assert_eq!(Totals::of(&Report { glyphs: Vec::new() }), Totals::default());
    }

    #[test]
    fn record_round_trips_through_the_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("glyphs.json");
        fs::write(&input, "{\"glyphs\": []}").unwrap();
        let output = dir.path().join("strokes.json");
        let report = Report {
            glyphs: vec![glyph("b", 12, 6, None)],
        };
        let params = Params::new(&StrokeCfg::default(), Some(3));
        let path = RunRecord::new(params, &input, &output, &report)
            .unwrap()
            .write()
            .unwrap();
        assert_eq!(path, dir.path().join("strokes.provenance.json"));

        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["version"], glyphstroke::VERSION);
        assert_eq!(parsed["params"]["max_cusp_merge_distance"], 15.0);
        assert_eq!(parsed["params"]["jobs"], 3);
        assert_eq!(parsed["input"]["bytes"], 14);
        assert_eq!(parsed["input"]["glyphs"], 1);
        assert_eq!(parsed["totals"]["edges"], 6);
        assert!(parsed["code_rev"].is_string());
    }

    #[test]
    fn params_omit_jobs_outside_analyze() {
        let v = serde_json::to_value(Params::new(&StrokeCfg::default(), None)).unwrap();
        assert!(v.get("jobs").is_none());
        assert_eq!(v["max_crossing_distance"], 64.0);
    }

    #[test]
    fn record_needs_a_readable_input() {
        let dir = tempdir().unwrap();
        let err = RunRecord::new(
            Params::new(&StrokeCfg::default(), None),
            &dir.path().join("gone.json"),
            &dir.path().join("strokes.json"),
            &Report { glyphs: Vec::new() },
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("gone.json"));
    }
}

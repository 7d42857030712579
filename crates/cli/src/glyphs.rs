//! JSON glyph documents in, JSON stroke reports out.
//!
//! Input
//! ```json
//! {"glyphs": [{"id": "uni4E00", "segments": [
//!   {"kind": "line", "start": [0, 0], "end": [100, 0]},
//!   {"kind": "quad", "start": [100, 0], "control": [50, 60], "end": [0, 0]}]}]}
//! ```
//! Output: per glyph, cusp markers `{x, y, angle}` and edges `{a: [x, y], b: [x, y]}`;
//! a glyph that fails carries `error` instead.

use anyhow::{Context, Result};
use glyphstroke::outline::{point, Path, Point, Segment};
use glyphstroke::{GlyphInput, GlyphStrokes, StrokeError};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize)]
pub struct GlyphFile {
    pub glyphs: Vec<GlyphDoc>,
}

#[derive(Debug, Deserialize)]
pub struct GlyphDoc {
    pub id: String,
    pub segments: Vec<SegmentDoc>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SegmentDoc {
    Line {
        start: [f64; 2],
        end: [f64; 2],
    },
    Quad {
        start: [f64; 2],
        control: [f64; 2],
        end: [f64; 2],
    },
}

#[inline]
fn to_point([x, y]: [f64; 2]) -> Point {
    point(x, y)
}

#[inline]
fn to_xy(p: Point) -> [f64; 2] {
    [p.re, p.im]
}

impl From<SegmentDoc> for Segment {
    fn from(doc: SegmentDoc) -> Self {
        match doc {
            SegmentDoc::Line { start, end } => Segment::line(to_point(start), to_point(end)),
            SegmentDoc::Quad {
                start,
                control,
                end,
            } => Segment::quad(to_point(start), to_point(control), to_point(end)),
        }
    }
}

impl GlyphFile {
    pub fn read(path: &std::path::Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Typed inputs; zero-length segments are dropped here.
    pub fn into_inputs(self) -> Vec<GlyphInput> {
        self.glyphs
            .into_iter()
            .map(|g| GlyphInput {
                id: g.id,
                path: Path::from_segments(g.segments.into_iter().map(Segment::from)),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub glyphs: Vec<GlyphReport>,
}

#[derive(Debug, Serialize)]
pub struct GlyphReport {
    pub id: String,
    pub subpaths: usize,
    pub cusps: Vec<CuspDoc>,
    pub edges: Vec<EdgeDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CuspDoc {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

#[derive(Debug, Serialize)]
pub struct EdgeDoc {
    pub a: [f64; 2],
    pub b: [f64; 2],
}

impl From<GlyphStrokes> for GlyphReport {
    fn from(res: GlyphStrokes) -> Self {
        Self {
            cusps: res
                .cusp_records()
                .into_iter()
                .map(|c| CuspDoc {
                    x: c.point.re,
                    y: c.point.im,
                    angle: c.angle,
                })
                .collect(),
            edges: res
                .edges
                .iter()
                .map(|e| EdgeDoc {
                    a: to_xy(e.a),
                    b: to_xy(e.b),
                })
                .collect(),
            id: res.id,
            subpaths: res.subpaths,
            error: None,
        }
    }
}

impl Report {
    /// Pair each input with its result; failed glyphs keep their id and error.
    pub fn from_results(
        inputs: &[GlyphInput],
        results: Vec<Result<GlyphStrokes, StrokeError>>,
    ) -> Self {
        let glyphs = inputs
            .iter()
            .zip(results)
            .map(|(input, res)| match res {
                Ok(strokes) => GlyphReport::from(strokes),
                Err(err) => {
                    let err = anyhow::Error::new(err).context(format!("glyph {}", input.id));
                    let message = format!("{err:#}");
                    tracing::warn!(error = %message, "glyph_failed");
                    GlyphReport {
                        id: input.id.clone(),
                        subpaths: 0,
                        cusps: Vec::new(),
                        edges: Vec::new(),
                        error: Some(message),
                    }
                }
            })
            .collect();
        Self { glyphs }
    }

    pub fn failed(&self) -> usize {
        self.glyphs.iter().filter(|g| g.error.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphstroke::{analyze_batch, StrokeCfg};
    use serde_json::Value;

    const SAMPLE: &str = r#"{"glyphs": [
        {"id": "lens", "segments": [
            {"kind": "line", "start": [0, 0], "end": [100, 0]},
            {"kind": "line", "start": [100, 0], "end": [100, 0]},
            {"kind": "quad", "start": [100, 0], "control": [50, 60], "end": [0, 0]}]},
        {"id": "dot", "segments": [
            {"kind": "line", "start": [3, 3], "end": [3, 3]}]}
    ]}"#;

    #[test]
    fn parses_segments_and_drops_zero_length() {
        let file: GlyphFile = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(file.glyphs.len(), 2);
        assert_eq!(
            file.glyphs[0].segments[2],
            SegmentDoc::Quad {
                start: [100.0, 0.0],
                control: [50.0, 60.0],
                end: [0.0, 0.0],
            }
        );
        let inputs = file.into_inputs();
        assert_eq!(inputs[0].path.len(), 2);
        assert!(inputs[1].path.is_empty());
    }

    #[test]
    fn unknown_segment_kind_is_rejected() {
        let bad = r#"{"glyphs": [{"id": "x", "segments": [
            {"kind": "cubic", "start": [0, 0], "end": [1, 1]}]}]}"#;
        assert!(serde_json::from_str::<GlyphFile>(bad).is_err());
    }

    #[test]
    fn report_keeps_failed_glyphs() {
        let inputs = serde_json::from_str::<GlyphFile>(SAMPLE)
            .unwrap()
            .into_inputs();
        let results = analyze_batch(&inputs, &StrokeCfg::default(), 1).unwrap();
        let report = Report::from_results(&inputs, results);
        assert_eq!(report.failed(), 1);

        let v: Value = serde_json::to_value(&report).unwrap();
        let lens = &v["glyphs"][0];
        assert_eq!(lens["id"], "lens");
        assert_eq!(lens["subpaths"], 1);
        assert_eq!(lens["cusps"].as_array().unwrap().len(), 2);
        assert_eq!(lens["cusps"][0]["x"], 100.0);
        assert!(lens.get("error").is_none());
        let dot = &v["glyphs"][1];
        assert_eq!(dot["id"], "dot");
        assert_eq!(
            dot["error"],
            "glyph dot: path has no segments after dropping zero-length ones"
        );
    }
}

use super::types::{Path, Segment, SubPath};
use crate::error::StrokeError;

/// Split `path` into maximal continuous sub-paths, in order.
///
/// A new sub-path starts whenever a segment's start differs from the end of
/// the segment before it. Concatenating the result reproduces `path`.
pub fn break_path(path: &Path) -> Result<Vec<SubPath>, StrokeError> {
    let (first, rest) = path
        .segments()
        .split_first()
        .ok_or(StrokeError::EmptyPath)?;
    let mut runs: Vec<Vec<Segment>> = vec![vec![*first]];
    let mut prev_end = first.end();
    for seg in rest {
        if seg.start() != prev_end {
            runs.push(Vec::new());
        }
        if let Some(run) = runs.last_mut() {
            run.push(*seg);
        }
        prev_end = seg.end();
    }
    Ok(runs.into_iter().map(SubPath::from_run).collect())
}

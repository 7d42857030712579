use thiserror::Error;

/// Errors raised by the stroke pipeline.
///
/// Every other condition (zero-length tangents, no cusps, no edges) is a
/// valid empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StrokeError {
    #[error("path has no segments after dropping zero-length ones")]
    EmptyPath,

    #[error("merge called for cusps on different sub-paths ({left} vs {right})")]
    MismatchedMerge { left: usize, right: usize },

    #[error("could not start a pool of {jobs} worker threads: {reason}")]
    WorkerPool { jobs: usize, reason: String },
}

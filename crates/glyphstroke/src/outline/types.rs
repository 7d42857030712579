//! Basic outline types.
//!
//! - `Point`: complex number (re = x, im = y) so rotations and turning angles
//!   are plain complex arithmetic.
//! - `Segment`: line or quadratic Bezier, never zero-length once inside a
//!   `Path` built with `Path::from_segments`.
//! - `Path` / `SubPath`: ordered segments; a `SubPath` is continuous and
//!   indexed cyclically.

use nalgebra::Complex;

/// 2D point or direction vector.
pub type Point = Complex<f64>;

/// Shorthand constructor for `Point`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Complex::new(x, y)
}

#[inline]
fn is_zero(v: Point) -> bool {
    v.re == 0.0 && v.im == 0.0
}

/// Signed angle `arg(a / b)` in (−π, π]; 0 if either vector is zero.
///
/// Positive when `b` must be rotated counterclockwise to reach `a`.
#[inline]
pub fn signed_angle(a: Point, b: Point) -> f64 {
    if is_zero(a) || is_zero(b) {
        return 0.0;
    }
    // arg(a/b) == arg(a * conj(b)); avoids the division.
    let r = a * b.conj();
    r.im.atan2(r.re)
}

/// One outline segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    Quad {
        start: Point,
        control: Point,
        end: Point,
    },
}

impl Segment {
    #[inline]
    pub fn line(start: Point, end: Point) -> Self {
        Segment::Line { start, end }
    }
    #[inline]
    pub fn quad(start: Point, control: Point, end: Point) -> Self {
        Segment::Quad {
            start,
            control,
            end,
        }
    }
    #[inline]
    pub fn start(&self) -> Point {
        match *self {
            Segment::Line { start, .. } | Segment::Quad { start, .. } => start,
        }
    }
    #[inline]
    pub fn end(&self) -> Point {
        match *self {
            Segment::Line { end, .. } | Segment::Quad { end, .. } => end,
        }
    }
    /// `end − start`.
    #[inline]
    pub fn chord(&self) -> Point {
        self.end() - self.start()
    }
    #[inline]
    pub fn chord_len(&self) -> f64 {
        self.chord().norm()
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }

    /// Direction of travel arriving at `end`.
    ///
    /// For a quadratic whose control differs from its end this is the true
    /// curve tangent `end − control`; otherwise the chord.
    #[inline]
    pub fn end_tangent(&self) -> Point {
        match *self {
            Segment::Quad { control, end, .. } if control != end => end - control,
            _ => self.chord(),
        }
    }

    /// Direction of travel leaving `start`.
    ///
    /// For a quadratic whose control differs from its end this is
    /// `control − start`; otherwise the chord.
    #[inline]
    pub fn start_tangent(&self) -> Point {
        match *self {
            Segment::Quad {
                start,
                control,
                end,
            } if control != end => control - start,
            _ => self.chord(),
        }
    }
}

/// Ordered sequence of segments, possibly several disjoint contours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segs: Vec<Segment>,
}

impl Path {
    /// Wrap segments verbatim (caller already removed zero-length segments).
    pub fn new(segs: Vec<Segment>) -> Self {
        Self { segs }
    }

    /// Build a path, dropping zero-length segments.
    pub fn from_segments<I: IntoIterator<Item = Segment>>(segs: I) -> Self {
        Self {
            segs: segs.into_iter().filter(|s| !s.is_degenerate()).collect(),
        }
    }

    /// Closed polygon through `pts` (last point joins back to the first).
    pub fn polygon(pts: &[Point]) -> Self {
        let n = pts.len();
        Self::from_segments((0..n).map(|k| Segment::line(pts[k], pts[(k + 1) % n])))
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segs
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.segs.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }
    /// Append all segments of `other` (used to stack contours).
    pub fn extend(&mut self, other: Path) {
        self.segs.extend(other.segs);
    }
}

/// Continuous, closed run of segments. Indexing wraps around.
///
/// Invariants:
/// - Non-empty.
/// - `seg[i].end == seg[i+1].start` for consecutive segments.
#[derive(Clone, Debug, PartialEq)]
pub struct SubPath {
    segs: Vec<Segment>,
}

impl SubPath {
    /// Returns `None` for an empty or discontinuous run.
    pub fn new(segs: Vec<Segment>) -> Option<Self> {
        if segs.is_empty() || segs.windows(2).any(|w| w[0].end() != w[1].start()) {
            return None;
        }
        Some(Self { segs })
    }

    #[inline]
    pub(crate) fn from_run(segs: Vec<Segment>) -> Self {
        debug_assert!(!segs.is_empty(), "sub-path must not be empty");
        Self { segs }
    }

    /// Segment `j`, taken modulo the segment count.
    #[inline]
    pub fn segment(&self, j: usize) -> &Segment {
        &self.segs[j % self.segs.len()]
    }
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segs
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.segs.len()
    }
    /// True when there are no segments; never the case for a built `SubPath`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Vertex `j` is the end point of segment `j`.
    #[inline]
    pub fn vertex(&self, j: usize) -> Point {
        self.segment(j).end()
    }

    /// Outline length walking forward from vertex `from` to vertex `to`,
    /// summing the chord lengths of the segments in between (cyclic).
    pub fn arc_length(&self, from: usize, to: usize) -> f64 {
        let n = self.segs.len();
        let to = to % n;
        let mut j = from % n;
        let mut dist = 0.0;
        while j != to {
            j = (j + 1) % n;
            dist += self.segs[j].chord_len();
        }
        dist
    }
}

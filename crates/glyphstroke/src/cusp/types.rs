use crate::outline::{signed_angle, Point};

/// Vertex identity: the end point of segment `vertex` in sub-path `subpath`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CuspId {
    pub subpath: usize,
    pub vertex: usize,
}

impl CuspId {
    #[inline]
    pub fn new(subpath: usize, vertex: usize) -> Self {
        Self { subpath, vertex }
    }
}

/// A sharp vertex with its incoming/outgoing directions.
///
/// `angle = signed_angle(tangent_in, tangent_out)`, in (−π, π].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cusp {
    pub id: CuspId,
    pub point: Point,
    pub tangent_in: Point,
    pub tangent_out: Point,
    pub angle: f64,
}

impl Cusp {
    /// Build a cusp, deriving `angle` from the two tangents.
    pub fn new(id: CuspId, point: Point, tangent_in: Point, tangent_out: Point) -> Self {
        Self {
            id,
            point,
            tangent_in,
            tangent_out,
            angle: signed_angle(tangent_in, tangent_out),
        }
    }

    #[inline]
    pub fn record(&self) -> CuspRecord {
        CuspRecord {
            point: self.point,
            angle: self.angle,
        }
    }
}

/// Renderer-facing cusp marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CuspRecord {
    pub point: Point,
    pub angle: f64,
}

/// Unordered pair of cusp points joined by an inferred stroke.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionEdge {
    pub a: Point,
    pub b: Point,
}

impl ConnectionEdge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Order-independent bit key; `-0.0` and `0.0` compare equal.
    pub(crate) fn key(&self) -> ([u64; 2], [u64; 2]) {
        fn bits(p: Point) -> [u64; 2] {
            [(p.re + 0.0).to_bits(), (p.im + 0.0).to_bits()]
        }
        let (ka, kb) = (bits(self.a), bits(self.b));
        if ka <= kb {
            (ka, kb)
        } else {
            (kb, ka)
        }
    }
}

/// Edges are equal when they join the same two points, in either order.
impl PartialEq for ConnectionEdge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

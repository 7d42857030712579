use std::collections::HashSet;

use super::types::{ConnectionEdge, Cusp};
use crate::cfg::{StrokeCfg, CROSSING_ANGLE};
use crate::outline::signed_angle;

/// Feature vector of the crossing classifier for one oriented pair `(a, b)`.
///
/// With `diff = b.point − a.point` and `(b_in, b_out)` the (possibly swapped)
/// tangents of `b`:
/// - `a_continue = angle(a.tangent_in, diff)`: does the stroke keep going the
///   way the outline arrived at `a`?
/// - `b_continue = angle(diff, b_out)`: does it leave `b` the way the outline does?
/// - `a_turn = angle(diff, a.tangent_out)`: the outline turns away at `a`.
/// - `b_turn = angle(b_in, diff)`: the outline arrives at `b` from the side.
/// - `length = |diff|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingFeatures {
    pub a_continue: f64,
    pub b_continue: f64,
    pub a_turn: f64,
    pub b_turn: f64,
    pub length: f64,
}

impl CrossingFeatures {
    /// The hand-tuned decision rule. Candidate for a learned classifier.
    pub fn is_crossing(&self) -> bool {
        self.a_turn * self.b_turn > 0.0
            && self.a_continue.abs() < CROSSING_ANGLE
            && self.b_continue.abs() < CROSSING_ANGLE
            && self.a_turn.abs() > CROSSING_ANGLE
            && self.b_turn.abs() > CROSSING_ANGLE
    }

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.a_continue,
            self.b_continue,
            self.a_turn,
            self.b_turn,
            self.length,
        ]
    }
}

/// Features for `(a, b)`; `swapped` exchanges `b`'s tangents (never `a`'s).
pub fn crossing_features(a: &Cusp, b: &Cusp, swapped: bool) -> CrossingFeatures {
    let diff = b.point - a.point;
    let (b_in, b_out) = if swapped {
        (b.tangent_out, b.tangent_in)
    } else {
        (b.tangent_in, b.tangent_out)
    };
    CrossingFeatures {
        a_continue: signed_angle(a.tangent_in, diff),
        b_continue: signed_angle(diff, b_out),
        a_turn: signed_angle(diff, a.tangent_out),
        b_turn: signed_angle(b_in, diff),
        length: diff.norm(),
    }
}

/// Directional crossing test from `a` to `b`.
///
/// Coincident points always connect; pairs beyond `max_crossing_distance`
/// never do, whatever their tangents.
pub fn try_connect(a: &Cusp, b: &Cusp, swapped: bool, cfg: &StrokeCfg) -> bool {
    if a.point == b.point {
        return true;
    }
    let length = (b.point - a.point).norm();
    if length > cfg.max_crossing_distance {
        return false;
    }
    let features = crossing_features(a, b, swapped);
    let result = features.is_crossing();
    tracing::trace!(
        a = ?a.point,
        b = ?b.point,
        features = ?features.as_array(),
        swapped,
        result,
        "crossing"
    );
    result
}

/// Does a stroke continue from `a` to `b`?
///
/// Same sub-path: forward orientation only. Different sub-paths: the winding
/// of the other contour is unknown, so `b`'s tangents may also be swapped.
/// Not symmetric: `connect(a, b)` and `connect(b, a)` can differ.
pub fn connect(a: &Cusp, b: &Cusp, cfg: &StrokeCfg) -> bool {
    if a.id == b.id {
        return false;
    }
    if a.id.subpath == b.id.subpath {
        return try_connect(a, b, false, cfg);
    }
    try_connect(a, b, false, cfg) || try_connect(a, b, true, cfg)
}

/// Evaluate every ordered pair and return each connected point pair once,
/// in order of first discovery.
pub fn connect_cusps(cusps: &[Cusp], cfg: &StrokeCfg) -> Vec<ConnectionEdge> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for a in cusps {
        for b in cusps {
            if !connect(a, b, cfg) {
                continue;
            }
            let edge = ConnectionEdge::new(a.point, b.point);
            if seen.insert(edge.key()) {
                edges.push(edge);
            }
        }
    }
    edges
}

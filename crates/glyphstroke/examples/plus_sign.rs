//! Stroke cuts of a plus sign.
//!
//! The twelve corners are all cusps; only the four concave inner corners are
//! joined, by the sides and diagonals of the centre square where the two bars
//! cross.

use glyphstroke::prelude::*;

fn main() {
    let outline = Path::polygon(&[
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
    ]);
    let res = analyze_glyph("plus", &outline, &StrokeCfg::default())
        .expect("plus sign outline is non-empty");
    println!("{} cusps", res.cusps.len());
    for rec in res.cusp_records() {
        println!(
            "  cusp ({:>5.1}, {:>5.1}) angle {:+.3}",
            rec.point.re, rec.point.im, rec.angle
        );
    }
    println!("{} edges", res.edges.len());
    for e in &res.edges {
        println!(
            "  ({:>5.1}, {:>5.1}) -- ({:>5.1}, {:>5.1})",
            e.a.re, e.a.im, e.b.re, e.b.im
        );
    }
}

//! Blob shape geometry.
//!
//! A blob is one closed path built from two cubic bezier arcs between two
//! anchor points. Anchors are drawn uniformly on the canvas, then pushed
//! into a distance band so shapes are neither degenerate points nor larger
//! than the canvas allows. Four control points bow the arcs outward on
//! either side of the anchor axis, giving each side an independent warp.
//!
//! All coordinates are y-down (SVG convention): a direction angle measured
//! counter-clockwise maps to a negative-y sine offset.

use crate::prng::Xorshift64;
use glam::DVec2;
use std::f64::consts::PI;

/// Minimum anchor distance as a fraction of canvas size.
const MIN_DIST: f64 = 0.20;
/// Maximum anchor distance as a fraction of canvas size.
const MAX_DIST: f64 = 0.60;
/// Minimum control-point spread as a fraction of canvas size.
const MIN_SPREAD_DIST: f64 = 0.10;
/// Minimum angle between the anchor axis and a control-point direction.
/// Keeps control points off the axis, which would flatten the curve into
/// a sliver instead of a blob.
const MIN_DIR: f64 = PI / 2.0 * 0.10;

/// Geometry of one blob: two anchors and four control points.
///
/// Immutable once generated; rendered to path data on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// First anchor (the path starts and ends here).
    pub a: DVec2,
    /// Second anchor.
    pub b: DVec2,
    /// Control point leaving `a` on the outbound arc (a → b).
    pub out_a: DVec2,
    /// Control point entering `b` on the outbound arc.
    pub out_b: DVec2,
    /// Control point leaving `b` on the return arc (b → a).
    pub back_b: DVec2,
    /// Control point entering `a` on the return arc.
    pub back_a: DVec2,
}

impl Blob {
    /// Generates one blob, consuming exactly ten random draws:
    /// four anchor coordinates, four spread magnitudes, two angles.
    ///
    /// The draw order is frozen; reordering changes every generated avatar.
    /// `size` must be positive (enforced upstream at the options boundary);
    /// degenerate spread ranges are clamped to zero rather than propagated.
    pub fn generate(rng: &mut Xorshift64, size: f64) -> Blob {
        let mut a = DVec2::new(rng.next_range(0.0, size), rng.next_range(0.0, size));
        let mut b = DVec2::new(rng.next_range(0.0, size), rng.next_range(0.0, size));
        let mut d = a.distance(b);
        let dir = (a.y - b.y).atan2(b.x - a.x);

        // Push both anchors apart/together along the axis so the distance
        // lands exactly on the violated bound.
        if d < MIN_DIST * size || d > MAX_DIST * size {
            let bound = if d < MIN_DIST * size {
                MIN_DIST * size
            } else {
                MAX_DIST * size
            };
            let delta = (bound - d) / 2.0;
            a += polar(dir + PI, delta);
            b += polar(dir, delta);
            d = a.distance(b);
        }

        let spread_range = (d - MIN_SPREAD_DIST * size).max(0.0);
        let s_aa = MIN_SPREAD_DIST * size + rng.next_f64() * spread_range;
        let s_ba = MIN_SPREAD_DIST * size + rng.next_f64() * spread_range;
        let s_ab = MIN_SPREAD_DIST * size + rng.next_f64() * spread_range;
        let s_bb = MIN_SPREAD_DIST * size + rng.next_f64() * spread_range;

        // One random direction per arc, offset from the axis by at least
        // MIN_DIR on either end of the half-turn; the opposite side mirrors
        // it by a half-turn so the two arcs close around the axis.
        let dir_1a = dir + MIN_DIR + (PI - MIN_DIR * 2.0) * rng.next_f64();
        let dir_2a = dir + MIN_DIR + (PI - MIN_DIR * 2.0) * rng.next_f64();
        let dir_1b = dir_1a + PI;
        let dir_2b = dir_2a + PI;

        Blob {
            a,
            b,
            out_a: a + polar(dir_1b, s_ab),
            out_b: b + polar(dir_2b, s_bb),
            back_b: b + polar(dir_2a, s_ba),
            back_a: a + polar(dir_1a, s_aa),
        }
    }

    /// Distance between the two anchors.
    pub fn anchor_distance(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Renders the blob as SVG path data:
    /// `M ax ay C c1x c1y c2x c2y bx by C c3x c3y c4x c4y ax ay`.
    ///
    /// One closed loop of two cubic bezier arcs. This exact token layout is
    /// the wire format consumed by the rendering layer and must stay stable.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {} {} {} {} {} C {} {} {} {} {} {}",
            self.a.x,
            self.a.y,
            self.out_a.x,
            self.out_a.y,
            self.out_b.x,
            self.out_b.y,
            self.b.x,
            self.b.y,
            self.back_b.x,
            self.back_b.y,
            self.back_a.x,
            self.back_a.y,
            self.a.x,
            self.a.y,
        )
    }
}

/// Offset of length `len` in direction `dir`, with the y component negated
/// for the y-down coordinate system.
fn polar(dir: f64, len: f64) -> DVec2 {
    DVec2::new(dir.cos() * len, -dir.sin() * len)
}

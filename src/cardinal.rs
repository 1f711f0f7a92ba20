//! Cardinal spline segments and their sampling.

use kurbo::{Point, Vec2};

use crate::error::{Error, Result};
use crate::opts::SplineOpts;
use crate::point::ControlPoint;
use crate::prepare::{Extended, Window};
use crate::util;

/// One cubic Hermite segment of a cardinal spline.
///
/// The curve runs from `p0` (at `s = 0`) to `p1` (at `s = 1`) with
/// tangents `m0` and `m1` at those ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
    pub m0: Vec2,
    pub m1: Vec2,
}

impl Segment {
    /// Build the segment for `w`, scaling the tangent at each end by the
    /// tension resolved for that end.
    pub fn cardinal(w: &Window, tension0: f64, tension1: f64) -> Segment {
        Segment {
            p0: w.p0,
            p1: w.p1,
            m0: (w.p1 - w.prev) * tension0,
            m1: (w.next - w.p0) * tension1,
        }
    }

    /// Evaluate the segment at parameter `s` in `0..=1`.
    pub fn eval(&self, s: f64) -> Point {
        let [h1, h2, h3, h4] = util::hermite_basis(s);
        Point::new(
            h1 * self.p0.x + h2 * self.p1.x + h3 * self.m0.x + h4 * self.m1.x,
            h1 * self.p0.y + h2 * self.p1.y + h3 * self.m0.y + h4 * self.m1.y,
        )
    }

    /// Evenly spaced samples, both ends included, so there are
    /// `num_of_segments + 1` of them.
    ///
    /// `num_of_segments` must be nonzero.
    pub fn samples(self, num_of_segments: u32) -> impl Iterator<Item = Point> {
        let n = f64::from(num_of_segments);
        (0..=num_of_segments).map(move |t| self.eval(f64::from(t) / n))
    }
}

/// The number of samples produced for `n_points` control points, or
/// `None` if that number does not fit in a `usize`.
pub fn sample_count(n_points: usize, num_of_segments: u32) -> Option<usize> {
    let per_segment = (num_of_segments as usize).checked_add(1)?;
    n_points.saturating_sub(1).checked_mul(per_segment)
}

/// The segments between consecutive control points, in order.
///
/// `pts` must be the points `ext` was built from.
pub fn segments<'a>(
    ext: &'a Extended,
    pts: &'a [ControlPoint],
    opts: &'a SplineOpts,
) -> impl Iterator<Item = Segment> + 'a {
    debug_assert_eq!(ext.n_segments() + 1, pts.len());
    ext.windows().enumerate().map(move |(i, w)| {
        let tension0 = opts.tension_at(i, &pts[i]);
        let tension1 = opts.tension_at(i + 1, &pts[i + 1]);
        Segment::cardinal(&w, tension0, tension1)
    })
}

/// Sample every segment.
///
/// Segment boundaries are emitted twice: the last sample of one segment
/// and the first of the next are both the shared control point.
///
/// With [`SplineOpts::disallow_x_stepping_back`], each sample's x is
/// clamped to be no smaller than the x of the sample before it.
pub fn interpolate(
    ext: &Extended,
    pts: &[ControlPoint],
    opts: &SplineOpts,
) -> Result<Vec<Point>> {
    let too_many = Error::TooManySamples {
        points: pts.len(),
        num_of_segments: opts.num_of_segments,
    };
    let count = sample_count(pts.len(), opts.num_of_segments).ok_or(too_many)?;
    let mut result = Vec::new();
    result.try_reserve_exact(count).map_err(|_| too_many)?;
    let mut last_x = f64::NEG_INFINITY;
    for seg in segments(ext, pts, opts) {
        for mut p in seg.samples(opts.num_of_segments) {
            if opts.disallow_x_stepping_back && p.x < last_x {
                p.x = last_x;
            }
            last_x = p.x;
            result.push(p);
        }
    }
    Ok(result)
}

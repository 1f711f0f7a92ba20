//! Boundary anchors around the control points.

use kurbo::Point;

use crate::point::ControlPoint;

/// The control points with one virtual anchor on each side.
///
/// Index `0` holds the predecessor of the first real point and the last
/// index holds the successor of the last real point, so real point `i`
/// lives at `i + 1`. Anchors that are not supplied duplicate the nearest
/// real point.
#[derive(Clone, Debug)]
pub struct Extended {
    pts: Vec<Point>,
}

/// The four points that determine one segment: the segment runs from
/// `p0` to `p1`, and `prev`/`next` only shape its tangents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub prev: Point,
    pub p0: Point,
    pub p1: Point,
    pub next: Point,
}

impl Extended {
    /// Build the extended sequence.
    ///
    /// Returns `None` when there are fewer than two points, since then
    /// there is no segment to interpolate.
    pub fn new(
        pts: &[ControlPoint],
        start: Option<Point>,
        end: Option<Point>,
    ) -> Option<Extended> {
        let n = pts.len();
        if n < 2 {
            return None;
        }
        let mut ext = Vec::with_capacity(n + 2);
        ext.push(start.unwrap_or_else(|| pts[0].to_point()));
        ext.extend(pts.iter().map(|p| p.to_point()));
        ext.push(end.unwrap_or_else(|| pts[n - 1].to_point()));
        Some(Extended { pts: ext })
    }

    /// The number of segments, one less than the number of real points.
    pub fn n_segments(&self) -> usize {
        self.pts.len() - 3
    }

    /// The window of each segment in order, from real point `i` to `i + 1`.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        self.pts.windows(4).map(|w| Window {
            prev: w[0],
            p0: w[1],
            p1: w[2],
            next: w[3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<ControlPoint> {
        coords.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn too_few_points() {
        assert!(Extended::new(&[], None, None).is_none());
        assert!(Extended::new(&pts(&[(1., 1.)]), None, None).is_none());
    }

    #[test]
    fn synthesized_anchors_duplicate_ends() {
        let ext = Extended::new(&pts(&[(0., 0.), (10., 0.), (20., 10.)]), None, None).unwrap();
        assert_eq!(ext.n_segments(), 2);
        let windows: Vec<_> = ext.windows().collect();
        assert_eq!(windows.len(), 2);
        let first = windows[0];
        assert_eq!(first.prev, Point::new(0., 0.));
        assert_eq!(first.p0, Point::new(0., 0.));
        assert_eq!(first.p1, Point::new(10., 0.));
        assert_eq!(first.next, Point::new(20., 10.));
        let last = windows[1];
        assert_eq!(last.next, Point::new(20., 10.));
    }

    #[test]
    fn supplied_anchors() {
        let ext = Extended::new(
            &pts(&[(0., 0.), (10., 0.)]),
            Some(Point::new(-5., -5.)),
            Some(Point::new(15., 5.)),
        )
        .unwrap();
        assert_eq!(ext.n_segments(), 1);
        assert_eq!(
            ext.windows().collect::<Vec<_>>(),
            vec![Window {
                prev: Point::new(-5., -5.),
                p0: Point::new(0., 0.),
                p1: Point::new(10., 0.),
                next: Point::new(15., 5.),
            }]
        );
    }
}

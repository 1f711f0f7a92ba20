//! Control points and conversions into them.

use kurbo::Point;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An anchor the curve passes through.
///
/// The optional `tension` overrides [`SplineOpts::tension`] at this point.
///
/// [`SplineOpts::tension`]: crate::SplineOpts::tension
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tension: Option<f64>,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> ControlPoint {
        ControlPoint {
            x,
            y,
            tension: None,
        }
    }

    pub fn with_tension(x: f64, y: f64, tension: f64) -> ControlPoint {
        ControlPoint {
            x,
            y,
            tension: Some(tension),
        }
    }

    /// The position of this point, without its tension.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Parse a flat `x0, y0, x1, y1, ...` sequence.
    ///
    /// Fails with [`Error::MissingY`] if the last pair is incomplete.
    pub fn from_flat(coords: &[f64]) -> Result<Vec<ControlPoint>> {
        let pairs = coords.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            return Err(Error::MissingY);
        }
        Ok(pairs.map(|xy| ControlPoint::new(xy[0], xy[1])).collect())
    }
}

/// Write points back out as a flat `x0, y0, x1, y1, ...` sequence.
pub fn flatten(pts: &[Point]) -> Vec<f64> {
    let mut out = Vec::with_capacity(pts.len() * 2);
    for p in pts {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

impl From<Point> for ControlPoint {
    fn from(p: Point) -> ControlPoint {
        ControlPoint::new(p.x, p.y)
    }
}

impl From<ControlPoint> for Point {
    fn from(p: ControlPoint) -> Point {
        p.to_point()
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> ControlPoint {
        ControlPoint::new(x, y)
    }
}

impl From<[f64; 2]> for ControlPoint {
    fn from([x, y]: [f64; 2]) -> ControlPoint {
        ControlPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_pairs() {
        let pts = ControlPoint::from_flat(&[1.2, 3.3, 122.2, 333.3]).unwrap();
        assert_eq!(
            pts,
            vec![ControlPoint::new(1.2, 3.3), ControlPoint::new(122.2, 333.3)]
        );
        assert_eq!(ControlPoint::from_flat(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn flat_missing_y() {
        assert_eq!(ControlPoint::from_flat(&[1.1]), Err(Error::MissingY));
        assert_eq!(
            ControlPoint::from_flat(&[1.1, 2.2, 3.3]),
            Err(Error::MissingY)
        );
    }

    #[test]
    fn conversions_agree() {
        let a: ControlPoint = (1.5, -2.0).into();
        let b: ControlPoint = [1.5, -2.0].into();
        let c: ControlPoint = Point::new(1.5, -2.0).into();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.tension, None);
        assert_eq!(Point::from(a), Point::new(1.5, -2.0));
    }

    #[test]
    fn flatten_interleaves() {
        let flat = flatten(&[Point::new(1., 2.), Point::new(3., 4.)]);
        assert_eq!(flat, vec![1., 2., 3., 4.]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn tension_is_optional_in_json() {
        let p: ControlPoint = serde_json::from_str(r#"{"x": 1.0, "y": 2.0}"#).unwrap();
        assert_eq!(p, ControlPoint::new(1.0, 2.0));
        let p: ControlPoint =
            serde_json::from_str(r#"{"x": 1.0, "y": 2.0, "tension": -0.25}"#).unwrap();
        assert_eq!(p.tension, Some(-0.25));
        let s = serde_json::to_string(&ControlPoint::new(0.5, 0.0)).unwrap();
        assert!(!s.contains("tension"));
    }
}

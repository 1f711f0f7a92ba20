//! Axis mirroring of generated samples.

use kurbo::Point;

/// Mirrors points along either axis to match a target coordinate system.
///
/// With `width` set, `x` becomes `width - x`; with `height` set, `y`
/// becomes `height - y`. The axes are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mirror {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Mirror {
    pub fn is_identity(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    pub fn apply(&self, p: Point) -> Point {
        let x = self.width.map_or(p.x, |w| w - p.x);
        let y = self.height.map_or(p.y, |h| h - p.y);
        Point::new(x, y)
    }

    pub fn apply_all(&self, pts: &mut [Point]) {
        if self.is_identity() {
            return;
        }
        for p in pts {
            *p = self.apply(*p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_independent() {
        let p = Point::new(10.0, 30.0);
        let only_y = Mirror {
            width: None,
            height: Some(400.0),
        };
        assert_eq!(only_y.apply(p), Point::new(10.0, 370.0));
        let only_x = Mirror {
            width: Some(100.0),
            height: None,
        };
        assert_eq!(only_x.apply(p), Point::new(90.0, 30.0));
        let both = Mirror {
            width: Some(100.0),
            height: Some(400.0),
        };
        assert_eq!(both.apply(p), Point::new(90.0, 370.0));
        assert_eq!(Mirror::default().apply(p), p);
    }

    #[test]
    fn involution() {
        let m = Mirror {
            width: Some(7.5),
            height: Some(-3.0),
        };
        let mut pts = vec![Point::new(1.0, 2.0), Point::new(-4.0, 0.5)];
        let orig = pts.clone();
        m.apply_all(&mut pts);
        assert_ne!(pts, orig);
        m.apply_all(&mut pts);
        assert_eq!(pts, orig);
    }
}

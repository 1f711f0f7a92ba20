//! Options controlling spline generation.

use kurbo::Point;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::cardinal::sample_count;
use crate::error::{Error, Result};
use crate::point::ControlPoint;
use crate::transform::Mirror;

/// Configuration for one call to [`generate`](crate::generate).
///
/// Construct it with [`SplineOpts::new`] (or `Default`) and adjust it with
/// the builder methods:
///
/// ```
/// use cardinal_spline::SplineOpts;
///
/// let opts = SplineOpts::new().tension(0.7).num_of_segments(8);
/// assert_eq!(opts.num_of_segments, 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct SplineOpts {
    /// Tension used at every point without an override.
    ///
    /// Negative values are allowed and bend the curve the other way.
    pub tension: f64,
    /// Per-point tension overrides, one entry per control point.
    ///
    /// A `None` entry falls back to the point's own tension, then to
    /// [`tension`](SplineOpts::tension).
    pub custom_tensions: Option<Vec<Option<f64>>>,
    /// Number of subdivisions of each segment. Must be at least 1.
    pub num_of_segments: u32,
    /// Mirror output x coordinates as `width - x`.
    pub invert_x_with_width: Option<f64>,
    /// Mirror output y coordinates as `height - y`.
    pub invert_y_with_height: Option<f64>,
    /// Virtual predecessor of the first point, used only for its tangent.
    pub hidden_point_at_start: Option<Point>,
    /// Virtual successor of the last point, used only for its tangent.
    pub hidden_point_at_end: Option<Point>,
    /// Keep the sampled curve from moving backwards along x.
    ///
    /// Each sample whose x is smaller than the previous sample's x has its
    /// x raised to that value; y is left alone. This is applied before
    /// any mirroring, and has no effect on the control points themselves.
    pub disallow_x_stepping_back: bool,
}

impl Default for SplineOpts {
    fn default() -> SplineOpts {
        SplineOpts {
            tension: 0.5,
            custom_tensions: None,
            num_of_segments: 16,
            invert_x_with_width: None,
            invert_y_with_height: None,
            hidden_point_at_start: None,
            hidden_point_at_end: None,
            disallow_x_stepping_back: false,
        }
    }
}

impl SplineOpts {
    pub fn new() -> SplineOpts {
        SplineOpts::default()
    }

    pub fn tension(mut self, tension: f64) -> SplineOpts {
        self.tension = tension;
        self
    }

    pub fn custom_tensions(mut self, tensions: Vec<Option<f64>>) -> SplineOpts {
        self.custom_tensions = Some(tensions);
        self
    }

    pub fn num_of_segments(mut self, num_of_segments: u32) -> SplineOpts {
        self.num_of_segments = num_of_segments;
        self
    }

    pub fn invert_x_with_width(mut self, width: f64) -> SplineOpts {
        self.invert_x_with_width = Some(width);
        self
    }

    pub fn invert_y_with_height(mut self, height: f64) -> SplineOpts {
        self.invert_y_with_height = Some(height);
        self
    }

    pub fn hidden_point_at_start(mut self, p: impl Into<Point>) -> SplineOpts {
        self.hidden_point_at_start = Some(p.into());
        self
    }

    pub fn hidden_point_at_end(mut self, p: impl Into<Point>) -> SplineOpts {
        self.hidden_point_at_end = Some(p.into());
        self
    }

    pub fn disallow_x_stepping_back(mut self, disallow: bool) -> SplineOpts {
        self.disallow_x_stepping_back = disallow;
        self
    }

    /// Check these options against a non-empty set of control points.
    pub fn validate(&self, pts: &[ControlPoint]) -> Result<()> {
        if self.num_of_segments < 1 {
            return Err(Error::InvalidSegmentCount);
        }
        if let Some(custom) = &self.custom_tensions {
            if custom.len() != pts.len() {
                return Err(Error::TensionCountMismatch {
                    expected: pts.len(),
                    found: custom.len(),
                });
            }
        }
        if sample_count(pts.len(), self.num_of_segments).is_none() {
            return Err(Error::TooManySamples {
                points: pts.len(),
                num_of_segments: self.num_of_segments,
            });
        }
        Ok(())
    }

    /// The tension in effect at control point `ix`.
    ///
    /// The overlay wins over the point's own tension, which wins over the
    /// global value.
    ///
    /// Each segment blends the tensions resolved at its two ends: the start
    /// tangent is scaled by the start point's tension and the end tangent
    /// by the end point's. A segment is therefore independent of
    /// [`tension`](SplineOpts::tension) only when both of its ends carry an
    /// override; with a single overridden end, changing the global value
    /// still reshapes it.
    pub fn tension_at(&self, ix: usize, pt: &ControlPoint) -> f64 {
        self.custom_tensions
            .as_ref()
            .and_then(|custom| custom.get(ix).copied().flatten())
            .or(pt.tension)
            .unwrap_or(self.tension)
    }

    /// The output mirroring these options ask for.
    pub fn mirror(&self) -> Mirror {
        Mirror {
            width: self.invert_x_with_width,
            height: self.invert_y_with_height,
        }
    }
}

//! Cardinal spline interpolation for interactive 2D curves.
//!
//! Given a short, ordered list of control points, this crate produces a
//! dense list of samples along a smooth curve passing through every one
//! of them, ready to be stroked as a polyline.
//!
//! Each pair of consecutive control points is joined by a cubic Hermite
//! segment whose tangents come from the neighboring points, scaled by a
//! tension value. Tension can be set globally, per point, or through an
//! overlay in [`SplineOpts`]. The ends of the curve use virtual anchors,
//! which default to duplicates of the first and last points.
//!
//! # Example
//!
//! ```
//! use cardinal_spline::{generate, ControlPoint, SplineOpts};
//!
//! let pts: Vec<ControlPoint> = vec![
//!     (10.0, 200.0).into(),
//!     (256.0, 390.0).into(),
//!     (512.0, 10.0).into(),
//!     (778.0, 200.0).into(),
//! ];
//! let opts = SplineOpts::new().tension(0.5).num_of_segments(16);
//! let samples = generate(&pts, &opts).unwrap();
//! assert_eq!(samples.len(), 3 * 17);
//! ```

mod cardinal;
mod error;
mod opts;
mod point;
mod prepare;
mod transform;
mod util;

use kurbo::{BezPath, Point};

pub use cardinal::{sample_count, Segment};
pub use error::{Error, Result};
pub use opts::SplineOpts;
pub use point::{flatten, ControlPoint};
pub use prepare::Window;
pub use transform::Mirror;
pub use util::{approx_eq, approx_eq_with_precision, DEFAULT_APPROX_EQ_PRECISION};

use prepare::Extended;

/// Sample the cardinal spline through `pts`.
///
/// The result has [`sample_count`] points. Adjacent segments share their
/// boundary sample, which is emitted once for each of them.
///
/// An empty input yields an empty output, and a single point is returned
/// as is. Otherwise `opts` is validated first and nothing is computed if
/// it is rejected.
pub fn generate(pts: &[ControlPoint], opts: &SplineOpts) -> Result<Vec<Point>> {
    if pts.is_empty() {
        return Ok(Vec::new());
    }
    opts.validate(pts)?;
    let ext = match Extended::new(pts, opts.hidden_point_at_start, opts.hidden_point_at_end) {
        Some(ext) => ext,
        None => {
            log::trace!("single control point, nothing to interpolate");
            return Ok(pts.iter().map(|p| p.to_point()).collect());
        }
    };
    log::debug!(
        "interpolating {} points, {} segments each, tension {}",
        pts.len(),
        opts.num_of_segments,
        opts.tension
    );
    let mut samples = cardinal::interpolate(&ext, pts, opts)?;
    opts.mirror().apply_all(&mut samples);
    Ok(samples)
}

/// [`generate`] over flat `x0, y0, x1, y1, ...` sequences.
pub fn generate_flat(coords: &[f64], opts: &SplineOpts) -> Result<Vec<f64>> {
    let pts = ControlPoint::from_flat(coords)?;
    Ok(flatten(&generate(&pts, opts)?))
}

/// A polyline through the samples, for handing to a renderer.
pub fn to_bez_path(samples: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = samples.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

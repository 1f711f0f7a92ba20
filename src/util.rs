use kurbo::Point;

/// Tolerance used by [`approx_eq`].
pub const DEFAULT_APPROX_EQ_PRECISION: f64 = 1e-6;

/// Cubic Hermite basis weights at `s`, in the order
/// (start point, end point, start tangent, end tangent).
pub fn hermite_basis(s: f64) -> [f64; 4] {
    let s2 = s * s;
    let s3 = s2 * s;
    [
        2.0 * s3 - 3.0 * s2 + 1.0,
        -2.0 * s3 + 3.0 * s2,
        s3 - 2.0 * s2 + s,
        s3 - s2,
    ]
}

/// Compare two points coordinate-wise within [`DEFAULT_APPROX_EQ_PRECISION`].
pub fn approx_eq(a: Point, b: Point) -> bool {
    approx_eq_with_precision(a, b, DEFAULT_APPROX_EQ_PRECISION)
}

pub fn approx_eq_with_precision(a: Point, b: Point, precision: f64) -> bool {
    (a.x - b.x).abs() < precision && (a.y - b.y).abs() < precision
}

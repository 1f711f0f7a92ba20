//! A simple test program that samples a spline through random points.
//!
//! This creates a cardinal spline from a sequence of random points,
//! and outputs an SVG. Set `RUST_LOG=debug` to see what the engine does.

use rand::distributions::{Distribution, Uniform};

use cardinal_spline::{generate, to_bez_path, ControlPoint, SplineOpts};

fn main() {
    env_logger::init();
    let mut rng = rand::thread_rng();
    const N: usize = 10;
    let range = Uniform::from(0.0..500.0);
    let mut pts = (0..N)
        .map(|_| ControlPoint::new(range.sample(&mut rng), range.sample(&mut rng)))
        .collect::<Vec<_>>();
    pts.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
    let tension = std::env::args()
        .nth(1)
        .map(|s| s.parse().expect("tension must be a number"))
        .unwrap_or(0.5);
    let opts = SplineOpts::new()
        .tension(tension)
        .num_of_segments(16)
        .disallow_x_stepping_back(true);
    let samples = generate(&pts, &opts).unwrap();
    eprintln!("{} control points, {} samples", pts.len(), samples.len());
    let path = to_bez_path(&samples);
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        path.to_svg()
    );
    for pt in &pts {
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}

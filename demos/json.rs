//! Render a spline described in a JSON file to SVG.
//!
//! The file holds control points and (optionally) options:
//!
//! ```json
//! {
//!   "points": [{"x": 10, "y": 200}, {"x": 256, "y": 390, "tension": 0.8}],
//!   "opts": {"num_of_segments": 8, "invert_y_with_height": 500}
//! }
//! ```

use serde_::Deserialize;

use cardinal_spline::{generate, to_bez_path, ControlPoint, SplineOpts};

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_")]
struct Input {
    points: Vec<ControlPoint>,
    #[serde(default)]
    opts: SplineOpts,
}

fn main() {
    env_logger::init();
    let path = std::env::args().nth(1).expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let input: Input = serde_json::from_str(&data).unwrap();
    let samples = match generate(&input.points, &input.opts) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let bp = to_bez_path(&samples);
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        bp.to_svg()
    );
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}

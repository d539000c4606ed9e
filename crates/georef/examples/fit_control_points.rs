//! Fit a placement to digitized control points and inspect the result.
//!
//! Run with `RUST_LOG=debug` to see solver and lookup tracing.

use georef::prelude::*;

fn main() {
    env_logger::init();

    // Control points as a user would digitize them: template coordinates on
    // the left, matching world/map coordinates on the right (millimetres).
    let mut points = ControlPointList::new();
    points.push_pair(Pt2::new(128.0, 0.0), Pt2::new(64.0, 64.0));
    points.push_pair(Pt2::new(256.0, 0.0), Pt2::new(96.0, 64.0));
    points.push_pair(Pt2::new(128.0, 128.0), Pt2::new(64.0, 96.0));

    let lookup = NullTextLookup;

    match estimate_similarity(&mut points) {
        Ok(placement) => {
            println!(
                "placement: translation ({}, {}) native units, scale {:.4}, rotation {:.6} rad",
                placement.translation.x,
                placement.translation.y,
                placement.scale_x,
                placement.rotation,
            );

            for (index, point) in points.iter().enumerate() {
                println!(
                    "  point {index}: fitted {:?}, residual {:.6} mm",
                    point.fitted.unwrap(),
                    point.error.unwrap()
                );
            }

            // Hand the matrix form to a rendering pipeline and back.
            let matrix = compose_affine(&placement);
            let recovered = decompose_affine(&matrix);
            println!("round-trip translation: ({}, {})", recovered.translation.x, recovered.translation.y);
        }
        Err(err) => {
            let text = format!("{err}");
            // A real application would translate the message here.
            println!("{}", lookup.lookup("solver", &text).unwrap_or(text));
        }
    }
}

use georef_core::{canonical_angle, AffineMap, Mat2, NativeCoord, PlacementTransform};

/// Extract the parametric placement from a shear-free affine map.
///
/// Assumes the matrix was built purely from translate/scale/rotate
/// composition. The translation is read directly and rounded to native
/// units. A diagonal linear part is a pure axis scale; anything else is
/// treated as a rotation with uniform scale taken from the length of the
/// mapped unit x vector.
///
/// A double negative diagonal (a rotation by π composed with positive
/// scales) is classified as rotating, so scales stay positive and
/// `decompose_affine(compose_affine(p))` holds over the whole shear-free
/// domain.
pub fn decompose_affine(map: &AffineMap) -> PlacementTransform {
    let translation = NativeCoord::from_mm(map.translation.x, map.translation.y);

    let half_turn = map.linear[(0, 0)] < 0.0 && map.linear[(1, 1)] < 0.0;
    if map.is_rotating() || half_turn {
        let rotation = canonical_angle((-map.linear[(1, 0)]).atan2(map.linear[(0, 0)]));
        let scale = map.linear.column(0).norm();
        PlacementTransform {
            translation,
            scale_x: scale,
            scale_y: scale,
            rotation,
        }
    } else if map.is_scaling() {
        PlacementTransform {
            translation,
            scale_x: map.linear[(0, 0)],
            scale_y: map.linear[(1, 1)],
            rotation: 0.0,
        }
    } else {
        PlacementTransform::translation_only(translation)
    }
}

/// Build the affine interchange form of a parametric placement.
///
/// Inverse of [`decompose_affine`] for any placement with uniform scale or
/// zero rotation (the only shapes the surrounding system constructs).
pub fn compose_affine(transform: &PlacementTransform) -> AffineMap {
    let (s, c) = transform.rotation.sin_cos();
    AffineMap::new(
        Mat2::new(
            transform.scale_x * c,
            transform.scale_y * s,
            -transform.scale_x * s,
            transform.scale_y * c,
        ),
        transform.translation.to_vec(),
    )
}

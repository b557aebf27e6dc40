//! Angle sort, dihedral-plane projection, and other small numeric helpers
//! shared by the rotation-system builders.

use nalgebra::{Vector2, Vector3};

/// Signed angle of `n` in `(-pi, pi]`, used to sort neighbours counter-clockwise.
#[inline]
pub fn angle_of(n: Vector2<f64>) -> f64 {
    n.y.atan2(n.x)
}

#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    let mut x = a;
    while x <= -std::f64::consts::PI {
        x += 2.0 * std::f64::consts::PI;
    }
    while x > std::f64::consts::PI {
        x -= 2.0 * std::f64::consts::PI;
    }
    x
}

/// Project `p` onto the plane perpendicular to unit axis `axis`, through the origin.
#[inline]
pub fn project_perp(p: Vector3<f64>, axis: Vector3<f64>) -> Vector3<f64> {
    p - axis * axis.dot(&p)
}

/// Oriented angle from `a` to `b` about `axis` (right-hand rule), in `(-pi, pi]`.
///
/// `a` and `b` are expected to already lie in the plane perpendicular to `axis`
/// (callers project apex vectors with [`project_perp`] first). The cosine term's
/// dot product is clipped to `[-1, 1]` to absorb rounding error.
pub fn signed_angle_around_axis(a: Vector3<f64>, b: Vector3<f64>, axis: Vector3<f64>) -> f64 {
    let na = a.norm();
    let nb = b.norm();
    if na <= 0.0 || nb <= 0.0 {
        return 0.0;
    }
    let cos_t = (a.dot(&b) / (na * nb)).clamp(-1.0, 1.0);
    let sin_t = axis.dot(&a.cross(&b)) / (na * nb);
    sin_t.atan2(cos_t)
}

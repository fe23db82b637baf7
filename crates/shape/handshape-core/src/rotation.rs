#![allow(dead_code)]
//! Rotation helpers on raw `[f32; 4]` quaternions (x, y, z, w):
//! - lerp/clamp scalar helpers
//! - quaternion multiply + normalize
//! - Euler decomposition/recomposition, XYZ Tait-Bryan order, degrees
//!
//! Degrees at the boundary: the shape rules are specified in degrees
//! (90/45/20) and axis overwrites happen in Euler space.

/// Identity quaternion.
pub const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Which Euler component an axis overwrite replaces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

#[inline]
pub fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3];
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Hamilton product `a * b` (apply `b`, then `a`).
#[inline]
pub fn mul_quat(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// Compose a quaternion from XYZ Euler angles in degrees: `q = qx * qy * qz`.
pub fn quat_from_euler_deg(e: [f32; 3]) -> [f32; 4] {
    let hx = e[0].to_radians() * 0.5;
    let hy = e[1].to_radians() * 0.5;
    let hz = e[2].to_radians() * 0.5;
    let qx = [hx.sin(), 0.0, 0.0, hx.cos()];
    let qy = [0.0, hy.sin(), 0.0, hy.cos()];
    let qz = [0.0, 0.0, hz.sin(), hz.cos()];
    normalize4(mul_quat(mul_quat(qx, qy), qz))
}

/// Decompose a quaternion into XYZ Euler angles in degrees.
/// Inverse of [`quat_from_euler_deg`] away from the Y = ±90° singularity,
/// where the Z angle collapses to zero.
pub fn euler_deg_from_quat(q: [f32; 4]) -> [f32; 3] {
    let [x, y, z, w] = normalize4(q);

    // R = Rx * Ry * Rz; m02 = sin(y angle).
    let sin_y = (2.0 * (x * z + y * w)).clamp(-1.0, 1.0);
    let angle_y = sin_y.asin();

    if sin_y.abs() > 1.0 - 1e-6 {
        // Gimbal lock: X and Z rotate around the same axis; fold into X.
        let angle_x = (2.0 * (x * y + z * w)).atan2(1.0 - 2.0 * (x * x + z * z));
        return [angle_x.to_degrees(), angle_y.to_degrees(), 0.0];
    }

    let angle_x = (2.0 * (x * w - y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    let angle_z = (2.0 * (z * w - x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
    [
        angle_x.to_degrees(),
        angle_y.to_degrees(),
        angle_z.to_degrees(),
    ]
}

/// Overwrite one Euler component of `q` with `angle_deg`, keeping the others.
pub fn with_axis_deg(q: [f32; 4], axis: Axis, angle_deg: f32) -> [f32; 4] {
    let mut e = euler_deg_from_quat(q);
    e[axis as usize] = angle_deg;
    quat_from_euler_deg(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn identity_decomposes_to_zero() {
        let e = euler_deg_from_quat(IDENTITY);
        approx(e[0], 0.0, 1e-5);
        approx(e[1], 0.0, 1e-5);
        approx(e[2], 0.0, 1e-5);
    }

    #[test]
    fn euler_round_trip_within_working_range() {
        for e in [
            [45.0, 0.0, 0.0],
            [90.0, 0.0, 0.0],
            [27.0, 20.0, 0.0],
            [-30.0, 10.0, 15.0],
        ] {
            let back = euler_deg_from_quat(quat_from_euler_deg(e));
            approx(back[0], e[0], 1e-3);
            approx(back[1], e[1], 1e-3);
            approx(back[2], e[2], 1e-3);
        }
    }

    #[test]
    fn axis_overwrite_keeps_other_components() {
        let q = quat_from_euler_deg([30.0, 12.0, -5.0]);
        let e = euler_deg_from_quat(with_axis_deg(q, Axis::X, 72.0));
        approx(e[0], 72.0, 1e-3);
        approx(e[1], 12.0, 1e-3);
        approx(e[2], -5.0, 1e-3);
    }

    #[test]
    fn with_axis_is_deterministic_under_repetition() {
        let q = quat_from_euler_deg([10.0, 18.0, 4.0]);
        let once = with_axis_deg(q, Axis::Y, 20.0);
        let twice = with_axis_deg(once, Axis::Y, 20.0);
        // Overwriting the same axis with the same angle converges.
        for i in 0..4 {
            approx(once[i], twice[i], 1e-5);
        }
    }
}

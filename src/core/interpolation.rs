use bevy::prelude::*;

/// Below this the interval between two snapshots is treated as zero.
pub const KINDA_SMALL_NUMBER: f32 = 1.0e-4;

pub const INTERP_SPEED_SCALE: f32 = 100.0;

pub const EULER_ORDER: EulerRot = EulerRot::YXZ;

/// Cubic hermite curve through `p0` and `p1` with the tangents `t0` and `t1`.
/// Tangents are not rescaled by the interval, `a` is the raw blend ratio.
#[inline]
pub fn cubic_interp(p0: Vec3, t0: Vec3, p1: Vec3, t1: Vec3, a: f32) -> Vec3 {
    let a2 = a * a;
    let a3 = a2 * a;

    p0 * (2.0 * a3 - 3.0 * a2 + 1.0)
    + t0 * (a3 - 2.0 * a2 + a)
    + p1 * (-2.0 * a3 + 3.0 * a2)
    + t1 * (a3 - a2)
}

#[inline]
pub fn cubic_interp_derivative(p0: Vec3, t0: Vec3, p1: Vec3, t1: Vec3, a: f32) -> Vec3 {
    let a2 = a * a;

    p0 * (6.0 * a2 - 6.0 * a)
    + t0 * (3.0 * a2 - 4.0 * a + 1.0)
    + p1 * (-6.0 * a2 + 6.0 * a)
    + t1 * (3.0 * a2 - 2.0 * a)
}

/// Moves `current` toward `target` by `delta * speed` of the remaining distance.
/// Non-positive speed or an already reached target returns `target`.
#[inline]
pub fn vinterp_to(current: Vec3, target: Vec3, delta: f32, speed: f32) -> Vec3 {
    if speed <= 0.0 {
        return target;
    }

    let dist = target - current;
    if dist.length_squared() < KINDA_SMALL_NUMBER {
        return target;
    }

    current + dist * (delta * speed).clamp(0.0, 1.0)
}

/// Same approach as [`vinterp_to`] on euler angles in degrees,
/// always going the short way round.
#[inline]
pub fn rinterp_to(current: Vec3, target: Vec3, delta: f32, speed: f32) -> Vec3 {
    if speed <= 0.0 {
        return target;
    }

    let diff = normalize_euler_degrees(target - current);
    if diff.abs().max_element() <= KINDA_SMALL_NUMBER {
        return target;
    }

    normalize_euler_degrees(current + diff * (delta * speed).clamp(0.0, 1.0))
}

#[inline]
pub fn normalize_axis_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[inline]
pub fn normalize_euler_degrees(euler: Vec3) -> Vec3 {
    Vec3::new(
        normalize_axis_degrees(euler.x),
        normalize_axis_degrees(euler.y),
        normalize_axis_degrees(euler.z)
    )
}

// x: pitch, y: yaw, z: roll
#[inline]
pub fn quat_to_euler_degrees(quat: Quat) -> Vec3 {
    let (yaw, pitch, roll) = quat.to_euler(EULER_ORDER);
    Vec3::new(
        pitch.to_degrees(),
        yaw.to_degrees(),
        roll.to_degrees()
    )
}

#[inline]
pub fn euler_degrees_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EULER_ORDER,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians()
    )
}

/// Difference of magnitudes, not the distance between the two points.
/// Lateral movement at constant radius reads as zero.
#[inline]
pub fn position_delta(lhs: Vec3, rhs: Vec3) -> f32 {
    (lhs.length() - rhs.length()).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1.0e-4;

    fn reference_hermite(p0: f32, t0: f32, p1: f32, t1: f32, a: f32) -> f32 {
        let h00 = 2.0 * a.powi(3) - 3.0 * a.powi(2) + 1.0;
        let h10 = a.powi(3) - 2.0 * a.powi(2) + a;
        let h01 = -2.0 * a.powi(3) + 3.0 * a.powi(2);
        let h11 = a.powi(3) - a.powi(2);
        h00 * p0 + h10 * t0 + h01 * p1 + h11 * t1
    }

    #[test]
    fn cubic_interp_hits_endpoints() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::new(-4.0, 5.0, 6.0);
        let t = Vec3::new(7.0, -1.0, 0.5);

        assert!(cubic_interp(p0, t, p1, t, 0.0).abs_diff_eq(p0, EPSILON));
        assert!(cubic_interp(p0, t, p1, t, 1.0).abs_diff_eq(p1, EPSILON));
    }

    #[test]
    fn cubic_interp_matches_reference_hermite() {
        let p0 = Vec3::new(0.0, 1.0, -2.0);
        let t0 = Vec3::new(3.0, 0.0, 1.0);
        let p1 = Vec3::new(10.0, -1.0, 4.0);
        let t1 = Vec3::new(-2.0, 2.0, 0.0);

        for a in [0.1, 0.25, 0.5, 0.8, 1.3] {
            let v = cubic_interp(p0, t0, p1, t1, a);
            assert_relative_eq!(v.x, reference_hermite(p0.x, t0.x, p1.x, t1.x, a), epsilon = EPSILON);
            assert_relative_eq!(v.y, reference_hermite(p0.y, t0.y, p1.y, t1.y, a), epsilon = EPSILON);
            assert_relative_eq!(v.z, reference_hermite(p0.z, t0.z, p1.z, t1.z, a), epsilon = EPSILON);
        }
    }

    #[test]
    fn cubic_interp_derivative_matches_tangents_at_endpoints() {
        let p0 = Vec3::ZERO;
        let t0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::splat(5.0);
        let t1 = Vec3::new(-3.0, 0.0, 4.0);

        assert!(cubic_interp_derivative(p0, t0, p1, t1, 0.0).abs_diff_eq(t0, EPSILON));
        assert!(cubic_interp_derivative(p0, t0, p1, t1, 1.0).abs_diff_eq(t1, EPSILON));
    }

    #[test]
    fn cubic_interp_derivative_agrees_with_finite_difference() {
        let p0 = Vec3::new(0.0, 1.0, 0.0);
        let t0 = Vec3::new(2.0, 0.0, -1.0);
        let p1 = Vec3::new(4.0, 3.0, 2.0);
        let t1 = Vec3::new(1.0, 1.0, 1.0);
        let a = 0.4;
        let h = 1.0e-3;

        let numeric = (cubic_interp(p0, t0, p1, t1, a + h)
            - cubic_interp(p0, t0, p1, t1, a - h)) / (2.0 * h);
        let analytic = cubic_interp_derivative(p0, t0, p1, t1, a);
        assert!(numeric.abs_diff_eq(analytic, 1.0e-2));
    }

    #[test]
    fn vinterp_to_moves_by_clamped_alpha() {
        let v = vinterp_to(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.01, 50.0);
        assert_relative_eq!(v.x, 5.0, epsilon = EPSILON);

        let v = vinterp_to(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0, 50.0);
        assert_relative_eq!(v.x, 10.0, epsilon = EPSILON);
    }

    #[test]
    fn vinterp_to_returns_target_without_speed() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(vinterp_to(Vec3::ZERO, target, 0.016, 0.0), target);
        assert_eq!(vinterp_to(Vec3::ZERO, target, 0.016, -1.0), target);
    }

    #[test]
    fn vinterp_to_snaps_when_close() {
        let target = Vec3::new(0.001, 0.0, 0.0);
        assert_eq!(vinterp_to(Vec3::ZERO, target, 0.001, 1.0), target);
    }

    #[test]
    fn rinterp_to_takes_the_short_way() {
        let current = Vec3::new(0.0, 170.0, 0.0);
        let target = Vec3::new(0.0, -170.0, 0.0);
        let half = rinterp_to(current, target, 0.5, 1.0);
        assert_relative_eq!(half.y.abs(), 180.0, epsilon = EPSILON);

        let full = rinterp_to(current, target, 1.0, 1.0);
        assert_relative_eq!(full.y, -170.0, epsilon = EPSILON);
    }

    #[test]
    fn normalize_axis_wraps_into_half_open_range() {
        assert_relative_eq!(normalize_axis_degrees(190.0), -170.0);
        assert_relative_eq!(normalize_axis_degrees(-190.0), 170.0);
        assert_relative_eq!(normalize_axis_degrees(180.0), 180.0);
        assert_relative_eq!(normalize_axis_degrees(-180.0), 180.0);
        assert_relative_eq!(normalize_axis_degrees(720.0), 0.0);
    }

    #[test]
    fn euler_round_trip_preserves_rotation() {
        let quat = Quat::from_euler(EULER_ORDER, 0.3, -0.2, 1.1);
        let back = euler_degrees_to_quat(quat_to_euler_degrees(quat));
        assert!(back.angle_between(quat) < 1.0e-3);
    }

    #[test]
    fn position_delta_is_magnitude_difference() {
        assert_relative_eq!(position_delta(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO), 10.0);
        assert_relative_eq!(position_delta(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0)), 5.0);
        // same radius, different point
        assert_relative_eq!(
            position_delta(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 5.0)),
            0.0
        );
    }
}

use approx::abs_diff_eq;
use proptest::prelude::*;
use spatial_math::{scalar, Matrix3, Matrix4, Quat, Vector2, Vector3};
use std::f64::consts::PI;

fn vector2() -> impl Strategy<Value = Vector2> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Vector2::new(x, y))
}

fn vector3() -> impl Strategy<Value = Vector3> {
    (-100.0..100.0f64, -100.0..100.0f64, -100.0..100.0f64)
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn unit_vector3() -> impl Strategy<Value = Vector3> {
    (-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64)
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
        .prop_filter("axis too short", |v| v.length() > 0.1)
        .prop_map(Vector3::norm)
}

fn unit_quat() -> impl Strategy<Value = Quat> {
    (-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64)
        .prop_map(|(w, x, y, z)| Quat::new(w, x, y, z))
        .prop_filter("quaternion too short", |q| q.length() > 0.1)
        .prop_map(Quat::norm)
}

fn matrix3() -> impl Strategy<Value = Matrix3> {
    prop::array::uniform9(-5.0..5.0f64).prop_map(Matrix3::from_cols_array)
}

fn matrix4() -> impl Strategy<Value = Matrix4> {
    prop::array::uniform16(-5.0..5.0f64).prop_map(Matrix4::from_cols_array)
}

proptest! {
    #[test]
    fn normalize_reaches_requested_length(v in vector3(), length in 0.1..10.0f64) {
        let mut n = v;
        let original = n.normalize(length);
        prop_assert_eq!(original, v.length());
        if scalar::equal(original, 0.0) {
            prop_assert_eq!(n, v);
        } else {
            prop_assert!((n.length() - length).abs() < 1e-12 * length.max(1.0));
        }
    }

    #[test]
    fn matrix3_inverse(m in matrix3()) {
        prop_assume!(m.det().abs() > 1.0);
        let m_inv = m.inv();
        prop_assert!(abs_diff_eq!(m * m_inv, Matrix3::identity(), epsilon = 1e-8));
        prop_assert!(abs_diff_eq!(m_inv * m, Matrix3::identity(), epsilon = 1e-8));
        prop_assert_eq!(m.try_inv(), Ok(m_inv));
    }

    #[test]
    fn matrix4_inverse(m in matrix4()) {
        prop_assume!(m.det().abs() > 1.0);
        let m_inv = m.inv();
        prop_assert!(abs_diff_eq!(m * m_inv, Matrix4::identity(), epsilon = 1e-8));
        prop_assert!(abs_diff_eq!(m_inv * m, Matrix4::identity(), epsilon = 1e-8));
    }

    #[test]
    fn transpose_is_an_involution(m3 in matrix3(), m4 in matrix4()) {
        prop_assert_eq!(m3.transpose().transpose(), m3);
        prop_assert_eq!(m4.transpose().transpose(), m4);
    }

    #[test]
    fn det_of_product(a in matrix3(), b in matrix3()) {
        let lhs = (a * b).det();
        let rhs = a.det() * b.det();
        prop_assert!((lhs - rhs).abs() < 1e-6 * (1.0 + rhs.abs()));
    }

    #[test]
    fn slerp_of_identical_quaternions(q in unit_quat(), t in 0.0..=1.0f64) {
        prop_assert!(abs_diff_eq!(Quat::slerp(q, q, t), q, epsilon = 1e-9));
    }

    #[test]
    fn rotation_preserves_length(q in unit_quat(), v in vector3()) {
        prop_assert!((q.rotate(v).length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn quaternion_composition_matches_matrices(a in unit_quat(), b in unit_quat()) {
        let lhs = Matrix3::from(a * b);
        let rhs = Matrix3::from(a) * Matrix3::from(b);
        prop_assert!(abs_diff_eq!(lhs, rhs, epsilon = 1e-12));
    }

    #[test]
    fn rotate_axis_round_trips_through_quaternion(axis in unit_vector3(), rad in -PI..PI) {
        let r = Matrix3::rotate_axis(rad, axis);
        let q = Quat::from(r);
        prop_assert!(abs_diff_eq!(Matrix3::from(q), r, epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(
            Matrix3::from(Quat::from_angle_axis(axis, rad)),
            r,
            epsilon = 1e-12
        ));
    }

    #[test]
    fn euler_round_trip(
        x in -3.0..3.0f64,
        y in -1.4..1.4f64,
        z in -3.0..3.0f64,
    ) {
        let angles = Vector3::new(x, y, z);
        let e = Quat::from_euler(angles).to_euler();
        prop_assert!(abs_diff_eq!(e, angles, epsilon = 1e-9));
    }

    #[test]
    fn transformation_pins_origin_to_position(
        position in vector2(),
        origin in vector2(),
        rotation in -PI..PI,
        sx in 0.1..10.0f64,
        sy in 0.1..10.0f64,
        kx in -1.0..1.0f64,
        ky in -1.0..1.0f64,
    ) {
        let scale = Vector2::new(sx, sy);
        let skew = Vector2::new(kx, ky);
        let m = Matrix3::transformation(position, rotation, scale, origin, skew);
        prop_assert!(abs_diff_eq!(m.transform2(origin), position, epsilon = 1e-9));
        let m4 = Matrix4::transformation(position, rotation, scale, origin, skew);
        prop_assert_eq!(Matrix3::from(m4).i, m.i);
        prop_assert_eq!(m4.transform2(origin), m.transform2(origin));
    }
}

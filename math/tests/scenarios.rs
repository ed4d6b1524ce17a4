use approx::assert_abs_diff_eq;
use spatial_math::{
    scalar, Axis, MathError, Matrix3, Matrix4, Quat, Transform2, Vector2, Vector3, Vector4,
};
use strum::{EnumCount, IntoEnumIterator};

#[test]
fn identity_has_unit_diagonal() {
    let m = Matrix4::identity();
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(m.at(row, col), if row == col { 1.0 } else { 0.0 });
        }
    }
    assert_eq!(Matrix3::identity().det(), 1.0);
    assert_eq!(spatial_math::Matrix2::identity().det(), 1.0);
}

#[test]
fn cross_of_basis_vectors() {
    assert_eq!(
        Vector3::new(1.0, 0.0, 0.0).cross(Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn quarter_turn_about_z() {
    let rad = scalar::radians(90.0);
    let from_quat = Matrix3::from(Quat::from_angle_axis(Vector3::new(0.0, 0.0, 1.0), rad));
    assert!(from_quat.approx_equal(Matrix3::rotate_z(rad)));
    let p = Matrix3::rotate_z(rad).transform2(Vector2::new(1.0, 0.0));
    assert!(p.approx_equal(Vector2::new(0.0, 1.0)));
}

#[test]
fn axis_rotations_cover_every_axis() {
    assert_eq!(Axis::COUNT, 3);
    for axis in Axis::iter() {
        let r = Matrix3::rotate_axis(0.9, Vector3::unit(axis));
        assert_abs_diff_eq!(r, Matrix3::rotate(axis, 0.9), epsilon = 1e-15);
        assert_abs_diff_eq!(Matrix3::from(Quat::from(r)), r, epsilon = 1e-12);
    }
}

#[test]
fn zero_length_normalize_is_a_no_op() {
    let mut v = Vector2::zero();
    assert_eq!(v.normalize(5.0), 0.0);
    assert_eq!(v, Vector2::zero());
    let mut q = Quat::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(q.normalize(1.0), 0.0);
    assert!(q.is_valid());
}

#[test]
fn singular_inverse_is_not_trapped() {
    let m = Matrix4::scale(Vector3::new(1.0, 1.0, 0.0));
    assert_eq!(m.det(), 0.0);
    assert!(!m.inv().is_valid());
    let err = m.try_inv().unwrap_err();
    assert_eq!(err, MathError::SingularMatrix { det: 0.0 });
    assert_eq!(err.to_string(), "Singular matrix (determinant 0)");
}

#[test]
fn column_major_byte_layout() {
    let m = Matrix4::translate(Vector3::new(7.0, 8.0, 9.0));
    assert_eq!(&m.as_array()[12..], &[7.0, 8.0, 9.0, 1.0]);
    let bytes = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 16 * 8);
    assert_eq!(Matrix4::try_from_le_bytes(bytes), Ok(m));
    assert_eq!(
        Matrix3::try_from_le_bytes(&bytes[..64]),
        Err(MathError::InvalidByteLength {
            expected: 72,
            found: 64
        })
    );
}

#[test]
fn sprite_transform_pipeline() {
    let sprite = Transform2::identity()
        .with_position(Vector2::new(320.0, 240.0))
        .with_rotation(scalar::radians(30.0))
        .with_scale(Vector2::new(2.0, 2.0))
        .with_origin(Vector2::new(16.0, 16.0));
    let model: Matrix4 = sprite.into();
    let projection = Matrix4::ortho(0.0, 640.0, 0.0, 480.0, -1.0, 1.0);
    let clip = projection * model * Vector4::new(16.0, 16.0, 0.0, 1.0);
    assert_abs_diff_eq!(clip, Vector4::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
}

#[test]
fn camera_pipeline() {
    let eye = Vector3::new(0.0, 2.0, 10.0);
    let view = Matrix4::look_at(eye, Vector3::zero(), Vector3::y());
    let projection = Matrix4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
    let clip = projection * view * Vector4::point(Vector3::zero());
    let ndc = Vector3::from(clip) / clip.w;
    assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-12);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn slerp_halfway() {
    let from = Quat::from_angle_axis(Vector3::y(), 0.0);
    let to = Quat::from_angle_axis(Vector3::y(), 1.0);
    let mid = Quat::slerp(from, to, 0.5);
    assert_abs_diff_eq!(
        mid,
        Quat::from_angle_axis(Vector3::y(), 0.5),
        epsilon = 1e-12
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let m = Matrix3::rotate_axis(0.3, Vector3::new(0.0, 0.6, 0.8));
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let t = Transform2::identity().with_rotation(0.25);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(serde_json::from_str::<Transform2>(&json).unwrap(), t);

    let axis: Axis = serde_json::from_str("\"Y\"").unwrap();
    assert_eq!(axis, Axis::Y);
}

use chunkforge_geom::{Direction, IVec3, Vec3, Vec4};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_add_sub_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(c - a, b, 1e-6));
    assert!(vec3_approx_eq(-a, Vec3::new(-1.0, -2.0, -3.0), 1e-6));
}

#[test]
fn vec3_scalar_mul_div() {
    let v = Vec3::new(1.5, -2.0, 4.0);
    let m = v * 2.0;
    assert!(vec3_approx_eq(m, Vec3::new(3.0, -4.0, 8.0), 1e-6));
    assert!(vec3_approx_eq(m / 2.0, v, 1e-6));
}

#[test]
fn ivec3_checked_add_reports_overflow() {
    let a = IVec3::new(1, -2, 3);
    assert_eq!(a.checked_add(IVec3::new(4, 5, -6)), Some(IVec3::new(5, 3, -3)));
    assert_eq!(IVec3::new(i32::MAX, 0, 0).checked_add(Direction::Right.offset()), None);
    assert_eq!(IVec3::new(0, i32::MIN, 0).checked_add(Direction::Down.offset()), None);
}

#[test]
fn direction_offsets_match_axes() {
    assert_eq!(Direction::Forward.offset(), IVec3::new(0, 0, 1));
    assert_eq!(Direction::Backward.offset(), IVec3::new(0, 0, -1));
    assert_eq!(Direction::Left.offset(), IVec3::new(-1, 0, 0));
    assert_eq!(Direction::Right.offset(), IVec3::new(1, 0, 0));
    assert_eq!(Direction::Up.offset(), IVec3::new(0, 1, 0));
    assert_eq!(Direction::Down.offset(), IVec3::new(0, -1, 0));
}

#[test]
fn normals_are_unit_and_tangents_perpendicular() {
    for d in Direction::ALL {
        let n = d.normal();
        assert!(approx_eq(n.length(), 1.0, 1e-6));
        let t: Vec4 = d.tangent();
        let t3 = Vec3::new(t.x, t.y, t.z);
        assert!(approx_eq(n.dot(t3), 0.0, 1e-6), "{d:?}");
        assert!(approx_eq(t.w.abs(), 1.0, 1e-6));
    }
}

#[test]
fn canonical_order_is_declaration_order() {
    let idx: Vec<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);
}

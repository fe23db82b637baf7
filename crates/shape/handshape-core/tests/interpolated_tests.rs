use handshape_core::{
    joints::FingerId,
    resolver::ShapeResolver,
    shape::{FingerShapeCondition, HandShape, ShapeTarget, ShapeType},
    skeleton::{JointId, Skeleton},
};
use handshape_test_fixtures::rigs;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn euler_x(skel: &Skeleton, fragment: &str) -> f32 {
    let id = (0..skel.len() as u32)
        .map(JointId)
        .find(|id| skel.joint(*id).name.contains(fragment))
        .expect("joint present");
    skel.local_euler_deg(id)[0]
}

fn mk_resolver(target: ShapeTarget) -> ShapeResolver {
    let mut resolver = ShapeResolver::new();
    resolver.set_roots(rigs::canonical_rig(), rigs::canonical_rig());
    resolver.set_shape(Some(HandShape::new(
        "band",
        vec![FingerShapeCondition {
            finger_id: FingerId::Index,
            targets: vec![target],
        }],
    )));
    resolver
}

/// it should sweep the band endpoints: 27 deg at t=0, 45 at t=0.5, 63 at t=1
#[test]
fn band_sweep_hits_documented_angles() {
    let target = ShapeTarget::with_tolerance(ShapeType::FullCurl, 0.5, 0.2, 0.2);
    for (t, expected) in [(0.0, 27.0), (0.5, 45.0), (1.0, 63.0)] {
        let mut resolver = mk_resolver(target.clone());
        resolver.apply_interpolated(t).unwrap();
        let pose = resolver.target().unwrap();
        approx(euler_x(pose, "IndexProximal"), expected, 1e-2);
        approx(euler_x(pose, "IndexIntermediate"), expected, 1e-2);
        approx(euler_x(pose, "IndexDistal"), expected, 1e-2);
    }
}

/// it should clamp the swept value to [0, 1], not the band endpoints
#[test]
fn band_overflow_clamps_the_final_value() {
    // Band [0.9 - 0.2, 0.9 + 0.3] = [0.7, 1.2]; t=1 lands at 1.2 -> clamped.
    let target = ShapeTarget::with_tolerance(ShapeType::FullCurl, 0.9, 0.2, 0.3);
    let mut resolver = mk_resolver(target);
    resolver.apply_interpolated(1.0).unwrap();
    approx(
        euler_x(resolver.target().unwrap(), "IndexProximal"),
        90.0,
        1e-2,
    );

    // Band [-0.2, 0.4]; t=0 lands at -0.2 -> clamped to 0.
    let target = ShapeTarget::with_tolerance(ShapeType::FullCurl, 0.1, 0.3, 0.3);
    let mut resolver = mk_resolver(target);
    resolver.apply_interpolated(0.0).unwrap();
    approx(
        euler_x(resolver.target().unwrap(), "IndexProximal"),
        0.0,
        1e-2,
    );
}

/// it should scale the swept value by each type's max angle
#[test]
fn band_sweep_respects_per_type_reach() {
    let target = ShapeTarget::with_tolerance(ShapeType::Pinch, 0.5, 0.2, 0.2);
    let mut resolver = mk_resolver(target);
    resolver.apply_interpolated(1.0).unwrap();
    // clamp01(0.7) * 45 = 31.5
    approx(
        euler_x(resolver.target().unwrap(), "IndexProximal"),
        31.5,
        1e-2,
    );
}

/// it should not reset between ticks so untouched axes persist
#[test]
fn repeated_ticks_leave_untouched_axes_alone() {
    let mut resolver = ShapeResolver::new();
    resolver.set_roots(rigs::canonical_rig(), rigs::canonical_rig());
    resolver.set_shape(Some(HandShape::new(
        "spread-then-curl",
        vec![FingerShapeCondition {
            finger_id: FingerId::Index,
            targets: vec![
                ShapeTarget::new(ShapeType::Spread, 1.0),
                ShapeTarget::with_tolerance(ShapeType::BaseCurl, 0.5, 0.1, 0.1),
            ],
        }],
    )));

    // Static apply establishes the base pose (Y = 20 on the proximal).
    resolver.apply().unwrap();
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        resolver.apply_interpolated(t).unwrap();
    }
    let pose = resolver.target().unwrap();
    let id = (0..pose.len() as u32)
        .map(JointId)
        .find(|id| pose.joint(*id).name.contains("IndexProximal"))
        .unwrap();
    let e = pose.local_euler_deg(id);
    // Spread's Y survives every tick; X follows the last tick (t=1 ->
    // clamp01(0.6) * 90 = 54).
    approx(e[1], 20.0, 1e-2);
    approx(e[0], 54.0, 1e-2);
}

/// it should fail the precondition check like the static resolver
#[test]
fn interpolated_apply_checks_references() {
    let mut resolver = ShapeResolver::new();
    assert!(resolver.apply_interpolated(0.5).is_err());
}

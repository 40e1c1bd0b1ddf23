use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn linear_spec_matches_fade_in() {
    let spec = AnimationSpec::linear(0, 20, 0.0, 1.0);
    assert_eq!(spec.sample(FrameIndex(10), fps30()), 0.5);
    for f in 0..40 {
        assert_eq!(
            spec.sample(FrameIndex(f), fps30()),
            crate::animation::interp::fade_in(FrameIndex(f), 0, 20)
        );
    }
}

#[test]
fn endpoints_are_exact() {
    let spec = AnimationSpec::linear(5, 10, 0.1, 0.7);
    assert_eq!(spec.sample(FrameIndex(0), fps30()), 0.1);
    assert_eq!(spec.sample(FrameIndex(5), fps30()), 0.1);
    assert_eq!(spec.sample(FrameIndex(15), fps30()), 0.7);
    assert_eq!(spec.sample(FrameIndex(99), fps30()), 0.7);
}

#[test]
fn zero_duration_is_already_complete() {
    let spec = AnimationSpec::linear(5, 0, 2.0, 4.0);
    assert_eq!(spec.sample(FrameIndex(0), fps30()), 4.0);
    assert_eq!(spec.sample(FrameIndex(5), fps30()), 4.0);
}

#[test]
fn eased_curve_reshapes_progress() {
    let spec = AnimationSpec::linear(0, 10, 0.0, 100.0).with_easing(Easing::Curve(Ease::OutExpo));
    let linear = AnimationSpec::linear(0, 10, 0.0, 100.0);
    assert!(spec.sample(FrameIndex(3), fps30()) > linear.sample(FrameIndex(3), fps30()));
    assert_eq!(spec.sample(FrameIndex(10), fps30()), 100.0);
}

#[test]
fn spring_spec_scales_between_values() {
    let spec = AnimationSpec::spring(10, 40.0, 0.0, SpringConfig::SMOOTH);
    assert_eq!(spec.sample(FrameIndex(0), fps30()), 40.0);
    assert_eq!(spec.sample(FrameIndex(10), fps30()), 40.0);
    let settled = spec.sample(FrameIndex(200), fps30());
    assert!(settled.abs() < 1e-3);
}

#[test]
fn sampling_is_idempotent() {
    let spec = AnimationSpec::spring(3, 0.0, 1.0, SpringConfig::BOUNCY);
    let a = spec.sample(FrameIndex(17), fps30());
    let b = spec.sample(FrameIndex(17), fps30());
    assert_eq!(a, b);
}

#[test]
fn bake_preserves_frame_order() {
    let spec = AnimationSpec::spring(0, 0.0, 1.0, SpringConfig::SNAPPY);
    let range = FrameRange::new(FrameIndex(5), FrameIndex(65)).unwrap();
    let baked = spec.bake(range, fps30());
    assert_eq!(baked.len(), 60);
    for (i, v) in baked.iter().enumerate() {
        assert_eq!(*v, spec.sample(FrameIndex(5 + i as u64), fps30()));
    }
}

#[test]
fn validate_rejects_bad_values() {
    assert!(AnimationSpec::default().validate().is_ok());
    assert!(
        AnimationSpec::linear(0, 10, f64::NAN, 1.0)
            .validate()
            .is_err()
    );
    assert!(
        AnimationSpec::spring(0, 0.0, 1.0, SpringConfig::new(10.0, -1.0, 1.0))
            .validate()
            .is_err()
    );
}

#[test]
fn parses_json_with_defaults() {
    let spec: AnimationSpec = serde_json::from_str(r#"{"delay": 30}"#).unwrap();
    assert_eq!(spec.delay, 30);
    assert_eq!(spec.duration, 20);
    assert_eq!(spec.easing, Easing::LINEAR);

    let spec: AnimationSpec =
        serde_json::from_str(r#"{"easing": "in_out_cubic", "end_value": 3.0}"#).unwrap();
    assert_eq!(spec.easing, Easing::Curve(Ease::InOutCubic));
    assert_eq!(spec.end_value, 3.0);

    let spec: AnimationSpec =
        serde_json::from_str(r#"{"easing": {"spring": "gentle"}}"#).unwrap();
    assert_eq!(spec.easing, Easing::Spring(SpringConfig::GENTLE));

    let spec: AnimationSpec = serde_json::from_str(
        r#"{"easing": {"spring": {"damping": 10.0, "stiffness": 50.0, "mass": 1.0}}}"#,
    )
    .unwrap();
    assert_eq!(
        spec.easing,
        Easing::Spring(SpringConfig::new(10.0, 50.0, 1.0))
    );
}

#[test]
fn easing_serializes_back_to_its_input_shape() {
    let json = serde_json::to_value(Easing::Spring(SpringConfig::SMOOTH)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"spring": {"damping": 200.0, "stiffness": 100.0, "mass": 0.5}})
    );
    let json = serde_json::to_value(Easing::LINEAR).unwrap();
    assert_eq!(json, serde_json::json!("linear"));
}

use super::*;
use crate::foundation::core::FrameIndex;

const SMALL: &str = r#"{
    "fps": {"num": 30, "den": 1},
    "transition": {"kind": "fade", "duration": 10},
    "scenes": [{"id": "intro", "duration": 40}, {"id": "outro", "duration": 30}],
    "duration": 60
}"#;

#[test]
fn parses_and_compiles() {
    let sb = Storyboard::from_json_str(SMALL).unwrap();
    sb.validate().unwrap();
    assert_eq!(sb.fps(), Fps { num: 30, den: 1 });
    assert_eq!(sb.transition_kind(), TransitionKind::Fade);
    let tl = sb.timeline().unwrap();
    assert_eq!(tl.total_frames(), 60);
    assert_eq!(tl.active_at(FrameIndex(35)).len(), 2);
}

#[test]
fn transition_and_duration_are_optional() {
    let sb = Storyboard::from_json_str(
        r#"{
            "fps": {"num": 24, "den": 1},
            "scenes": [{"id": "a", "duration": 5}, {"id": "b", "duration": 5}]
        }"#,
    )
    .unwrap();
    assert_eq!(sb.declared_duration(), None);
    assert_eq!(sb.timeline().unwrap().total_frames(), 10);
}

#[test]
fn mismatched_declared_duration_fails() {
    let json = SMALL.replace("\"duration\": 60", "\"duration\": 70");
    let sb = Storyboard::from_json_str(&json).unwrap();
    let err = sb.validate().unwrap_err();
    assert!(err.to_string().contains("computed total 60"));
}

#[test]
fn duplicate_and_blank_ids_fail() {
    let dup = SMALL.replace("\"outro\"", "\"intro\"");
    assert!(Storyboard::from_json_str(&dup).unwrap().validate().is_err());
    let blank = SMALL.replace("\"outro\"", "\" \"");
    assert!(Storyboard::from_json_str(&blank).unwrap().validate().is_err());
}

#[test]
fn zero_fps_fails_validation() {
    let sb = Storyboard::from_json_str(&SMALL.replace("\"den\": 1", "\"den\": 0")).unwrap();
    assert!(matches!(sb.validate(), Err(ReelError::Validation(_))));
}

#[test]
fn unknown_transition_kind_is_a_parse_error() {
    let err = Storyboard::from_json_str(&SMALL.replace("\"fade\"", "\"wipe\"")).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    let extra = SMALL.replacen('{', r#"{"width": 1920,"#, 1);
    assert!(Storyboard::from_json_str(&extra).is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = Storyboard::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ReelError::Config(_)));
}

#[test]
fn json_roundtrip_preserves_storyboard() {
    let sb = Storyboard::from_json_str(SMALL).unwrap();
    let again = Storyboard::from_json_str(&sb.to_json_string().unwrap()).unwrap();
    assert_eq!(sb, again);
}

#[test]
fn single_scene_storyboard_samples_every_frame() {
    let sb = Storyboard::from_json_str(
        r#"{"fps": {"num": 30, "den": 1},
            "transition": {"kind": "fade", "duration": 20, "fade_exiting": true},
            "scenes": [{"id": "only", "duration": 10}]}"#,
    )
    .unwrap();
    sb.validate().unwrap();
    let tl = sb.timeline().unwrap();
    for f in 0..10 {
        assert_eq!(tl.active_at(FrameIndex(f))[0].opacity, 1.0);
    }
}

use super::*;
use crate::executor::{InputMode, ScrollType};
use deskhands_protocols::ScrollDirection;

#[test]
fn test_locate_params_with_center() {
    let params: LocateParams =
        parse_params(serde_json::json!({"locate": {"center": [50, 50]}})).unwrap();
    assert_eq!(params.locate.unwrap().center, Some([50.0, 50.0]));
}

#[test]
fn test_locate_params_missing_locate() {
    let params: LocateParams = parse_params(serde_json::json!({})).unwrap();
    assert!(params.locate.is_none());
}

#[test]
fn test_locate_params_null_locate() {
    let params: LocateParams = parse_params(serde_json::json!({"locate": null})).unwrap();
    assert!(params.locate.is_none());
}

#[test]
fn test_long_press_params() {
    let params: LongPressParams = parse_params(serde_json::json!({
        "locate": {"center": [1, 2]},
        "duration": 750
    }))
    .unwrap();
    assert_eq!(params.duration, Some(750));
}

#[test]
fn test_drag_and_drop_params() {
    let params: DragAndDropParams = parse_params(serde_json::json!({
        "from": {"center": [10, 10]},
        "to": {"center": [20, 30], "description": "trash"}
    }))
    .unwrap();
    assert_eq!(params.to.unwrap().description.as_deref(), Some("trash"));
}

#[test]
fn test_input_params_defaults() {
    let params: InputParams = parse_params(serde_json::json!({"value": "hello"})).unwrap();
    assert_eq!(params.value, "hello");
    assert!(params.locate.is_none());
    assert!(params.mode.is_none());
}

#[test]
fn test_input_params_mode() {
    let params: InputParams =
        parse_params(serde_json::json!({"value": "", "mode": "clear"})).unwrap();
    assert_eq!(params.mode, Some(InputMode::Clear));
}

#[test]
fn test_input_params_unknown_mode() {
    let result: Result<InputParams, _> =
        parse_params(serde_json::json!({"value": "", "mode": "overwrite"}));
    assert!(matches!(result, Err(ActionError::InvalidParameters(_))));
}

#[test]
fn test_keyboard_press_params_camel_case() {
    let params: KeyboardPressParams =
        parse_params(serde_json::json!({"keyName": "Win+R"})).unwrap();
    assert_eq!(params.key_name, "Win+R");
}

#[test]
fn test_keyboard_press_params_missing_key() {
    let result: Result<KeyboardPressParams, _> = parse_params(serde_json::json!({}));
    match result {
        Err(ActionError::InvalidParameters(msg)) => assert!(msg.contains("keyName")),
        other => panic!("Expected InvalidParameters, got {:?}", other),
    }
}

#[test]
fn test_scroll_params() {
    let params: ScrollParams = parse_params(serde_json::json!({
        "direction": "up",
        "scrollType": "untilBottom",
        "distance": 300
    }))
    .unwrap();
    assert_eq!(params.direction, Some(ScrollDirection::Up));
    assert_eq!(params.scroll_type, Some(ScrollType::UntilBottom));
    assert_eq!(params.distance, Some(300.0));
}

#[test]
fn test_swipe_params() {
    let params: SwipeParams = parse_params(serde_json::json!({
        "start": {"center": [100, 400]},
        "end": {"center": [100, 100]}
    }))
    .unwrap();
    assert!(params.direction.is_none());
    assert!(params.start.unwrap().is_located());
}

#[test]
fn test_output_params() {
    let params: OutputFinalAnswerParams =
        parse_params(serde_json::json!({"value": "42", "uuid": "u1"})).unwrap();
    assert_eq!(params.uuid.as_deref(), Some("u1"));
}

#[test]
fn test_locate_only_schema() {
    let schema = locate_only_schema("The element");
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"][0], "locate");
    assert_eq!(schema["properties"]["locate"]["description"], "The element");
}

use super::*;

#[test]
fn test_letters_map_to_lowercase_unicode() {
    assert_eq!(to_enigo_key(KeyCode::A).unwrap(), Key::Unicode('a'));
    assert_eq!(to_enigo_key(KeyCode::V).unwrap(), Key::Unicode('v'));
    assert_eq!(to_enigo_key(KeyCode::Z).unwrap(), Key::Unicode('z'));
}

#[test]
fn test_digits_map_to_unicode() {
    assert_eq!(to_enigo_key(KeyCode::Num0).unwrap(), Key::Unicode('0'));
    assert_eq!(to_enigo_key(KeyCode::Num9).unwrap(), Key::Unicode('9'));
}

#[test]
fn test_numlock_is_not_a_digit() {
    assert!(to_enigo_key(KeyCode::NumLock).is_err());
}

#[test]
fn test_punctuation() {
    assert_eq!(to_enigo_key(KeyCode::Slash).unwrap(), Key::Unicode('/'));
    assert_eq!(to_enigo_key(KeyCode::Quote).unwrap(), Key::Unicode('\''));
}

#[test]
fn test_special_keys() {
    assert_eq!(to_enigo_key(KeyCode::Return).unwrap(), Key::Return);
    assert_eq!(to_enigo_key(KeyCode::NumPadEnter).unwrap(), Key::Return);
    assert_eq!(to_enigo_key(KeyCode::Up).unwrap(), Key::UpArrow);
    assert_eq!(to_enigo_key(KeyCode::Home).unwrap(), Key::Home);
    assert_eq!(to_enigo_key(KeyCode::F12).unwrap(), Key::F12);
}

#[test]
fn test_modifiers() {
    assert_eq!(to_enigo_key(KeyCode::LeftControl).unwrap(), Key::Control);
    assert_eq!(to_enigo_key(KeyCode::RightShift).unwrap(), Key::Shift);
    assert_eq!(to_enigo_key(KeyCode::LeftCmd).unwrap(), Key::Meta);
    assert_eq!(to_enigo_key(KeyCode::LeftMeta).unwrap(), Key::Meta);
}

#[test]
fn test_unsupported_key() {
    let err = to_enigo_key(KeyCode::AudioMute).unwrap_err();
    assert!(err.to_string().contains("AudioMute"));
}

#[test]
fn test_wheel_steps() {
    assert_eq!(wheel_steps(0), 0);
    assert_eq!(wheel_steps(120), 1);
    assert_eq!(wheel_steps(800), 7);
    assert_eq!(wheel_steps(10), 1);
    assert_eq!(wheel_steps(-300), -3);
}

#[tokio::test]
#[ignore = "needs a desktop session"]
async fn test_move_pointer() {
    let input = NativeInput::new();
    input.set_position(Point::new(10, 10)).await.unwrap();
}

//! Integration tests for reckon-core.

use reckon_core::{
    application::{Key, Keypad, lex},
    domain::{Engine, LastOperation},
    prelude::*,
};

#[test]
fn test_sequence_left_to_right() {
    let mut engine = Engine::new();
    engine.set_operand(3.0);
    engine.perform_operation("+");
    engine.set_operand(4.0);
    engine.perform_operation("×");
    engine.set_operand(2.0);
    engine.perform_operation("=");

    assert_eq!(engine.result(), 14.0);
}

#[test]
fn test_square_root_of_finished_expression() {
    let mut keypad = Keypad::new();
    keypad.feed("7 + 9 =").unwrap();
    assert_eq!(keypad.display(), "16.0");

    keypad.feed("√").unwrap();

    assert_eq!(keypad.display(), "4.0");
    assert_eq!(keypad.history_label(), "√(7.0+9.0)=");
    assert_eq!(
        keypad.engine().history(),
        ["√", "(", "7.0", "+", "9.0", ")", "="]
    );
}

#[test]
fn test_square_root_of_bare_value() {
    let mut engine = Engine::new();
    engine.set_operand(25.0);
    engine.perform_operation("√");

    assert_eq!(engine.description(), "√(25.0)");
    assert_eq!(engine.result(), 5.0);
}

#[test]
fn test_equals_right_after_operator() {
    let mut engine = Engine::new();
    engine.set_operand(5.0);
    engine.perform_operation("+");
    engine.perform_operation("=");

    assert_eq!(engine.result(), 10.0);
}

#[test]
fn test_clear_after_any_state() {
    let mut keypad = Keypad::new();
    keypad.feed("2 ∧ 8 = ln + 3").unwrap();
    keypad.clear();
    keypad.clear();

    assert_eq!(keypad.engine().result(), 0.0);
    assert_eq!(keypad.engine().description(), "");
    assert_eq!(keypad.engine().last_operation(), LastOperation::Clear);
}

#[test]
fn test_scientific_keys_from_ascii_spellings() {
    let mut keypad = Keypad::new();
    keypad.feed("3 x^2 + 2 x^3").unwrap();
    // x³ applied to the second operand while `+` is pending
    assert_eq!(keypad.engine().result(), 8.0);
    assert_eq!(keypad.history_label(), "x²(3.0)+x³(2.0)...");

    keypad.feed("=").unwrap();
    assert_eq!(keypad.engine().result(), 17.0);
    assert_eq!(keypad.history_label(), "x²(3.0)+x³(2.0)=");
}

#[test]
fn test_lexed_keys_drive_keypad() {
    let keys = lex("12.5 × 2 =");
    assert_eq!(keys[0], Key::Digits("12.5".into()));

    let mut keypad = Keypad::new();
    for key in &keys {
        keypad.press(key).unwrap();
    }
    assert_eq!(keypad.screen().display, "25.0");
    assert_eq!(keypad.screen().history, "12.5×2.0=");
}

#[test]
fn test_strict_keypad_reports_unknown_symbol() {
    let mut keypad = Keypad::new().strict(true);
    let err = keypad.feed("4 % 2 foo").unwrap_err();
    assert!(matches!(err, ReckonError::UnknownSymbol { ref symbol } if symbol == "foo"));
    // keys before the unknown one were applied
    assert_eq!(keypad.engine().result(), 0.04);
}

#[test]
fn test_typo_does_not_press_hidden_keys() {
    let mut keypad = Keypad::new();
    keypad.feed("3 + 4 ten =").unwrap();

    assert_eq!(keypad.engine().result(), 7.0);
    assert_eq!(keypad.history_label(), "3.0+4.0=");
    assert_eq!(lex("mode"), vec![Key::Unknown("mode".into())]);
}

#[test]
fn test_strict_keypad_names_whole_unknown_word() {
    let mut keypad = Keypad::new().strict(true);
    let err = keypad.feed("2 hex").unwrap_err();
    assert_eq!(
        err,
        ReckonError::UnknownSymbol {
            symbol: "hex".into()
        }
    );
}

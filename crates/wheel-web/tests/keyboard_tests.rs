// Host-side tests for keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keyboard {
    include!("../src/events/keyboard.rs");
}

use keyboard::*;
use wheel_core::WheelState;

#[test]
fn toggle_keys() {
    for key in ["o", "O", " "] {
        assert_eq!(action_for_key(key), Some(KeyAction::ToggleOpen));
    }
}

#[test]
fn arrow_keys_step_the_wheel() {
    assert_eq!(action_for_key("ArrowUp"), Some(KeyAction::Increment));
    assert_eq!(action_for_key("ArrowDown"), Some(KeyAction::Decrement));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["ArrowLeft", "a", "Enter", "Escape", ""] {
        assert_eq!(action_for_key(key), None);
    }
}

#[test]
fn arrows_do_nothing_while_closed() {
    let mut wheel = WheelState::with_index(4);
    assert!(!apply_key_action(&mut wheel, KeyAction::Increment));
    assert!(!apply_key_action(&mut wheel, KeyAction::Decrement));
    assert_eq!(wheel.index(), 4);
    assert!(!wheel.is_open());
}

#[test]
fn arrows_step_once_open() {
    let mut wheel = WheelState::new();
    assert!(apply_key_action(&mut wheel, KeyAction::ToggleOpen));
    assert!(wheel.is_open());
    assert!(apply_key_action(&mut wheel, KeyAction::Increment));
    assert!(apply_key_action(&mut wheel, KeyAction::Increment));
    assert!(apply_key_action(&mut wheel, KeyAction::Decrement));
    assert_eq!(wheel.index(), 1);
}

#[test]
fn toggle_works_in_both_states() {
    let mut wheel = WheelState::new();
    assert!(apply_key_action(&mut wheel, KeyAction::ToggleOpen));
    assert!(apply_key_action(&mut wheel, KeyAction::ToggleOpen));
    assert!(!wheel.is_open());
}

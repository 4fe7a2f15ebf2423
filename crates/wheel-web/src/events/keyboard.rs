use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{SharedWheel, WheelState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleOpen,
    Increment,
    Decrement,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "o" | "O" | " " => Some(KeyAction::ToggleOpen),
        "ArrowUp" => Some(KeyAction::Increment),
        "ArrowDown" => Some(KeyAction::Decrement),
        _ => None,
    }
}

/// Apply `action` to the wheel. Returns false when it was ignored.
pub fn apply_key_action(wheel: &mut WheelState, action: KeyAction) -> bool {
    match action {
        KeyAction::ToggleOpen => wheel.toggle_open(),
        // Steps follow the same gating as scroll input.
        KeyAction::Increment if wheel.is_open() => wheel.increment(),
        KeyAction::Decrement if wheel.is_open() => wheel.decrement(),
        _ => return false,
    }
    true
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, wheel: &SharedWheel) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    if apply_key_action(&mut wheel.borrow_mut(), action) {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(wheel: SharedWheel) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &wheel);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

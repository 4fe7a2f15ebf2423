// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use input::*;
use wheel_core::{GestureMapper, InputSource, WheelState, BUCKET_SIZE};

#[test]
fn wheel_delta_modes_scale_to_pixels() {
    assert_eq!(normalize_wheel_delta(3.0, 0, LINE_HEIGHT_PX, 800.0), 3.0);
    assert_eq!(normalize_wheel_delta(3.0, 1, LINE_HEIGHT_PX, 800.0), 48.0);
    assert_eq!(normalize_wheel_delta(-1.0, 2, LINE_HEIGHT_PX, 800.0), -800.0);
}

#[test]
fn scroll_offset_accumulates_and_skips_garbage() {
    let mut s = ScrollOffset::default();
    assert_eq!(s.add(30.0), 30.0);
    assert_eq!(s.add(f32::NAN), 30.0);
    assert_eq!(s.add(-80.0), -50.0);
}

#[test]
fn press_within_slop_is_a_click() {
    let mut p = PressState::default();
    p.begin(100.0, 100.0);
    p.track(103.0, 102.0, CLICK_SLOP_PX);
    assert!(p.end());
    assert!(!p.active);
}

#[test]
fn press_that_travels_is_not_a_click() {
    let mut p = PressState::default();
    p.begin(100.0, 100.0);
    p.track(100.0, 130.0, CLICK_SLOP_PX);
    // Coming back does not undo the drag.
    p.track(100.0, 100.0, CLICK_SLOP_PX);
    assert!(!p.end());
}

#[test]
fn release_without_press_is_not_a_click() {
    let mut p = PressState::default();
    assert!(!p.end());
}

#[test]
fn line_mode_scroll_steps_the_wheel_once_per_bucket() {
    let wheel = WheelState::new().shared();
    wheel.borrow_mut().set_open(true);
    let mut g = GestureMapper::new(wheel.clone(), BUCKET_SIZE);
    let mut s = ScrollOffset::default();
    // Four ticks of 3 lines = 192 px, crossing buckets 0 -> 3.
    for _ in 0..4 {
        let y = s.add(normalize_wheel_delta(3.0, 1, LINE_HEIGHT_PX, 800.0));
        g.handle(InputSource::Scroll, y);
    }
    assert_eq!(wheel.borrow().index(), -3);
}

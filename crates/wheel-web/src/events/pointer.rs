use crate::constants::{CLICK_SLOP_PX, LINE_HEIGHT_PX};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{GestureMapper, InputSource, SharedWheel};

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub wheel: SharedWheel,
    pub gesture: Rc<RefCell<GestureMapper>>,
    pub scroll: Rc<RefCell<input::ScrollOffset>>,
    pub press: Rc<RefCell<input::PressState>>,
    pub drag_enabled: bool,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_wheel(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // Offset only accumulates while open so reopening never jumps.
        if !w.wheel.borrow().is_open() {
            return;
        }
        let delta = input::wheel_delta_px(&ev, LINE_HEIGHT_PX, dom::page_height_px());
        let y = w.scroll.borrow_mut().add(delta);
        if let Some(step) = w.gesture.borrow_mut().handle(InputSource::Scroll, y) {
            log::debug!("[wheel] y={:.0} {:?}", y, step);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let [x, y] = input::pointer_client_xy(&ev);
        w.press.borrow_mut().begin(x, y);
        if w.drag_enabled {
            w.gesture.borrow_mut().reset_to(y);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.press.borrow().active {
            return;
        }
        let [x, y] = input::pointer_client_xy(&ev);
        w.press.borrow_mut().track(x, y, CLICK_SLOP_PX);
        if w.drag_enabled {
            if let Some(step) = w.gesture.borrow_mut().handle(InputSource::Drag, y) {
                log::debug!("[drag] y={:.0} {:?}", y, step);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.press.borrow_mut().end() {
            w.wheel.borrow_mut().toggle_open();
            log::info!("[click] wheel open={}", w.wheel.borrow().is_open());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

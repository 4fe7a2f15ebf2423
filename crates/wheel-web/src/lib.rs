#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wheel_core::{GestureMapper, SceneComposer, ViewerConfig, WheelAnimator, WheelState};

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod share;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wheel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = ViewerConfig::for_user_agent(&dom::user_agent()).with_fragment(&dom::location_hash());
    config.validate()?;
    log::info!(
        "[config] mobile={} zoom={} index={}",
        config.mobile,
        config.camera_zoom,
        config.initial_index
    );

    wire_canvas_resize(&canvas);

    // ---------------- Wheel state and its observers ----------------
    let wheel = WheelState::with_index(config.initial_index).shared();
    let (animator, _) = WheelAnimator::attach(&wheel, config.spring);
    share::wire_hash_sync(&wheel);
    share::wire_share_link(&document, wheel.clone());

    // ---------------- Input ----------------
    let gesture = Rc::new(RefCell::new(GestureMapper::new(wheel.clone(), config.bucket_size)));
    events::wire_global_keydown(wheel.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        wheel: wheel.clone(),
        gesture,
        scroll: Rc::new(RefCell::new(input::ScrollOffset::default())),
        press: Rc::new(RefCell::new(input::PressState::default())),
        drag_enabled: config.drag_enabled,
    });

    // ---------------- Renderer + RAF loop ----------------
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        wheel,
        animator,
        composer: SceneComposer::new(&config),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

//! "Share your composition" footer link: copies a link to the current palette.

use crate::constants::{COPIED_MESSAGE_ID, SHARE_LINK_ID};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;
use wheel_core::{share_fragment, share_url, SharedWheel, COPIED_MESSAGE_MS};

/// Keep `location.hash` pointing at the current palette.
pub fn wire_hash_sync(wheel: &SharedWheel) {
    wheel
        .borrow_mut()
        .subscribe(|snap| dom::replace_hash(&share_fragment(snap.index)));
}

pub fn wire_share_link(document: &web::Document, wheel: SharedWheel) {
    dom::set_visible(document, COPIED_MESSAGE_ID, false);
    let doc = document.clone();
    dom::add_click_listener(document, SHARE_LINK_ID, move |ev| {
        ev.prevent_default();
        ev.stop_propagation();
        let doc = doc.clone();
        let index = wheel.borrow().index();
        spawn_local(async move {
            match copy_share_url(index).await {
                Ok(()) => show_copied(&doc),
                Err(e) => log::warn!("[share] clipboard write failed: {:?}", e),
            }
        });
    });
}

async fn copy_share_url(index: i64) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let href = dom::location_href().ok_or_else(|| anyhow::anyhow!("no location.href"))?;
    let href = share_url(&href, index);
    let promise = window.navigator().clipboard().write_text(&href);
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[share] copied {}", href);
    Ok(())
}

fn show_copied(document: &web::Document) {
    dom::set_visible(document, COPIED_MESSAGE_ID, true);
    let doc = document.clone();
    let hide = Closure::once_into_js(move || dom::set_visible(&doc, COPIED_MESSAGE_ID, false));
    let hide: &js_sys::Function = hide.unchecked_ref();
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide,
            COPIED_MESSAGE_MS,
        );
    }
}

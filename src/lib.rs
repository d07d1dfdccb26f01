#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod core;

mod dom;
mod form;
mod frame;
mod gallery;
mod nav;
mod render;
mod reveal;

thread_local! {
    static HERO_LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Host-page control: halt the hero animation loop.
#[wasm_bindgen]
pub fn stop_hero_scene() {
    HERO_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

/// Wire every page component. Each one fails independently: a missing DOM
/// dependency disables that component and is reported, the rest keep going.
async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = gallery::init(&document) {
        log::warn!("gallery disabled: {e:?}");
    }
    if let Err(e) = nav::init(&document) {
        log::warn!("navigation disabled: {e:?}");
    }
    if let Err(e) = form::init(&document) {
        log::warn!("contact form disabled: {e:?}");
    }
    if let Err(e) = reveal::init(&document) {
        log::warn!("scroll reveal disabled: {e:?}");
    }

    match frame::init(&document).await {
        Ok(handle) => HERO_LOOP.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::warn!("hero scene disabled: {e:?}"),
    }

    Ok(())
}

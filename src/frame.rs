use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::ParticleField;
use crate::dom;
use crate::render;

/// Everything the per-frame tick touches.
pub struct FrameContext {
    pub gpu: render::GpuState<'static>,
    pub field: ParticleField,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.rotate();

        // Keep the surface sized to the canvas backing store
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&self.field) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Stops the animation loop when asked; dropping the handle leaves the loop
/// running for the page lifetime.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    LoopHandle { running }
}

/// Set up the hero scene: canvas, particle field, GPU state, frame loop.
pub async fn init(document: &web::Document) -> anyhow::Result<LoopHandle> {
    let canvas_el = document
        .get_element_by_id("hero-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #hero-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    wire_canvas_resize(&canvas);

    let field = ParticleField::from_rng(&mut StdRng::from_entropy());

    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &field).await?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext { gpu, field, canvas }));
    Ok(start_loop(frame_ctx))
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::{RevealState, REVEAL_THRESHOLD};

struct Watched {
    element: web::Element,
    state: RevealState,
}

/// Attach one intersection observer to every section and skill element; the
/// first time an element crosses the visibility threshold it gains the
/// `animate` class and keeps it.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let mut targets: Vec<web::Element> = Vec::new();
    for selector in ["section", ".skill"] {
        let list = document
            .query_selector_all(selector)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                targets.push(el);
            }
        }
    }

    let watched: Rc<RefCell<Vec<Watched>>> = Rc::new(RefCell::new(
        targets
            .iter()
            .map(|element| Watched {
                element: element.clone(),
                state: RevealState::Pending,
            })
            .collect(),
    ));

    let watched_cb = watched.clone();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let mut watched = watched_cb.borrow_mut();
                if let Some(w) = watched.iter_mut().find(|w| w.element == target) {
                    if w.state.mark_visible() {
                        let _ = target.class_list().add_1("animate");
                    }
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();

    for element in &targets {
        observer.observe(element);
    }
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{NavVisibility, ScrollTracker};

/// Wire smooth in-page scrolling and the scroll-direction navbar.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    wire_anchor_scroll(document)?;
    wire_navbar_visibility(document)
}

/// Every anchor with a fragment href scrolls its target into view instead of
/// jumping. A missing target logs a warning and leaves the page alone.
fn wire_anchor_scroll(document: &web::Document) -> anyhow::Result<()> {
    let anchors = document
        .query_selector_all(r##"a[href^="#"]"##)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    for i in 0..anchors.length() {
        let Some(node) = anchors.item(i) else { continue };
        let Ok(anchor) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let document = document.clone();
        let anchor_for_click = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = anchor_for_click.get_attribute("href") else {
                return;
            };
            match document.query_selector(&href) {
                Ok(Some(target)) => {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
                _ => log::warn!("scroll target {href} not found"),
            }
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    Ok(())
}

/// Track scroll direction and flip the navbar between its shown and hidden
/// classes. Runs at native scroll-event frequency, no debouncing.
fn wire_navbar_visibility(document: &web::Document) -> anyhow::Result<()> {
    let navbar = document
        .query_selector(".navbar")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing .navbar"))?;

    let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else { return };
        let offset = window.page_y_offset().unwrap_or(0.0);
        let visibility = tracker.borrow_mut().observe(offset);
        apply_navbar_classes(&navbar, visibility, offset);
    }) as Box<dyn FnMut()>);
    web::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

fn apply_navbar_classes(navbar: &web::Element, visibility: NavVisibility, offset: f64) {
    let classes = navbar.class_list();
    match visibility {
        NavVisibility::Hidden => {
            let _ = classes.remove_1("scroll-up");
            let _ = classes.add_1("scroll-down");
        }
        NavVisibility::Shown => {
            let _ = classes.remove_1("scroll-down");
            // The resting state at the very top carries no class at all
            if offset <= 0.0 {
                let _ = classes.remove_1("scroll-up");
            } else {
                let _ = classes.add_1("scroll-up");
            }
        }
    }
}

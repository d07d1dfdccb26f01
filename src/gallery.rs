use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Category, Filter, FilterState, ProjectRecord, PROJECTS};
use crate::dom;

/// Render the project cards, then wire the category filter buttons.
///
/// Rendering runs first so the buttons always have cards to act on.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let grid = document
        .query_selector(".project-grid")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing .project-grid"))?;
    let cards = Rc::new(render_cards(document, &grid)?);
    wire_filter_buttons(document, cards);
    Ok(())
}

/// Append one card per record, in feed order. Returns the created elements
/// paired with their categories.
fn render_cards(
    document: &web::Document,
    grid: &web::Element,
) -> anyhow::Result<Vec<(web::Element, Category)>> {
    let mut cards = Vec::with_capacity(PROJECTS.len());
    for record in PROJECTS {
        let card = build_card(document, record)?;
        grid.append_child(&card)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        cards.push((card, record.category));
    }
    Ok(cards)
}

/// Build a single card. Titles and descriptions go in as text content, never
/// raw HTML.
fn build_card(document: &web::Document, record: &ProjectRecord) -> anyhow::Result<web::Element> {
    let card = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    card.set_class_name("project-card");
    let _ = card.set_attribute("data-category", record.category.as_str());

    if let Ok(image) = document.create_element("img") {
        let _ = image.set_attribute("src", record.image);
        let _ = image.set_attribute("alt", record.title);
        let _ = card.append_child(&image);
    }
    if let Ok(title) = document.create_element("h3") {
        title.set_text_content(Some(record.title));
        let _ = card.append_child(&title);
    }
    if let Ok(description) = document.create_element("p") {
        description.set_text_content(Some(record.description));
        let _ = card.append_child(&description);
    }
    Ok(card)
}

fn wire_filter_buttons(document: &web::Document, cards: Rc<Vec<(web::Element, Category)>>) {
    let buttons: Vec<web::Element> = match document.query_selector_all(".filter-btn") {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    };
    let buttons = Rc::new(buttons);
    let state = Rc::new(RefCell::new(FilterState::new()));

    for (index, button) in buttons.iter().enumerate() {
        let Some(filter) = button
            .get_attribute("data-filter")
            .and_then(|s| Filter::parse(&s))
        else {
            log::warn!("filter button {index} has no usable data-filter");
            continue;
        };
        let buttons = buttons.clone();
        let cards = cards.clone();
        let state = state.clone();
        dom::on_click(button, move || {
            let active = state.borrow_mut().select(filter);
            // Exactly the clicked button is active
            for (i, b) in buttons.iter().enumerate() {
                let classes = b.class_list();
                if i == index {
                    let _ = classes.add_1("active");
                } else {
                    let _ = classes.remove_1("active");
                }
            }
            apply_filter(&cards, active);
        });
    }
}

/// Show exactly the cards the filter admits. Idempotent per filter.
fn apply_filter(cards: &[(web::Element, Category)], filter: Filter) {
    for (card, category) in cards {
        if filter.admits(*category) {
            let _ = card.set_attribute("style", "");
        } else {
            let _ = card.set_attribute("style", "display:none");
        }
    }
}

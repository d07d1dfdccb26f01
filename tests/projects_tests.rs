// Host-side tests for project records and category filtering.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/projects.rs"]
mod projects;

use projects::*;

#[test]
fn category_strings_round_trip() {
    for cat in [Category::Web, Category::Design, Category::App] {
        assert_eq!(Category::parse(cat.as_str()), Some(cat));
    }
    assert_eq!(Category::parse("all"), None);
    assert_eq!(Category::parse("video"), None);
}

#[test]
fn filter_parses_buttons_and_rejects_junk() {
    assert_eq!(Filter::parse("all"), Some(Filter::All));
    assert_eq!(Filter::parse("web"), Some(Filter::Only(Category::Web)));
    assert_eq!(Filter::parse("design"), Some(Filter::Only(Category::Design)));
    assert_eq!(Filter::parse("app"), Some(Filter::Only(Category::App)));
    assert_eq!(Filter::parse(""), None);
    assert_eq!(Filter::parse("ALL"), None);
}

#[test]
fn all_filter_admits_every_record() {
    for record in PROJECTS {
        assert!(
            Filter::All.admits(record.category),
            "'all' hid {}",
            record.title
        );
    }
}

#[test]
fn category_filter_admits_exactly_its_own() {
    for selected in [Category::Web, Category::Design, Category::App] {
        let filter = Filter::Only(selected);
        let visible = PROJECTS.iter().filter(|r| filter.admits(r.category)).count();
        let matching = PROJECTS.iter().filter(|r| r.category == selected).count();
        assert_eq!(visible, matching, "wrong visible set for {selected:?}");
        assert!(matching > 0, "feed has no {selected:?} records to filter");
    }
}

#[test]
fn filtering_twice_yields_the_same_visible_set() {
    let filter = Filter::Only(Category::Design);
    let first: Vec<bool> = PROJECTS.iter().map(|r| filter.admits(r.category)).collect();
    let second: Vec<bool> = PROJECTS.iter().map(|r| filter.admits(r.category)).collect();
    assert_eq!(first, second);
}

#[test]
fn filter_state_holds_one_active_filter() {
    let mut state = FilterState::new();
    assert_eq!(state.active(), Filter::All);

    state.select(Filter::Only(Category::Web));
    assert_eq!(state.active(), Filter::Only(Category::Web));

    state.select(Filter::All);
    assert_eq!(state.active(), Filter::All);
}

#[test]
fn project_feed_is_complete_and_ordered() {
    assert_eq!(PROJECTS.len(), 6);
    let categories: Vec<Category> = PROJECTS.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        [
            Category::Web,
            Category::Design,
            Category::App,
            Category::Web,
            Category::Design,
            Category::App,
        ]
    );
    for record in PROJECTS {
        assert!(!record.title.is_empty());
        assert!(!record.description.is_empty());
        assert!(
            record.image.starts_with("https://"),
            "{} has a non-https image",
            record.title
        );
    }
}

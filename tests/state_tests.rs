// Host-side tests for the camera and the scroll-driven state machines.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/state.rs"]
mod state;

use constants::*;
use state::*;

#[test]
fn camera_aspect_tracks_resize_exactly() {
    let mut camera = Camera::hero(1.0);
    camera.set_aspect(1920.0, 1080.0);
    assert_eq!(camera.aspect, 1920.0 / 1080.0);

    camera.set_aspect(800.0, 600.0);
    assert_eq!(camera.aspect, 800.0 / 600.0);
}

#[test]
fn hero_camera_uses_scene_constants() {
    let camera = Camera::hero(16.0 / 9.0);
    assert_eq!(camera.eye.z, CAMERA_Z);
    assert_eq!(camera.fovy_radians, CAMERA_FOV_DEGREES.to_radians());
    assert_eq!(camera.znear, CAMERA_NEAR);
    assert_eq!(camera.zfar, CAMERA_FAR);
    assert_eq!(camera.target, glam::Vec3::ZERO);
}

#[test]
fn camera_matrices_are_finite() {
    let camera = Camera::hero(16.0 / 9.0);
    for m in [
        camera.projection_matrix(),
        camera.view_matrix(),
        camera.view_proj(),
    ] {
        assert!(
            m.to_cols_array().iter().all(|v| v.is_finite()),
            "non-finite matrix entry"
        );
    }
}

#[test]
fn navbar_starts_shown_at_the_top() {
    let tracker = ScrollTracker::new();
    assert_eq!(tracker.visibility(), NavVisibility::Shown);
    assert_eq!(tracker.last_offset(), 0.0);
}

#[test]
fn scrolling_down_hides_and_scrolling_up_shows() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.observe(100.0), NavVisibility::Hidden);
    assert_eq!(tracker.observe(50.0), NavVisibility::Shown);
}

#[test]
fn top_of_page_always_shows_regardless_of_prior_state() {
    let mut tracker = ScrollTracker::new();
    tracker.observe(100.0);
    tracker.observe(200.0);
    assert_eq!(tracker.visibility(), NavVisibility::Hidden);
    assert_eq!(tracker.observe(0.0), NavVisibility::Shown);

    // Elastic overscroll reports negative offsets on some platforms
    tracker.observe(150.0);
    tracker.observe(300.0);
    assert_eq!(tracker.observe(-5.0), NavVisibility::Shown);
}

#[test]
fn repeated_offset_keeps_the_current_state() {
    let mut tracker = ScrollTracker::new();
    tracker.observe(100.0);
    assert_eq!(tracker.observe(100.0), NavVisibility::Hidden);

    tracker.observe(40.0);
    assert_eq!(tracker.observe(40.0), NavVisibility::Shown);
}

#[test]
fn continuing_in_one_direction_does_not_flip_state() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.observe(100.0), NavVisibility::Hidden);
    assert_eq!(tracker.observe(150.0), NavVisibility::Hidden);
    assert_eq!(tracker.observe(90.0), NavVisibility::Shown);
    assert_eq!(tracker.observe(60.0), NavVisibility::Shown);
}

#[test]
fn last_offset_updates_on_every_sample() {
    let mut tracker = ScrollTracker::new();
    tracker.observe(100.0);
    tracker.observe(150.0);
    assert_eq!(tracker.last_offset(), 150.0);
    tracker.observe(150.0);
    assert_eq!(tracker.last_offset(), 150.0);
    tracker.observe(20.0);
    assert_eq!(tracker.last_offset(), 20.0);
}

#[test]
fn reveal_state_transitions_exactly_once() {
    let mut state = RevealState::default();
    assert!(!state.is_animated());
    assert!(state.mark_visible(), "first intersection should animate");
    assert!(state.is_animated());

    // Re-entering the viewport never re-triggers
    for _ in 0..10 {
        assert!(!state.mark_visible());
        assert!(state.is_animated());
    }
}

// Host-side tests for the hero particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::ParticleField;

#[test]
fn field_has_exact_count() {
    let field = ParticleField::generate(42);
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert_eq!(field.positions().len(), field.colors().len());
    assert!(!field.is_empty());
}

#[test]
fn positions_stay_inside_the_bounded_cube() {
    let field = ParticleField::generate(7);
    let half = FIELD_EXTENT / 2.0;
    for (i, p) in field.positions().iter().enumerate() {
        for c in p.to_array() {
            assert!(
                (-half..half).contains(&c),
                "position component {c} of particle {i} outside [-{half}, {half})"
            );
        }
    }
}

#[test]
fn colors_stay_inside_unit_range() {
    let field = ParticleField::generate(7);
    for (i, color) in field.colors().iter().enumerate() {
        for c in color.to_array() {
            assert!(
                (0.0..1.0).contains(&c),
                "color component {c} of particle {i} outside [0, 1)"
            );
        }
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    let a = ParticleField::generate(42);
    let b = ParticleField::generate(42);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());

    let c = ParticleField::generate(43);
    assert_ne!(
        a.positions(),
        c.positions(),
        "different seeds produced identical fields"
    );
}

#[test]
fn rotation_starts_at_zero_and_accumulates_fixed_steps() {
    let mut field = ParticleField::generate(1);
    assert_eq!(field.rotation(), (0.0, 0.0));

    for _ in 0..100 {
        field.rotate();
    }
    let (rx, ry) = field.rotation();
    let expected = 100.0 * ROTATION_STEP_RADIANS;
    assert!((rx - expected).abs() < 1e-6, "x rotation drifted: {rx}");
    assert!((ry - expected).abs() < 1e-6, "y rotation drifted: {ry}");
}

#[test]
fn model_matrix_is_identity_before_any_rotation() {
    let field = ParticleField::generate(1);
    assert!(field.model_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
}

#[test]
fn model_matrix_moves_points_after_rotation() {
    let mut field = ParticleField::generate(1);
    // A quarter-ish turn accumulated one frame step at a time
    for _ in 0..3000 {
        field.rotate();
    }
    let p = glam::Vec3::new(1.0, 2.0, 3.0);
    let rotated = field.model_matrix().transform_point3(p);
    assert!(
        (rotated - p).length() > 1e-3,
        "rotation left the field unchanged"
    );
    // Rotation preserves distance from the origin
    assert!((rotated.length() - p.length()).abs() < 1e-4);
}

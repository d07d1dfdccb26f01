// Shared scene/interaction tuning constants used by the web frontend.

// Hero particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const FIELD_EXTENT: f32 = 10.0; // cube edge length; positions land in [-5, 5)
pub const ROTATION_STEP_RADIANS: f32 = 0.0005; // per frame, applied on X and Y
pub const PARTICLE_SIZE: f32 = 0.05; // world-space quad edge
pub const PARTICLE_OPACITY: f32 = 0.8;

// Hero camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0; // eye distance from the field's origin

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0; // devicePixelRatio cap

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible-area fraction that triggers

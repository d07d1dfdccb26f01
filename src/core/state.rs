//! Pure state shared with the web frontend: the hero camera and the two tiny
//! state machines driven by scroll events.
//!
//! Nothing here touches platform APIs, so the host-side tests exercise these
//! types directly.

use glam::{Mat4, Vec3};

use super::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_Z};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed hero camera: at `(0, 0, CAMERA_Z)` looking at the origin.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Track a viewport resize; aspect becomes `width / height`.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Navbar visibility as driven by scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVisibility {
    Shown,
    Hidden,
}

/// Tracks the last observed scroll offset and derives navbar visibility from
/// the direction of travel. At or above the top the navbar is always shown.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    last_offset: f64,
    visibility: NavVisibility,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            last_offset: 0.0,
            visibility: NavVisibility::Shown,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed one scroll sample. The recorded offset updates unconditionally;
    /// the returned visibility is the state after this sample.
    pub fn observe(&mut self, offset: f64) -> NavVisibility {
        if offset <= 0.0 {
            self.visibility = NavVisibility::Shown;
        } else if offset > self.last_offset && self.visibility == NavVisibility::Shown {
            self.visibility = NavVisibility::Hidden;
        } else if offset < self.last_offset && self.visibility == NavVisibility::Hidden {
            self.visibility = NavVisibility::Shown;
        }
        self.last_offset = offset;
        self.visibility
    }
}

/// One-way reveal flag for a scroll-animated element.
///
/// There is no `Animated -> Pending` transition; an element that has revealed
/// stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Animated,
}

impl RevealState {
    /// Returns true exactly once, on the `Pending -> Animated` edge.
    pub fn mark_visible(&mut self) -> bool {
        match *self {
            RevealState::Pending => {
                *self = RevealState::Animated;
                true
            }
            RevealState::Animated => false,
        }
    }

    pub fn is_animated(self) -> bool {
        matches!(self, RevealState::Animated)
    }
}

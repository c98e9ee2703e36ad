use crate::constants::TILT_DIVISOR;
use glam::Vec2;

/// Square ripple span placed so its centre sits under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

/// `origin` is the element's top-left corner and `pointer` the click, both in
/// client coordinates.
pub fn ripple_geometry(origin: Vec2, extent: Vec2, pointer: Vec2) -> Ripple {
    let size = extent.x.max(extent.y);
    let local = pointer - origin - Vec2::splat(size / 2.0);
    Ripple {
        size,
        left: local.x,
        top: local.y,
    }
}

/// Rotation (x, y) in degrees for the card tilt effect.
pub fn tilt_angles(origin: Vec2, extent: Vec2, pointer: Vec2) -> Vec2 {
    let local = pointer - origin;
    let center = extent / 2.0;
    Vec2::new(
        (local.y - center.y) / TILT_DIVISOR,
        (center.x - local.x) / TILT_DIVISOR,
    )
}

pub fn tilt_transform(angles: Vec2) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale(1.02)",
        angles.x, angles.y
    )
}

pub const TILT_RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";

/// Card lift on hover when the tilt effect is off.
pub const HOVER_LIFT_TRANSFORM: &str = "translateY(-8px) scale(1.02)";
pub const HOVER_LIFT_SHADOW: &str = "0 15px 40px rgba(0, 0, 0, 0.15)";

/// Button hover morph.
pub const BUTTON_MORPH_TRANSFORM: &str = "translateY(-3px) scale(1.05)";
pub const BUTTON_MORPH_SHADOW: &str = "0 10px 40px rgba(0, 0, 0, 0.2)";
pub const BUTTON_REST_SHADOW: &str = "0 4px 18px rgba(26, 34, 56, 0.10)";

/// Resting transform for lifted cards and morphed buttons.
pub const HOVER_REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Transform applied when the pointer enters a card.
#[inline]
pub fn hover_enter_transform(tilt: bool) -> Option<&'static str> {
    (!tilt).then_some(HOVER_LIFT_TRANSFORM)
}

/// Transform restored when the pointer leaves a card.
#[inline]
pub fn hover_leave_transform(tilt: bool) -> &'static str {
    if tilt {
        TILT_RESET_TRANSFORM
    } else {
        HOVER_REST_TRANSFORM
    }
}

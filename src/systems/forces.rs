//! Per-particle forces of the flow field

use crate::core::Vec2;

/// Spatial frequency of the direction field
pub const FIELD_FREQUENCY: f64 = 0.005;
/// Impulse added per frame along the field direction (before the speed multiplier)
pub const FIELD_STRENGTH: f64 = 0.2;
/// Pointer influence radius in CSS pixels
pub const INTERACTION_RADIUS: f64 = 150.0;
pub const REPULSION_GAIN: f64 = 0.05;
/// Velocity retained per frame, per axis
pub const FRICTION: f64 = 0.95;

/// Direction of the field at `pos`, in radians
///
/// `(cos(x*k) + sin(y*k)) * PI` is smooth and deterministic over the plane.
#[inline]
pub fn field_angle(pos: Vec2) -> f64 {
    ((pos.x * FIELD_FREQUENCY).cos() + (pos.y * FIELD_FREQUENCY).sin()) * std::f64::consts::PI
}

/// Velocity impulse the field applies at `pos`
#[inline]
pub fn field_force(pos: Vec2, speed: f64) -> Vec2 {
    Vec2::from_angle(field_angle(pos)) * (FIELD_STRENGTH * speed)
}

/// Linear falloff: 1 at the pointer, 0 at and beyond the radius
#[inline]
pub fn repulsion_strength(distance: f64) -> f64 {
    if distance < INTERACTION_RADIUS {
        (INTERACTION_RADIUS - distance) / INTERACTION_RADIUS
    } else {
        0.0
    }
}

/// Velocity impulse pushing a particle at `pos` away from `pointer`
#[inline]
pub fn repulsion(pos: Vec2, pointer: Vec2) -> Vec2 {
    let delta = pointer - pos;
    let force = repulsion_strength(delta.length());
    if force == 0.0 {
        return Vec2::ZERO;
    }
    delta * (-force * REPULSION_GAIN)
}

#[inline]
pub fn apply_friction(velocity: &mut Vec2) {
    *velocity *= FRICTION;
}

/// Toroidal wrap into `[0, extent)`; a non-positive extent pins to 0
#[inline]
pub fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

use bevy::prelude::*;

/// Number of wave slots in the pool (matches the `waves` uniform array size).
pub const MAX_WAVES: usize = 6;

/// Per-frame smoothing denominator applied to the ship pose.
pub const SHIP_SMOOTHING_FACTOR: f32 = 5.0;
/// How deep the hull sits below the undisturbed surface.
pub const SHIP_DRAFT: f32 = -0.2;
/// Degrees of rendered rotation per radian of tilt.
pub const SHIP_ROTATE_FACTOR: f32 = 20.0;

pub const SHIP_FRONT_OFFSET: Vec2 = Vec2::new(0.2, 0.0);
pub const SHIP_BACK_OFFSET: Vec2 = Vec2::new(-1.0, 0.0);
pub const SHIP_LEFT_OFFSET: Vec2 = Vec2::new(0.0, 0.5);
pub const SHIP_RIGHT_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

pub const TIME_UNIFORM: &str = "time";
pub const VIEW_POS_UNIFORM: &str = "viewPos";
pub const AMBIENT_UNIFORM: &str = "ambient";

pub const DEFAULT_VIEW_POSITION: Vec3 = Vec3 {
    x: 10.0,
    y: 10.0,
    z: 10.0,
};
pub const DEFAULT_AMBIENT: Vec4 = Vec4::new(0.1, 0.1, 0.1, 1.0);

pub const CONFIG_LOAD_ERROR: &str = "Failed to load ocean config";

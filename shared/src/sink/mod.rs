//! Render parameter sink.
//!
//! The sink is whatever mirrors CPU-side wave parameters for the surface
//! shader, usually a uniform table. Parameters are addressed by name once,
//! then written through the resolved handle every frame.

pub mod table;

use std::fmt;

use bevy::math::{Vec2, Vec3, Vec4};

pub use table::UniformTable;

/// Opaque location of a parameter inside a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformHandle(i32);

impl UniformHandle {
    /// Returned for names the sink does not declare. Writes through it are dropped.
    pub const UNRESOLVED: Self = Self(-1);

    /// Handle for a table index. Indices past `i32::MAX` stay unresolved.
    pub fn from_index(index: usize) -> Self {
        i32::try_from(index).map_or(Self::UNRESOLVED, Self)
    }

    pub fn location(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    pub fn is_resolved(self) -> bool {
        self.0 >= 0
    }
}

impl Default for UniformHandle {
    fn default() -> Self {
        Self::UNRESOLVED
    }
}

/// A value written to a sink location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Int(value as i32)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec2> for UniformValue {
    fn from(value: Vec2) -> Self {
        UniformValue::Vec2(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

/// Destination for render parameters.
pub trait RenderParamSink {
    /// Looks a parameter up by name. Unknown names resolve to [`UniformHandle::UNRESOLVED`].
    fn resolve_handle(&mut self, name: &str) -> UniformHandle;

    fn write(&mut self, handle: UniformHandle, value: UniformValue);
}

/// The six per-wave fields mirrored to the sink, in upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveField {
    Enabled,
    Displacement,
    Amplitude,
    Speed,
    Frequency,
    Direction,
}

impl WaveField {
    pub const ALL: [WaveField; 6] = [
        WaveField::Enabled,
        WaveField::Displacement,
        WaveField::Amplitude,
        WaveField::Speed,
        WaveField::Frequency,
        WaveField::Direction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WaveField::Enabled => "enabled",
            WaveField::Displacement => "displacement",
            WaveField::Amplitude => "amplitude",
            WaveField::Speed => "speed",
            WaveField::Frequency => "frequency",
            WaveField::Direction => "direction",
        }
    }
}

impl fmt::Display for WaveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform name of `field` for the wave in `slot`: `waves[<slot>].<field>`.
pub fn wave_uniform_name(slot: usize, field: WaveField) -> String {
    format!("waves[{slot}].{field}")
}

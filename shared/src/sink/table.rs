//! In-memory uniform table used as the render parameter sink.

use std::collections::HashMap;

use bevy_ecs::resource::Resource;

use super::{wave_uniform_name, RenderParamSink, UniformHandle, UniformValue, WaveField};
use crate::constants::{AMBIENT_UNIFORM, TIME_UNIFORM, VIEW_POS_UNIFORM};

/// Uniform table with a fixed set of declared names, like a linked shader program.
///
/// Locations are assigned in declaration order. Writes to unresolved handles
/// are dropped without error.
#[derive(Resource, Debug, Clone, Default)]
pub struct UniformTable {
    locations: HashMap<String, usize>,
    values: Vec<Option<UniformValue>>,
    writes: u64,
}

impl UniformTable {
    pub fn with_uniforms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for name in names {
            table.declare(name);
        }
        table
    }

    /// Table matching the water surface shader: globals plus `wave_slots` wave structs.
    pub fn water_surface(wave_slots: usize) -> Self {
        let mut table =
            Self::with_uniforms([TIME_UNIFORM, VIEW_POS_UNIFORM, AMBIENT_UNIFORM]);
        for slot in 0..wave_slots {
            for field in WaveField::ALL {
                table.declare(wave_uniform_name(slot, field));
            }
        }
        table
    }

    /// Declares `name`, returning its location. Redeclaring keeps the old location.
    pub fn declare(&mut self, name: impl Into<String>) -> usize {
        let next = self.values.len();
        let location = *self.locations.entry(name.into()).or_insert(next);
        if location == next {
            self.values.push(None);
        }
        location
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current value of a declared uniform, `None` if undeclared or never written.
    pub fn value(&self, name: &str) -> Option<UniformValue> {
        let location = *self.locations.get(name)?;
        self.values[location]
    }

    /// Total number of accepted writes.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl RenderParamSink for UniformTable {
    fn resolve_handle(&mut self, name: &str) -> UniformHandle {
        match self.locations.get(name) {
            Some(&location) => UniformHandle::from_index(location),
            None => UniformHandle::UNRESOLVED,
        }
    }

    fn write(&mut self, handle: UniformHandle, value: UniformValue) {
        let Some(slot) = handle.location().and_then(|l| self.values.get_mut(l)) else {
            return;
        };
        *slot = Some(value);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_WAVES;

    #[test]
    fn test_water_surface_declares_all_wave_fields() {
        let mut table = UniformTable::water_surface(MAX_WAVES);
        assert_eq!(table.len(), 3 + MAX_WAVES * WaveField::ALL.len());
        assert!(table.resolve_handle("waves[5].frequency").is_resolved());
        assert!(!table.resolve_handle("waves[6].frequency").is_resolved());
        assert!(table.resolve_handle(TIME_UNIFORM).is_resolved());
    }

    #[test]
    fn test_write_then_read_back() {
        let mut table = UniformTable::with_uniforms(["time"]);
        let handle = table.resolve_handle("time");
        table.write(handle, UniformValue::Float(2.5));
        assert_eq!(table.value("time"), Some(UniformValue::Float(2.5)));
        assert_eq!(table.writes(), 1);
    }

    #[test]
    fn test_unresolved_write_is_dropped() {
        let mut table = UniformTable::with_uniforms(["time"]);
        let handle = table.resolve_handle("missing");
        table.write(handle, UniformValue::Float(1.0));
        assert_eq!(table.writes(), 0);
        assert_eq!(table.value("time"), None);
    }

    #[test]
    fn test_redeclare_keeps_location() {
        let mut table = UniformTable::default();
        let first = table.declare("time");
        let again = table.declare("time");
        assert_eq!(first, again);
        assert_eq!(table.len(), 1);
    }
}

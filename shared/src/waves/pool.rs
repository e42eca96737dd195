//! Fixed-capacity wave pool.

use bevy_ecs::resource::Resource;
use log::{debug, warn};

use super::{sync, WaveGenerator, WaveParams, WaveUniformHandles};
use crate::constants::MAX_WAVES;
use crate::sink::RenderParamSink;

/// Owns up to [`MAX_WAVES`] generators. Slots are filled in order and never freed.
#[derive(Resource, Debug, Clone, Default)]
pub struct WavePool {
    waves: [WaveGenerator; MAX_WAVES],
    count: usize,
}

impl WavePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next slot, binds it to `sink` and uploads its initial values.
    ///
    /// Once every slot is taken this logs a warning and returns an inert
    /// generator; the pool and the sink are left untouched. Callers can only
    /// tell the two outcomes apart through `enabled`.
    ///
    /// `params.direction` must be non-zero.
    pub fn allocate(
        &mut self,
        params: &WaveParams,
        sink: &mut impl RenderParamSink,
    ) -> WaveGenerator {
        if self.is_full() {
            warn!("Trying to create new water wave, but water wave buffer is already full");
            return WaveGenerator::inert();
        }

        let slot = self.count;
        let handles = WaveUniformHandles::resolve(slot, sink);
        let wave = WaveGenerator::new(params, handles);
        sync(&wave, sink);

        self.waves[slot] = wave;
        self.count += 1;
        debug!("Allocated water wave {slot}: {wave:?}");

        wave
    }

    /// Number of allocated slots.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= MAX_WAVES
    }

    /// Every slot, including unfilled ones (which are inert).
    pub fn generators(&self) -> &[WaveGenerator] {
        &self.waves
    }

    /// Allocated slots only.
    pub fn active(&self) -> &[WaveGenerator] {
        &self.waves[..self.count]
    }

    pub fn get(&self, slot: usize) -> Option<&WaveGenerator> {
        self.active().get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{UniformTable, UniformValue};
    use bevy::math::Vec2;

    fn params(i: usize) -> WaveParams {
        WaveParams::new(
            Vec2::ZERO,
            0.1 * (i + 1) as f32,
            1.0 + i as f32,
            0.5,
            Vec2::new(1.0, i as f32 * 0.1),
        )
    }

    #[test]
    fn test_allocate_fills_slots_in_order() {
        let mut table = UniformTable::water_surface(MAX_WAVES);
        let mut pool = WavePool::new();
        assert!(pool.is_empty());

        for i in 0..3 {
            let wave = pool.allocate(&params(i), &mut table);
            assert!(wave.enabled);
            assert_eq!(pool.get(i), Some(&wave));
        }
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.active().len(), 3);
        assert_eq!(pool.generators().len(), MAX_WAVES);
    }

    #[test]
    fn test_allocate_uploads_initial_values() {
        let mut table = UniformTable::water_surface(MAX_WAVES);
        let mut pool = WavePool::new();
        pool.allocate(&params(0), &mut table);
        pool.allocate(&params(1), &mut table);

        assert_eq!(
            table.value("waves[1].amplitude"),
            Some(UniformValue::Float(0.2))
        );
        assert_eq!(
            table.value("waves[1].enabled"),
            Some(UniformValue::Int(1))
        );
        assert_eq!(table.value("waves[2].enabled"), None);
    }

    #[test]
    fn test_seventh_allocation_is_inert() {
        let mut table = UniformTable::water_surface(MAX_WAVES);
        let mut pool = WavePool::new();
        for i in 0..MAX_WAVES {
            pool.allocate(&params(i), &mut table);
        }
        assert!(pool.is_full());
        let snapshot = pool.clone();
        let writes = table.writes();

        let extra = pool.allocate(&params(9), &mut table);

        assert!(!extra.enabled);
        assert_eq!(extra, WaveGenerator::inert());
        assert_eq!(extra.displacement, Vec2::ZERO);
        assert_eq!(extra.amplitude, 0.0);
        assert_eq!(extra.speed, 0.0);
        assert_eq!(extra.frequency, 0.0);
        assert_eq!(extra.direction, Vec2::ZERO);
        assert_eq!(pool.len(), MAX_WAVES);
        assert_eq!(pool.generators(), snapshot.generators());
        assert_eq!(table.writes(), writes);
    }

    #[test]
    fn test_unfilled_slots_are_inert() {
        let mut table = UniformTable::water_surface(MAX_WAVES);
        let mut pool = WavePool::new();
        pool.allocate(&params(0), &mut table);
        assert!(pool.generators()[1..]
            .iter()
            .all(|wave| *wave == WaveGenerator::inert()));
        assert_eq!(pool.get(1), None);
    }
}

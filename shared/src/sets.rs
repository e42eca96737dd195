use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OceanSet {
    /// Clock, ship pose and uniform sync for the frame
    Simulate,
    /// Consumers of the synced uniforms and the filtered pose
    Render,
}

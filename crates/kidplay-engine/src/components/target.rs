use crate::api::types::TargetId;
use glam::Vec2;

/// A single interactive target in a game scene: a stain on the tooth, a toy
/// on the floor, an obstacle on the course. One struct covers all games;
/// `variant` indexes into each game's own pool of kinds.
#[derive(Debug, Clone)]
pub struct Target {
    /// Unique within one scene.
    pub id: TargetId,
    /// Position in normalized surface space (0..100 on both axes).
    /// May leave that range transiently while being dragged.
    pub pos: Vec2,
    /// Visual size; also scales the hit area for grab tests.
    pub size: f32,
    /// Terminal flag: cleaned / stored / passed. Never reverts within
    /// a session once set.
    pub completed: bool,
    /// Index into the owning game's variant pool (stain kind, toy kind,
    /// obstacle kind).
    pub variant: u32,
}

impl Target {
    /// Create a new target at the origin.
    pub fn new(id: TargetId) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            size: 1.0,
            completed: false,
            variant: 0,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_variant(mut self, variant: u32) -> Self {
        self.variant = variant;
        self
    }
}

use crate::api::game::{GameConfig, MiniGame};
use crate::api::types::StickerId;
use crate::core::scene::Scene;
use crate::services::celebration::Topic;
use crate::systems::hit::sweep_proximity;
use crate::systems::rng::Rng;
use crate::systems::spawn::{spawn_targets, SpawnConfig, VariantPolicy};
use glam::Vec2;

const STAIN_COUNT: usize = 18;
const BRUSH_RADIUS: f32 = 10.0;

const SPAWN: SpawnConfig = SpawnConfig {
    count: STAIN_COUNT,
    // Keep stains on the tooth body, away from the edges.
    x_range: (25.0, 75.0),
    y_range: (15.0, 85.0),
    size_range: (20.0, 50.0),
    variants: VariantPolicy::WithReplacement(3),
};

/// What a stain target looks like; purely a rendering hint for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StainKind {
    Bacteria,
    Stain,
    Food,
}

impl StainKind {
    pub fn from_variant(variant: u32) -> Self {
        match variant % 3 {
            0 => StainKind::Bacteria,
            1 => StainKind::Stain,
            _ => StainKind::Food,
        }
    }
}

/// Brush the tooth clean: sweep the brush cursor over every stain.
/// Paint-style proximity game: a fast stroke can clean several stains
/// in one move event.
pub struct ToothGame {
    scene: Scene,
    brush: Vec2,
}

impl ToothGame {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            brush: Vec2::ZERO,
        }
    }

    /// Current brush cursor position for the shell's brush sprite.
    pub fn brush_pos(&self) -> Vec2 {
        self.brush
    }

    /// Stains left to clean, for the HUD counter.
    pub fn remaining(&self) -> usize {
        self.scene.remaining()
    }

    pub fn stains(&self) -> &Scene {
        &self.scene
    }
}

impl Default for ToothGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for ToothGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            sticker: StickerId("sparkly-tooth"),
            topic: Topic::Dental,
        }
    }

    fn reset(&mut self, rng: &mut Rng) {
        self.scene.replace(spawn_targets(rng, &SPAWN));
        self.brush = Vec2::ZERO;
    }

    fn pointer_move(&mut self, p: Vec2) {
        self.brush = p;
        sweep_proximity(&mut self.scene, p, BRUSH_RADIUS);
    }

    fn is_won(&self) -> bool {
        self.scene.all_completed()
    }
}

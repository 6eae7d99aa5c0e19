use crate::api::game::{GameConfig, MiniGame};
use crate::api::types::{StickerId, TargetId};
use crate::core::scene::Scene;
use crate::services::celebration::Topic;
use crate::systems::drag::DragState;
use crate::systems::hit::DropZone;
use crate::systems::rng::Rng;
use crate::systems::spawn::{spawn_targets, SpawnConfig, VariantPolicy};
use glam::Vec2;

const TOY_COUNT: usize = 6;
const TOY_POOL: u32 = 10;
const GRAB_RADIUS: f32 = 8.0;

/// The toy box sits bottom-center; anything released over it is stored.
const BOX_ZONE: DropZone = DropZone::Rect {
    x_min: 35.0,
    x_max: 65.0,
    y_min: 60.0,
    y_max: f32::INFINITY,
};

const SPAWN: SpawnConfig = SpawnConfig {
    count: TOY_COUNT,
    x_range: (10.0, 90.0),
    // Upper half of the surface, clear of the box.
    y_range: (10.0, 50.0),
    size_range: (1.0, 1.0),
    variants: VariantPolicy::DistinctFromPool(TOY_POOL),
};

/// The pool of toy identities; each session draws six distinct ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToyKind {
    TeddyBear,
    ToyCar,
    BeachBall,
    RubiksCube,
    Train,
    RockingHorse,
    Blocks,
    PaperPlane,
    Kite,
    Drum,
}

impl ToyKind {
    pub fn from_variant(variant: u32) -> Self {
        match variant % TOY_POOL {
            0 => ToyKind::TeddyBear,
            1 => ToyKind::ToyCar,
            2 => ToyKind::BeachBall,
            3 => ToyKind::RubiksCube,
            4 => ToyKind::Train,
            5 => ToyKind::RockingHorse,
            6 => ToyKind::Blocks,
            7 => ToyKind::PaperPlane,
            8 => ToyKind::Kite,
            _ => ToyKind::Drum,
        }
    }
}

/// Tidy the room: drag every toy into the toy box. A toy released outside
/// the box stays where it was dropped, unstored.
pub struct ToySortingGame {
    scene: Scene,
    drag: DragState,
}

impl ToySortingGame {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            drag: DragState::new(),
        }
    }

    pub fn toys(&self) -> &Scene {
        &self.scene
    }

    pub fn remaining(&self) -> usize {
        self.scene.remaining()
    }

    /// The toy currently being carried, for the shell's lift effect.
    pub fn carried(&self) -> Option<TargetId> {
        self.drag.active()
    }

    fn grab_candidate(&self, p: Vec2) -> Option<TargetId> {
        // Closest loose toy under the pointer wins.
        self.scene
            .iter()
            .filter(|t| !t.completed && t.pos.distance(p) < GRAB_RADIUS)
            .min_by(|a, b| {
                a.pos
                    .distance(p)
                    .partial_cmp(&b.pos.distance(p))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|t| t.id)
    }
}

impl Default for ToySortingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for ToySortingGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            sticker: StickerId("tidy-room"),
            topic: Topic::Toys,
        }
    }

    fn reset(&mut self, rng: &mut Rng) {
        self.scene.replace(spawn_targets(rng, &SPAWN));
        self.drag = DragState::new();
    }

    fn pointer_down(&mut self, p: Vec2) {
        if let Some(id) = self.grab_candidate(p) {
            if let Some(toy) = self.scene.get(id) {
                self.drag.begin(id, p, toy.pos);
            }
        }
    }

    fn pointer_move(&mut self, p: Vec2) {
        if let Some(id) = self.drag.active() {
            let pos = self.drag.position_for(p);
            if let Some(toy) = self.scene.get_mut(id) {
                toy.pos = pos;
            }
        }
    }

    fn pointer_up(&mut self, p: Vec2) {
        if let Some(id) = self.drag.take() {
            let pos = self.drag.position_for(p);
            if let Some(toy) = self.scene.get_mut(id) {
                toy.pos = pos;
                if BOX_ZONE.contains(toy.pos) {
                    toy.completed = true;
                }
            }
        }
    }

    fn pointer_cancel(&mut self) {
        // Pointer left the surface: no release attempt, the toy keeps its
        // last position.
        self.drag.cancel();
    }

    fn is_won(&self) -> bool {
        self.scene.all_completed()
    }
}

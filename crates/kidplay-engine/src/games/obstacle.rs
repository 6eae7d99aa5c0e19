use crate::api::game::{GameConfig, MiniGame};
use crate::api::types::{StickerId, TargetId};
use crate::components::target::Target;
use crate::core::scene::Scene;
use crate::services::celebration::Topic;
use crate::systems::rng::Rng;
use glam::Vec2;

const GRAB_RADIUS: f32 = 8.0;
const PASS_RADIUS: f32 = 10.0;
/// The finish line: the runner must get above this y.
const GOAL_Y: f32 = 10.0;
const START_POS: Vec2 = Vec2::new(50.0, 90.0);

/// Obstacle rows from bottom to top; x is randomized within the course.
const ROW_YS: [f32; 3] = [70.0, 45.0, 20.0];
const ROW_X_RANGE: (f32, f32) = (30.0, 70.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Pillow,
    Chair,
}

impl ObstacleKind {
    pub fn from_variant(variant: u32) -> Self {
        if variant % 2 == 0 {
            ObstacleKind::Pillow
        } else {
            ObstacleKind::Chair
        }
    }
}

/// Drag the runner from the bottom of the room to the finish flag, weaving
/// close past every obstacle on the way. Winning needs both: all obstacles
/// passed and the runner above the goal line.
pub struct ObstacleCourseGame {
    obstacles: Scene,
    runner: Vec2,
    dragging: bool,
}

impl ObstacleCourseGame {
    pub fn new() -> Self {
        Self {
            obstacles: Scene::new(),
            runner: START_POS,
            dragging: false,
        }
    }

    pub fn obstacles(&self) -> &Scene {
        &self.obstacles
    }

    pub fn runner_pos(&self) -> Vec2 {
        self.runner
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn passed_count(&self) -> usize {
        self.obstacles.len() - self.obstacles.remaining()
    }
}

impl Default for ObstacleCourseGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for ObstacleCourseGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            sticker: StickerId("little-racer"),
            topic: Topic::Obstacle,
        }
    }

    fn reset(&mut self, rng: &mut Rng) {
        let mut obstacles = Vec::with_capacity(ROW_YS.len());
        for (i, &y) in ROW_YS.iter().enumerate() {
            obstacles.push(
                Target::new(TargetId(i as u32))
                    .with_pos(Vec2::new(
                        rng.next_range(ROW_X_RANGE.0, ROW_X_RANGE.1),
                        y,
                    ))
                    .with_variant(i as u32),
            );
        }
        self.obstacles.replace(obstacles);
        self.runner = START_POS;
        self.dragging = false;
    }

    fn pointer_down(&mut self, p: Vec2) {
        if p.distance(self.runner) < GRAB_RADIUS {
            self.dragging = true;
        }
    }

    fn pointer_move(&mut self, p: Vec2) {
        if !self.dragging {
            return;
        }
        // The runner stays on the course even when the pointer overshoots.
        self.runner = Vec2::new(p.x.clamp(10.0, 90.0), p.y.clamp(5.0, 95.0));

        // Passing is judged against the raw pointer path, so skimming an
        // obstacle near the course edge still counts.
        for obstacle in self.obstacles.iter_mut() {
            if !obstacle.completed && obstacle.pos.distance(p) < PASS_RADIUS {
                obstacle.completed = true;
            }
        }
    }

    fn pointer_up(&mut self, _p: Vec2) {
        self.dragging = false;
    }

    fn pointer_cancel(&mut self) {
        // Runner stays at its last on-course position.
        self.dragging = false;
    }

    fn is_won(&self) -> bool {
        self.runner.y < GOAL_Y && self.obstacles.all_completed()
    }
}

use crate::api::game::{GameConfig, MiniGame};
use crate::api::types::StickerId;
use crate::core::ticker::ProgressTicker;
use crate::services::celebration::Topic;
use crate::systems::hit::DropZone;
use crate::systems::rng::Rng;
use glam::Vec2;

/// Growth per second while the can is pouring over the plant.
const GROWTH_RATE: f32 = 20.0;

/// Where the plant sits; watering only counts inside this region.
const PLANT_ZONE: DropZone = DropZone::Rect {
    x_min: 35.0,
    x_max: 65.0,
    y_min: 30.0,
    y_max: 70.0,
};

/// Art stage for the shell: sprout, potted plant, blooming flower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStage {
    Sprout,
    Potted,
    Bloom,
}

/// Hold the watering can over the plant until it blooms. Progress accrues
/// only while the pointer stays in the plant zone; the ticker is reset on
/// every round start so no stale accrual survives a restart.
pub struct PlantWateringGame {
    growth: ProgressTicker,
    can_pos: Vec2,
    watering: bool,
}

impl PlantWateringGame {
    pub fn new() -> Self {
        Self {
            growth: ProgressTicker::new(GROWTH_RATE),
            can_pos: Vec2::new(50.0, 30.0),
            watering: false,
        }
    }

    /// Growth progress, 0..=100, for the HUD meter.
    pub fn growth(&self) -> f32 {
        self.growth.value()
    }

    /// Whether water is currently pouring (can is over the plant).
    pub fn is_watering(&self) -> bool {
        self.watering
    }

    /// Watering-can cursor position for the shell.
    pub fn can_pos(&self) -> Vec2 {
        self.can_pos
    }

    pub fn stage(&self) -> GrowthStage {
        let g = self.growth.value();
        if g < 30.0 {
            GrowthStage::Sprout
        } else if g < 70.0 {
            GrowthStage::Potted
        } else {
            GrowthStage::Bloom
        }
    }
}

impl Default for PlantWateringGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for PlantWateringGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            sticker: StickerId("green-thumb"),
            topic: Topic::Plants,
        }
    }

    fn reset(&mut self, _rng: &mut Rng) {
        self.growth.reset();
        self.can_pos = Vec2::new(50.0, 30.0);
        self.watering = false;
    }

    fn pointer_move(&mut self, p: Vec2) {
        self.can_pos = p;
        self.watering = PLANT_ZONE.contains(p);
    }

    fn pointer_cancel(&mut self) {
        // Pointer left the surface; without this the gate would stay open
        // and growth would keep ticking with no pointer on screen.
        self.watering = false;
    }

    fn tick(&mut self, dt: f32) {
        if self.watering {
            self.growth.accrue(dt);
        }
    }

    fn is_won(&self) -> bool {
        self.growth.done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn fresh_game() -> PlantWateringGame {
        let mut game = PlantWateringGame::new();
        game.reset(&mut Rng::new(1));
        game
    }

    #[test]
    fn growth_accrues_only_over_the_plant() {
        let mut game = fresh_game();

        game.pointer_move(Vec2::new(10.0, 10.0));
        for _ in 0..60 {
            game.tick(DT);
        }
        assert_eq!(game.growth(), 0.0);
        assert!(!game.is_watering());

        game.pointer_move(Vec2::new(50.0, 50.0));
        assert!(game.is_watering());
        for _ in 0..60 {
            game.tick(DT);
        }
        assert!(game.growth() > 19.0 && game.growth() < 21.0);
    }

    #[test]
    fn leaving_the_zone_stops_the_pour() {
        let mut game = fresh_game();
        game.pointer_move(Vec2::new(50.0, 50.0));
        game.tick(1.0);
        let before = game.growth();

        game.pointer_move(Vec2::new(80.0, 50.0));
        game.tick(1.0);
        assert_eq!(game.growth(), before);
    }

    #[test]
    fn pointer_cancel_closes_the_gate() {
        let mut game = fresh_game();
        game.pointer_move(Vec2::new(50.0, 50.0));
        game.pointer_cancel();
        game.tick(5.0);
        assert_eq!(game.growth(), 0.0);
    }

    #[test]
    fn full_growth_wins_and_stages_advance() {
        let mut game = fresh_game();
        assert_eq!(game.stage(), GrowthStage::Sprout);

        game.pointer_move(Vec2::new(50.0, 50.0));
        game.tick(2.0); // 40%
        assert_eq!(game.stage(), GrowthStage::Potted);
        game.tick(2.0); // 80%
        assert_eq!(game.stage(), GrowthStage::Bloom);
        assert!(!game.is_won());
        game.tick(2.0); // capped at 100%
        assert!(game.is_won());
        assert_eq!(game.growth(), 100.0);
    }

    #[test]
    fn reset_discards_growth() {
        let mut game = fresh_game();
        game.pointer_move(Vec2::new(50.0, 50.0));
        game.tick(3.0);
        game.reset(&mut Rng::new(1));
        assert_eq!(game.growth(), 0.0);
        assert!(!game.is_watering());
    }
}

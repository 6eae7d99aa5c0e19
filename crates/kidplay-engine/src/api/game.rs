use crate::api::types::StickerId;
use crate::services::celebration::Topic;
use crate::systems::rng::Rng;
use glam::Vec2;

/// Static configuration a mini-game hands the session runner.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Sticker unlocked when this game's session completes.
    pub sticker: StickerId,
    /// Topic for the celebration tips/message requests.
    pub topic: Topic,
}

/// The core contract every mini-game fulfills.
///
/// All positions are in normalized surface space (0..100 on both axes); the
/// session runner maps client pixels before calling in, and drops every
/// pointer event while the session is not in the playing phase, so games
/// never see input outside an active round.
pub trait MiniGame {
    /// Sticker and celebration topic for this game.
    fn config(&self) -> GameConfig;

    /// Discard all round state and generate a fresh scene.
    /// Called on every start-of-round transition.
    fn reset(&mut self, rng: &mut Rng);

    /// A touch/click began.
    fn pointer_down(&mut self, _p: Vec2) {}

    /// The pointer moved while down or hovering.
    fn pointer_move(&mut self, _p: Vec2) {}

    /// The touch/click ended.
    fn pointer_up(&mut self, _p: Vec2) {}

    /// The pointer left the surface entirely (window blur, finger off the
    /// edge). Drags abort, hold-gates close; no release is evaluated.
    fn pointer_cancel(&mut self) {}

    /// Fixed-timestep tick for games with time-driven state (watering
    /// accrual, ball flight).
    fn tick(&mut self, _dt: f32) {}

    /// The game-specific win predicate. Checked by the runner after every
    /// input event and tick.
    fn is_won(&self) -> bool;

    /// Current score, for games that keep one (ball-toss).
    fn score(&self) -> Option<u32> {
        None
    }
}

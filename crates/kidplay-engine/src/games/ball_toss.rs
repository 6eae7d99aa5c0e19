use crate::api::game::{GameConfig, MiniGame};
use crate::api::types::StickerId;
use crate::services::celebration::Topic;
use crate::systems::rng::Rng;
use glam::Vec2;

const THROW_COUNT: u32 = 10;
/// Minimum upward drag delta for a release to count as a throw.
const THROW_THRESHOLD: f32 = 30.0;
/// Horizontal drag delta scales down to the landing offset.
const AIM_SCALE: f32 = 5.0;
/// A landing within this horizontal margin of the basket scores.
const HIT_MARGIN: f32 = 12.0;
const FLIGHT_TIME: f32 = 0.4;
const SETTLE_TIME: f32 = 0.8;
const REST_POS: Vec2 = Vec2::new(50.0, 85.0);
const BASKET_Y: f32 = 20.0;
const BASKET_X_RANGE: (f32, f32) = (20.0, 80.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum TossPhase {
    /// Ball at rest, waiting for a swipe.
    Aiming,
    /// Finger down, tracking the swipe.
    Dragging { start: Vec2, current: Vec2 },
    /// Ball in the air toward `target_x`.
    Flying { target_x: f32, timer: f32 },
    /// Post-landing pause before the next ball (or the end of the round).
    Settling { timer: f32 },
}

/// Swipe up from the ball to toss it at the basket. Balls are consumed one
/// per throw; the round ends when all ten are thrown, hit or miss. The
/// basket hops to a new spot after every throw.
pub struct BallTossGame {
    phase: TossPhase,
    rng: Rng,
    basket_x: f32,
    ball_pos: Vec2,
    score: u32,
    throws_left: u32,
    finished: bool,
}

impl BallTossGame {
    pub fn new() -> Self {
        Self {
            phase: TossPhase::Aiming,
            rng: Rng::new(1),
            basket_x: 50.0,
            ball_pos: REST_POS,
            score: 0,
            throws_left: THROW_COUNT,
            finished: false,
        }
    }

    pub fn basket_x(&self) -> f32 {
        self.basket_x
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.ball_pos
    }

    pub fn throws_left(&self) -> u32 {
        self.throws_left
    }

    /// Current swipe vector while aiming, for the shell's guide arrow.
    /// Only present while the swipe points upward.
    pub fn aim(&self) -> Option<Vec2> {
        match self.phase {
            TossPhase::Dragging { start, current } if current.y < start.y => {
                Some(current - start)
            }
            _ => None,
        }
    }

    fn resolve_landing(&mut self, target_x: f32) {
        if (target_x - self.basket_x).abs() < HIT_MARGIN {
            self.score += 1;
        }
        self.throws_left -= 1;
        self.ball_pos = Vec2::new(target_x, BASKET_Y);
        self.phase = TossPhase::Settling {
            timer: SETTLE_TIME,
        };
    }
}

impl Default for BallTossGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for BallTossGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            sticker: StickerId("hoop-star"),
            topic: Topic::BallToss,
        }
    }

    fn reset(&mut self, rng: &mut Rng) {
        // The game keeps its own stream so basket hops stay deterministic
        // per round seed.
        self.rng = Rng::new(rng.next_u64());
        self.phase = TossPhase::Aiming;
        self.basket_x = 50.0;
        self.ball_pos = REST_POS;
        self.score = 0;
        self.throws_left = THROW_COUNT;
        self.finished = false;
    }

    fn pointer_down(&mut self, p: Vec2) {
        if self.phase == TossPhase::Aiming {
            self.phase = TossPhase::Dragging {
                start: p,
                current: p,
            };
        }
    }

    fn pointer_move(&mut self, p: Vec2) {
        if let TossPhase::Dragging { start, .. } = self.phase {
            self.phase = TossPhase::Dragging { start, current: p };
        }
    }

    fn pointer_up(&mut self, p: Vec2) {
        if let TossPhase::Dragging { start, .. } = self.phase {
            let delta = p - start;
            if delta.y < -THROW_THRESHOLD {
                self.phase = TossPhase::Flying {
                    target_x: 50.0 + delta.x / AIM_SCALE,
                    timer: FLIGHT_TIME,
                };
            } else {
                // Not enough of an upward swipe: no ball is spent.
                self.phase = TossPhase::Aiming;
            }
        }
    }

    fn pointer_cancel(&mut self) {
        if matches!(self.phase, TossPhase::Dragging { .. }) {
            self.phase = TossPhase::Aiming;
        }
    }

    fn tick(&mut self, dt: f32) {
        match self.phase {
            TossPhase::Flying { target_x, timer } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    self.resolve_landing(target_x);
                } else {
                    let t = 1.0 - timer / FLIGHT_TIME;
                    self.ball_pos = REST_POS.lerp(Vec2::new(target_x, BASKET_Y), t);
                    self.phase = TossPhase::Flying { target_x, timer };
                }
            }
            TossPhase::Settling { timer } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    if self.throws_left == 0 {
                        self.finished = true;
                    } else {
                        self.basket_x =
                            self.rng.next_range(BASKET_X_RANGE.0, BASKET_X_RANGE.1);
                        self.ball_pos = REST_POS;
                        self.phase = TossPhase::Aiming;
                    }
                } else {
                    self.phase = TossPhase::Settling { timer };
                }
            }
            _ => {}
        }
    }

    fn is_won(&self) -> bool {
        // Throw count exhausted ends the round regardless of score.
        self.finished
    }

    fn score(&self) -> Option<u32> {
        Some(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn fresh_game() -> BallTossGame {
        let mut game = BallTossGame::new();
        game.reset(&mut Rng::new(42));
        game
    }

    /// Swipe up with a horizontal delta of `dx`, then run the flight and
    /// settle phases to completion.
    fn throw(game: &mut BallTossGame, dx: f32) {
        let start = Vec2::new(50.0, 85.0);
        game.pointer_down(start);
        game.pointer_move(start + Vec2::new(dx, -45.0));
        game.pointer_up(start + Vec2::new(dx, -45.0));
        for _ in 0..((FLIGHT_TIME + SETTLE_TIME) / DT) as u32 + 2 {
            game.tick(DT);
        }
    }

    #[test]
    fn near_miss_margin_scores_and_wide_miss_does_not() {
        let mut game = fresh_game();
        game.basket_x = 50.0;

        // Lands at x = 50 + 25/5 = 55: inside the 12-unit margin.
        throw(&mut game, 25.0);
        assert_eq!(game.score(), Some(1));

        // Lands at x = 50 + 150/5 = 80 against a re-centered basket: miss.
        game.basket_x = 50.0;
        throw(&mut game, 150.0);
        assert_eq!(game.score(), Some(1));
        assert_eq!(game.throws_left(), 8);
    }

    #[test]
    fn weak_swipe_is_not_a_throw() {
        let mut game = fresh_game();
        let start = Vec2::new(50.0, 85.0);
        game.pointer_down(start);
        game.pointer_move(start + Vec2::new(0.0, -10.0));
        game.pointer_up(start + Vec2::new(0.0, -10.0));
        assert_eq!(game.throws_left(), THROW_COUNT);
        assert_eq!(game.ball_pos(), REST_POS);
    }

    #[test]
    fn downward_swipe_is_rejected() {
        let mut game = fresh_game();
        game.pointer_down(Vec2::new(50.0, 85.0));
        game.pointer_up(Vec2::new(50.0, 95.0));
        assert_eq!(game.throws_left(), THROW_COUNT);
    }

    #[test]
    fn aim_arrow_only_shows_upward_swipes() {
        let mut game = fresh_game();
        let start = Vec2::new(50.0, 85.0);
        game.pointer_down(start);
        assert_eq!(game.aim(), None);
        game.pointer_move(start + Vec2::new(5.0, -20.0));
        assert_eq!(game.aim(), Some(Vec2::new(5.0, -20.0)));
        game.pointer_move(start + Vec2::new(5.0, 20.0));
        assert_eq!(game.aim(), None);
    }

    #[test]
    fn basket_moves_between_throws() {
        let mut game = fresh_game();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(game.basket_x());
            throw(&mut game, 0.0);
        }
        seen.dedup();
        assert!(seen.len() > 1, "basket never moved");
        for &x in &seen {
            assert!((20.0..80.0).contains(&x));
        }
    }

    #[test]
    fn ten_throws_end_the_round_regardless_of_score() {
        let mut game = fresh_game();
        for _ in 0..THROW_COUNT {
            assert!(!game.is_won());
            // Aim far off to the side so nothing scores.
            throw(&mut game, 300.0);
        }
        assert_eq!(game.throws_left(), 0);
        assert!(game.is_won());
        assert_eq!(game.score(), Some(0));
    }

    #[test]
    fn input_during_flight_is_ignored() {
        let mut game = fresh_game();
        let start = Vec2::new(50.0, 85.0);
        game.pointer_down(start);
        game.pointer_up(start + Vec2::new(0.0, -45.0));
        assert!(matches!(game.phase, TossPhase::Flying { .. }));

        game.pointer_down(start);
        assert!(matches!(game.phase, TossPhase::Flying { .. }));
    }

    #[test]
    fn a_full_round_reaches_the_finished_screen() {
        use crate::core::surface::SurfaceRect;
        use crate::services::celebration::OfflineCelebration;
        use crate::session::machine::{Phase, Session};

        let surface = SurfaceRect::new(0.0, 0.0, 100.0, 100.0);
        let mut session = Session::new(BallTossGame::new(), OfflineCelebration::new(), 9);
        assert!(session.submit_name("Nam"));

        for _ in 0..THROW_COUNT {
            session.pointer_down(Vec2::new(50.0, 85.0), &surface);
            session.pointer_up(Vec2::new(50.0, 40.0), &surface);
            for _ in 0..80 {
                session.tick(DT);
            }
        }

        assert_eq!(session.phase(), Phase::Finished);
        session.tick(DT);
        assert!(!session.celebration().is_loading());
        assert!(session.celebration().tips().is_some());
        assert!(session.celebration().message().unwrap().contains("Nam"));
    }

    #[test]
    fn reset_restores_a_full_rack() {
        let mut game = fresh_game();
        throw(&mut game, 0.0);
        game.reset(&mut Rng::new(43));
        assert_eq!(game.throws_left(), THROW_COUNT);
        assert_eq!(game.score(), Some(0));
        assert_eq!(game.ball_pos(), REST_POS);
        assert!(!game.is_won());
    }
}

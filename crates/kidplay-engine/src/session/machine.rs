use crate::api::game::MiniGame;
use crate::api::types::ShellEvent;
use crate::core::surface::SurfaceRect;
use crate::services::celebration::{
    fallback_message, fallback_tips, CelebrationReply, CelebrationService, RequestId, Tip,
};
use crate::systems::rng::Rng;
use glam::Vec2;
use log::debug;

/// Session lifecycle phases. The only legal transitions are
/// Start → Playing (name submitted), Playing → Finished (win predicate),
/// and Finished → Start (explicit restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting the player name; no scene exists.
    Start,
    /// Scene active, input live.
    Playing,
    /// Scene frozen, input ignored, celebration fetch in flight or done.
    Finished,
}

/// One asynchronous fetch slot on the finished screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchSlot<T> {
    Idle,
    Loading,
    Ready(T),
}

impl<T> FetchSlot<T> {
    fn ready(&self) -> Option<&T> {
        match self {
            FetchSlot::Ready(v) => Some(v),
            _ => None,
        }
    }
}

/// What the finished screen has to show: tips and the congratulatory
/// message, each independently loading until its reply (or fallback)
/// lands.
#[derive(Debug, Clone)]
pub struct CelebrationView {
    tips: FetchSlot<Vec<Tip>>,
    message: FetchSlot<String>,
}

impl CelebrationView {
    fn idle() -> Self {
        Self {
            tips: FetchSlot::Idle,
            message: FetchSlot::Idle,
        }
    }

    fn loading() -> Self {
        Self {
            tips: FetchSlot::Loading,
            message: FetchSlot::Loading,
        }
    }

    /// True while either request is still unresolved.
    pub fn is_loading(&self) -> bool {
        matches!(self.tips, FetchSlot::Loading) || matches!(self.message, FetchSlot::Loading)
    }

    pub fn tips(&self) -> Option<&[Tip]> {
        self.tips.ready().map(|v| v.as_slice())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.ready().map(|s| s.as_str())
    }
}

/// Generic session runner: owns one mini-game, drives its lifecycle, maps
/// pointer input onto the surface, watches the win predicate, and talks to
/// the celebration service. Each mounted game gets its own session;
/// nothing is shared between them.
pub struct Session<G: MiniGame, S: CelebrationService> {
    phase: Phase,
    player_name: String,
    game: G,
    service: S,
    rng: Rng,
    /// Bumped on every round start; tags celebration requests so replies
    /// that arrive after a restart are recognized as stale.
    stamp: u32,
    events: Vec<ShellEvent>,
    celebration: CelebrationView,
    last_score: Option<u32>,
}

impl<G: MiniGame, S: CelebrationService> Session<G, S> {
    pub fn new(game: G, service: S, seed: u64) -> Self {
        Self {
            phase: Phase::Start,
            player_name: String::new(),
            game,
            service,
            rng: Rng::new(seed),
            stamp: 0,
            events: Vec::new(),
            celebration: CelebrationView::idle(),
            last_score: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable game access for shell-side setup while on the start screen
    /// (role-play job selection).
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn celebration(&self) -> &CelebrationView {
        &self.celebration
    }

    /// Drain events for the shell. Called once per frame by the host.
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }

    /// Submit the player name and start the round. Returns false (and stays
    /// in Start) when the trimmed name is empty, surfaced shell-side as a
    /// rejected submit, never as an error.
    pub fn submit_name(&mut self, name: &str) -> bool {
        if self.phase != Phase::Start {
            return false;
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.player_name = trimmed.to_string();
        self.stamp = self.stamp.wrapping_add(1);
        self.celebration = CelebrationView::idle();
        self.last_score = None;
        self.game.reset(&mut self.rng);
        self.phase = Phase::Playing;
        debug!("session {} started for {trimmed:?}", self.stamp);
        true
    }

    /// Explicit restart from the finished screen. Discards the scene and
    /// all per-round state; the next round gets a freshly randomized scene.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Finished {
            return false;
        }
        self.phase = Phase::Start;
        self.celebration = CelebrationView::idle();
        debug!("session {} reset to start", self.stamp);
        true
    }

    pub fn pointer_down(&mut self, client: Vec2, surface: &SurfaceRect) {
        if self.phase != Phase::Playing {
            return;
        }
        let p = surface.normalize(client);
        self.game.pointer_down(p);
        self.after_game_step();
    }

    pub fn pointer_move(&mut self, client: Vec2, surface: &SurfaceRect) {
        if self.phase != Phase::Playing {
            return;
        }
        let p = surface.normalize(client);
        self.game.pointer_move(p);
        self.after_game_step();
    }

    pub fn pointer_up(&mut self, client: Vec2, surface: &SurfaceRect) {
        if self.phase != Phase::Playing {
            return;
        }
        let p = surface.normalize(client);
        self.game.pointer_up(p);
        self.after_game_step();
    }

    /// Pointer left the surface (or the window lost the capture). Forwarded
    /// even though it carries no position; games abort drags and close
    /// hold-gates.
    pub fn pointer_cancel(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.game.pointer_cancel();
        self.after_game_step();
    }

    /// Fixed-timestep tick. Advances time-driven game state while playing
    /// and polls the celebration service in every phase, so late replies
    /// are still collected (and stale ones dropped) after a restart.
    pub fn tick(&mut self, dt: f32) {
        if self.phase == Phase::Playing {
            self.game.tick(dt);
            self.after_game_step();
        }
        self.poll_celebration();
    }

    fn after_game_step(&mut self) {
        if let Some(score) = self.game.score() {
            if self.last_score != Some(score) {
                self.last_score = Some(score);
                self.events.push(ShellEvent::ScoreChanged(score));
            }
        }
        if self.phase == Phase::Playing && self.game.is_won() {
            self.finish();
        }
    }

    /// Playing → Finished. Runs exactly once per round: the win predicate
    /// can only be observed in Playing and this immediately leaves it.
    fn finish(&mut self) {
        self.phase = Phase::Finished;
        let config = self.game.config();
        self.events.push(ShellEvent::StickerUnlocked(config.sticker));

        // Both requests go out together; the finished screen shows its
        // loading indicator until each resolves or falls back.
        let req = RequestId(self.stamp);
        self.celebration = CelebrationView::loading();
        self.service.request_tips(req, config.topic);
        self.service
            .request_message(req, &self.player_name, config.topic);
        debug!("session {} finished, sticker {:?}", self.stamp, config.sticker);
    }

    fn poll_celebration(&mut self) {
        let topic = self.game.config().topic;
        for reply in self.service.poll() {
            match reply {
                CelebrationReply::Tips(req, result) => {
                    if req.0 != self.stamp {
                        debug!("dropping stale tips reply for session {}", req.0);
                        continue;
                    }
                    let tips = result.unwrap_or_else(|e| {
                        log::warn!("tips request failed, using fallback: {e}");
                        fallback_tips(topic)
                    });
                    self.celebration.tips = FetchSlot::Ready(tips);
                }
                CelebrationReply::Message(req, result) => {
                    if req.0 != self.stamp {
                        debug!("dropping stale message reply for session {}", req.0);
                        continue;
                    }
                    let message = result.unwrap_or_else(|e| {
                        log::warn!("message request failed, using fallback: {e}");
                        fallback_message(&self.player_name, topic)
                    });
                    self.celebration.message = FetchSlot::Ready(message);
                }
            }
        }
    }
}

/// Gated progress accumulator for hold-to-progress games (plant watering).
///
/// The caller accrues only while its gate condition holds (pointer inside
/// the watering zone) and must call `reset` on every session transition,
/// so a stale ticker can never carry progress across a restart.
#[derive(Debug, Clone)]
pub struct ProgressTicker {
    /// Progress units per second while accruing.
    rate: f32,
    value: f32,
}

impl ProgressTicker {
    pub fn new(rate: f32) -> Self {
        Self { rate, value: 0.0 }
    }

    /// Advance progress by one tick's worth of time. Saturates at 100.
    pub fn accrue(&mut self, dt: f32) {
        self.value = (self.value + self.rate * dt).min(100.0);
    }

    /// Add a fixed amount of progress (tap-based games). Saturates at 100.
    pub fn add(&mut self, amount: f32) {
        self.value = (self.value + amount).min(100.0);
    }

    /// Current progress in 0..=100.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether progress has reached its maximum.
    pub fn done(&self) -> bool {
        self.value >= 100.0
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

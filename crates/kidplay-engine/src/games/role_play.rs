use crate::api::game::{GameConfig, MiniGame};
use crate::api::types::{StickerId, TargetId};
use crate::components::target::Target;
use crate::core::scene::Scene;
use crate::core::ticker::ProgressTicker;
use crate::services::celebration::Topic;
use crate::systems::rng::Rng;
use glam::Vec2;

/// Progress per completed tool action; three actions cap out at 100.
const TOOL_STEP: f32 = 34.0;
const TAP_RADIUS: f32 = 8.0;
/// Tools sit on a tray along the bottom of the scene.
const TOOL_XS: [f32; 3] = [30.0, 50.0, 70.0];
const TOOL_Y: f32 = 75.0;

/// The pretend jobs a child can pick on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Doctor,
    Chef,
    Cashier,
}

impl Job {
    /// The three tools this job uses, in tray order. The shell maps these
    /// to icons; the engine only needs them distinct.
    pub fn tools(&self) -> [&'static str; 3] {
        match self {
            Job::Doctor => ["stethoscope", "thermometer", "bandage"],
            Job::Chef => ["carrot", "tomato", "broccoli"],
            Job::Cashier => ["milk", "bread", "apple"],
        }
    }
}

/// Play a grown-up for a day: tap each of the job's three tools in any
/// order to finish the task. Used tools go gray and cannot be tapped twice.
pub struct RolePlayGame {
    job: Job,
    tools: Scene,
    progress: ProgressTicker,
}

impl RolePlayGame {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            tools: Scene::new(),
            progress: ProgressTicker::new(0.0),
        }
    }

    pub fn job(&self) -> Job {
        self.job
    }

    /// Pick a different job. Takes effect on the next round; the session
    /// only calls `reset` when leaving the start screen.
    pub fn set_job(&mut self, job: Job) {
        self.job = job;
    }

    pub fn tools(&self) -> &Scene {
        &self.tools
    }

    /// Task progress, 0..=100, for the HUD meter.
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }
}

impl MiniGame for RolePlayGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            sticker: StickerId("dream-job"),
            topic: Topic::RolePlay,
        }
    }

    fn reset(&mut self, _rng: &mut Rng) {
        let tools = TOOL_XS
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                Target::new(TargetId(i as u32))
                    .with_pos(Vec2::new(x, TOOL_Y))
                    .with_variant(i as u32)
            })
            .collect();
        self.tools.replace(tools);
        self.progress.reset();
    }

    fn pointer_down(&mut self, p: Vec2) {
        for tool in self.tools.iter_mut() {
            if !tool.completed && tool.pos.distance(p) < TAP_RADIUS {
                tool.completed = true;
                self.progress.add(TOOL_STEP);
                break;
            }
        }
    }

    fn is_won(&self) -> bool {
        self.progress.done()
    }
}

pub mod api;
pub mod components;
pub mod core;
pub mod games;
pub mod services;
pub mod session;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::game::{GameConfig, MiniGame};
pub use crate::api::types::{ShellEvent, StickerId, TargetId};
pub use crate::components::target::Target;
pub use crate::core::scene::Scene;
pub use crate::core::surface::SurfaceRect;
pub use crate::core::ticker::ProgressTicker;
pub use crate::services::celebration::{
    CelebrationError, CelebrationReply, CelebrationService, OfflineCelebration, RequestId, Tip,
    Topic,
};
pub use crate::session::machine::{CelebrationView, FetchSlot, Phase, Session};
pub use crate::systems::drag::DragState;
pub use crate::systems::hit::{sweep_proximity, DropZone};
pub use crate::systems::rng::Rng;
pub use crate::systems::spawn::{spawn_targets, SpawnConfig, VariantPolicy};

pub use crate::games::{
    BallTossGame, GrowthStage, Job, ObstacleCourseGame, ObstacleKind, PlantWateringGame,
    RolePlayGame, StainKind, ToothGame, ToyKind, ToySortingGame,
};

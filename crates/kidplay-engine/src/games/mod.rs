// The six mini-games. Each one composes the shared pieces (spawn config,
// hit evaluation, drag state, progress ticker) with its own scene layout
// and win predicate; the session runner drives them all the same way.

pub mod ball_toss;
pub mod obstacle;
pub mod plant;
pub mod role_play;
pub mod tooth;
pub mod toys;

pub use ball_toss::BallTossGame;
pub use obstacle::{ObstacleCourseGame, ObstacleKind};
pub use plant::{GrowthStage, PlantWateringGame};
pub use role_play::{Job, RolePlayGame};
pub use tooth::{StainKind, ToothGame};
pub use toys::{ToyKind, ToySortingGame};

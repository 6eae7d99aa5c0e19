use crate::core::scene::Scene;
use glam::Vec2;

/// Mark every uncompleted target within `radius` of the pointer as
/// completed. Returns how many were newly completed this sweep.
///
/// The whole scene is checked on every call: a fast swipe can pass through
/// several targets between two move events, and all of them must count.
/// Already-completed targets never re-trigger.
pub fn sweep_proximity(scene: &mut Scene, pointer: Vec2, radius: f32) -> u32 {
    let mut hits = 0;
    for target in scene.iter_mut() {
        if !target.completed && pointer.distance(target.pos) < radius {
            target.completed = true;
            hits += 1;
        }
    }
    hits
}

/// A fixed region a dragged target must be released inside to count.
#[derive(Debug, Clone, Copy)]
pub enum DropZone {
    /// Axis-aligned rectangle in surface units.
    Rect {
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
    },
    /// Circular zone (basket, pot).
    Circle { center: Vec2, radius: f32 },
}

impl DropZone {
    pub fn contains(&self, p: Vec2) -> bool {
        match *self {
            DropZone::Rect {
                x_min,
                x_max,
                y_min,
                y_max,
            } => p.x >= x_min && p.x <= x_max && p.y >= y_min && p.y <= y_max,
            DropZone::Circle { center, radius } => p.distance(center) < radius,
        }
    }
}

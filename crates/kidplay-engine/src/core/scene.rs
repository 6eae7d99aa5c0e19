use crate::api::types::TargetId;
use crate::components::target::Target;

/// Simple target storage using a flat Vec.
/// Scene sizes stay under ~20 entities, so linear scans are fine.
pub struct Scene {
    targets: Vec<Target>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            targets: Vec::with_capacity(32),
        }
    }

    /// Add a target to the scene.
    pub fn spawn(&mut self, target: Target) {
        self.targets.push(target);
    }

    /// Replace the whole scene with a freshly generated set of targets.
    pub fn replace(&mut self, targets: Vec<Target>) {
        self.targets = targets;
    }

    /// Get a reference to a target by ID.
    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a target by ID.
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    /// Iterate over all targets.
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Iterate over all targets mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Target> {
        self.targets.iter_mut()
    }

    /// Number of targets in the scene.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of targets not yet completed.
    pub fn remaining(&self) -> usize {
        self.targets.iter().filter(|t| !t.completed).count()
    }

    /// True when every target has reached its terminal state.
    /// An empty scene is not "complete"; a win needs actual targets.
    pub fn all_completed(&self) -> bool {
        !self.targets.is_empty() && self.targets.iter().all(|t| t.completed)
    }

    /// Clear all targets.
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = TargetId(1);
        scene.spawn(Target::new(id).with_pos(Vec2::new(10.0, 20.0)));
        let t = scene.get(id).unwrap();
        assert_eq!(t.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn empty_scene_is_not_complete() {
        let scene = Scene::new();
        assert!(!scene.all_completed());
    }

    #[test]
    fn remaining_counts_uncompleted() {
        let mut scene = Scene::new();
        scene.spawn(Target::new(TargetId(1)));
        let mut done = Target::new(TargetId(2));
        done.completed = true;
        scene.spawn(done);
        assert_eq!(scene.remaining(), 1);
        assert!(!scene.all_completed());

        scene.get_mut(TargetId(1)).unwrap().completed = true;
        assert!(scene.all_completed());
    }
}

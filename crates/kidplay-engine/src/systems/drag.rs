use crate::api::types::TargetId;
use glam::Vec2;

/// Tracks which target, if any, is being dragged, and the cursor-to-target
/// offset captured at grab time so the target follows the pointer without
/// snapping to be centered under it.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    active: Option<TargetId>,
    grab_offset: Vec2,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `id`. `target_pos` is the target's position at grab
    /// time; the offset between it and the pointer is preserved for the
    /// whole drag.
    pub fn begin(&mut self, id: TargetId, pointer: Vec2, target_pos: Vec2) {
        self.active = Some(id);
        self.grab_offset = target_pos - pointer;
    }

    /// The dragged target's position for the current pointer position.
    pub fn position_for(&self, pointer: Vec2) -> Vec2 {
        pointer + self.grab_offset
    }

    pub fn active(&self) -> Option<TargetId> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// End the drag, returning the target that was active.
    pub fn take(&mut self) -> Option<TargetId> {
        self.active.take()
    }

    /// Abort the drag without a release attempt. The target keeps whatever
    /// position it last had; pointer-left-surface is treated this way in
    /// every game.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_offset_is_preserved() {
        let mut drag = DragState::new();
        // Grab a target at (40, 40) with the pointer at (42, 44).
        drag.begin(TargetId(3), Vec2::new(42.0, 44.0), Vec2::new(40.0, 40.0));
        assert_eq!(drag.active(), Some(TargetId(3)));

        // Move the pointer; the target trails by the same offset.
        let pos = drag.position_for(Vec2::new(60.0, 70.0));
        assert_eq!(pos, Vec2::new(58.0, 66.0));
    }

    #[test]
    fn take_ends_the_drag() {
        let mut drag = DragState::new();
        drag.begin(TargetId(1), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(drag.take(), Some(TargetId(1)));
        assert!(!drag.is_active());
        assert_eq!(drag.take(), None);
    }

    #[test]
    fn cancel_discards_without_release() {
        let mut drag = DragState::new();
        drag.begin(TargetId(1), Vec2::ZERO, Vec2::ZERO);
        drag.cancel();
        assert!(!drag.is_active());
    }
}

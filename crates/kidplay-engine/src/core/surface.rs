use glam::Vec2;

/// Bounding box of the interactive game surface, in client (pixel) space.
///
/// The host queries this from its layout system and re-injects it whenever
/// the surface moves or resizes. Keeping it an explicit value means the
/// coordinate math has no hidden dependency on a UI container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a client-space point to normalized surface coordinates, where
    /// both axes run 0..100 across the surface. No clamping: callers that
    /// need bounded positions (drag handlers) apply their own policy.
    pub fn normalize(&self, client: Vec2) -> Vec2 {
        Vec2::new(
            (client.x - self.left) / self.width * 100.0,
            (client.y - self.top) / self.height * 100.0,
        )
    }

    /// Whether a normalized point lies on the surface.
    pub fn contains_normalized(p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= 100.0 && p.y >= 0.0 && p.y <= 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_corners() {
        let rect = SurfaceRect::new(100.0, 50.0, 400.0, 200.0);
        assert_eq!(rect.normalize(Vec2::new(100.0, 50.0)), Vec2::ZERO);
        assert_eq!(
            rect.normalize(Vec2::new(500.0, 250.0)),
            Vec2::new(100.0, 100.0)
        );
        assert_eq!(
            rect.normalize(Vec2::new(300.0, 150.0)),
            Vec2::new(50.0, 50.0)
        );
    }

    #[test]
    fn normalize_does_not_clamp() {
        let rect = SurfaceRect::new(0.0, 0.0, 100.0, 100.0);
        let p = rect.normalize(Vec2::new(-10.0, 150.0));
        assert_eq!(p, Vec2::new(-10.0, 150.0));
        assert!(!SurfaceRect::contains_normalized(p));
    }
}

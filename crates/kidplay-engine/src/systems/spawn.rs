use crate::api::types::TargetId;
use crate::components::target::Target;
use crate::systems::rng::Rng;
use glam::Vec2;

/// How variants are assigned when a scene is generated.
///
/// Variants are assigned once at spawn time and never recomputed; removing
/// or completing targets later must not reshuffle the survivors.
#[derive(Debug, Clone, Copy)]
pub enum VariantPolicy {
    /// Uniform random pick from a pool of `0..n` kinds; repeats allowed.
    /// The tooth game reuses a few stain kinds across many targets.
    WithReplacement(u32),
    /// Sample without replacement from a pool of `0..n` kinds, so every
    /// target in the scene gets a distinct kind (toy-sorting draws 6 toys
    /// from a pool of 10). Falls back to with-replacement when the pool is
    /// smaller than the requested count.
    DistinctFromPool(u32),
}

/// Placement rules for one game's scene.
#[derive(Debug, Clone, Copy)]
pub struct SpawnConfig {
    pub count: usize,
    /// Inclusive-exclusive placement range on the x axis, in surface units.
    pub x_range: (f32, f32),
    /// Inclusive-exclusive placement range on the y axis, in surface units.
    pub y_range: (f32, f32),
    pub size_range: (f32, f32),
    pub variants: VariantPolicy,
}

/// Generate a fresh scene of targets. Every call produces an independent
/// set; nothing is shared between sessions.
pub fn spawn_targets(rng: &mut Rng, config: &SpawnConfig) -> Vec<Target> {
    let variants = assign_variants(rng, config.count, config.variants);

    (0..config.count)
        .map(|i| {
            Target::new(TargetId(i as u32))
                .with_pos(Vec2::new(
                    rng.next_range(config.x_range.0, config.x_range.1),
                    rng.next_range(config.y_range.0, config.y_range.1),
                ))
                .with_size(rng.next_range(config.size_range.0, config.size_range.1))
                .with_variant(variants[i])
        })
        .collect()
}

fn assign_variants(rng: &mut Rng, count: usize, policy: VariantPolicy) -> Vec<u32> {
    match policy {
        VariantPolicy::WithReplacement(pool) => {
            (0..count).map(|_| rng.next_int(pool.max(1))).collect()
        }
        VariantPolicy::DistinctFromPool(pool) => {
            if (pool as usize) < count {
                return assign_variants(rng, count, VariantPolicy::WithReplacement(pool));
            }
            // Partial Fisher-Yates: shuffle just the prefix we need.
            let mut kinds: Vec<u32> = (0..pool).collect();
            for i in 0..count {
                let j = i + rng.next_int((pool as usize - i) as u32) as usize;
                kinds.swap(i, j);
            }
            kinds.truncate(count);
            kinds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: usize, variants: VariantPolicy) -> SpawnConfig {
        SpawnConfig {
            count,
            x_range: (25.0, 75.0),
            y_range: (15.0, 85.0),
            size_range: (20.0, 50.0),
            variants,
        }
    }

    #[test]
    fn fresh_scene_is_uncompleted_and_in_range() {
        let mut rng = Rng::new(42);
        let targets = spawn_targets(&mut rng, &config(18, VariantPolicy::WithReplacement(3)));
        assert_eq!(targets.len(), 18);
        for t in &targets {
            assert!(!t.completed);
            assert!(t.pos.x >= 25.0 && t.pos.x < 75.0, "x out of range: {}", t.pos.x);
            assert!(t.pos.y >= 15.0 && t.pos.y < 85.0, "y out of range: {}", t.pos.y);
            assert!(t.size >= 20.0 && t.size < 50.0);
            assert!(t.variant < 3);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut rng = Rng::new(1);
        let targets = spawn_targets(&mut rng, &config(10, VariantPolicy::WithReplacement(4)));
        for (i, t) in targets.iter().enumerate() {
            assert_eq!(t.id, TargetId(i as u32));
        }
    }

    #[test]
    fn distinct_sampling_has_no_repeats() {
        let mut rng = Rng::new(99);
        for _ in 0..50 {
            let targets = spawn_targets(&mut rng, &config(6, VariantPolicy::DistinctFromPool(10)));
            let mut kinds: Vec<u32> = targets.iter().map(|t| t.variant).collect();
            kinds.sort_unstable();
            kinds.dedup();
            assert_eq!(kinds.len(), 6, "variants repeated");
            assert!(kinds.iter().all(|&k| k < 10));
        }
    }

    #[test]
    fn small_pool_falls_back_to_replacement() {
        let mut rng = Rng::new(5);
        let targets = spawn_targets(&mut rng, &config(18, VariantPolicy::DistinctFromPool(4)));
        assert_eq!(targets.len(), 18);
        assert!(targets.iter().all(|t| t.variant < 4));
    }

    #[test]
    fn scenes_are_independent() {
        let mut rng = Rng::new(1234);
        let cfg = config(6, VariantPolicy::DistinctFromPool(10));
        let a = spawn_targets(&mut rng, &cfg);
        let b = spawn_targets(&mut rng, &cfg);
        let same = a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| x.pos == y.pos && x.variant == y.variant);
        assert!(!same, "restart produced an identical scene");
    }
}

//! Asteroid population and splitting rules

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, AsteroidSpawn};
use crate::consts::{SPLIT_CHILDREN, SPLIT_JITTER};
use crate::settings::GameConfig;

/// Starting field: `initial_asteroids` rocks on the screen edges
pub fn initial_population<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<Asteroid> {
    (0..config.initial_asteroids)
        .map(|_| Asteroid::spawn(AsteroidSpawn::AtEdge, config.bounds(), rng))
        .collect()
}

/// Children left behind when `parent` is destroyed.
///
/// Rocks above the split threshold break into three half-size pieces scattered
/// up to 20 units around the parent on each axis. Smaller rocks just vanish.
pub fn split<R: Rng + ?Sized>(parent: &Asteroid, bounds: Vec2, rng: &mut R) -> Vec<Asteroid> {
    if !parent.splits() {
        return Vec::new();
    }
    let size = parent.size / 2;
    (0..SPLIT_CHILDREN)
        .map(|_| {
            let jitter = Vec2::new(
                rng.random_range(-SPLIT_JITTER..=SPLIT_JITTER),
                rng.random_range(-SPLIT_JITTER..=SPLIT_JITTER),
            );
            Asteroid::spawn(AsteroidSpawn::At { pos: parent.pos + jitter, size }, bounds, rng)
        })
        .collect()
}

/// Remove asteroids whose centre is within `radius` of `center`.
/// Returns how many were removed.
pub fn clear_zone(asteroids: &mut Vec<Asteroid>, center: Vec2, radius: f32) -> usize {
    let before = asteroids.len();
    asteroids.retain(|a| a.pos.distance(center) > radius);
    before - asteroids.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn rock_at(pos: Vec2, size: u32, rng: &mut Pcg32) -> Asteroid {
        Asteroid::spawn(AsteroidSpawn::At { pos, size }, BOUNDS, rng)
    }

    #[test]
    fn test_initial_population() {
        let mut rng = Pcg32::seed_from_u64(42);
        let config = GameConfig::default();
        let field = initial_population(&config, &mut rng);
        assert_eq!(field.len(), 5);
        assert!(field.iter().all(|a| (20..50).contains(&a.size)));
    }

    #[test]
    fn test_split_size_40() {
        let mut rng = Pcg32::seed_from_u64(42);
        let parent = rock_at(Vec2::new(400.0, 300.0), 40, &mut rng);
        let children = split(&parent, BOUNDS, &mut rng);
        assert_eq!(children.len(), 3);
        for child in &children {
            assert_eq!(child.size, 20);
            let d = (child.pos - parent.pos).abs();
            assert!(d.max_element() <= SPLIT_JITTER + 1e-3, "offset {d:?}");
        }
    }

    #[test]
    fn test_small_rocks_do_not_split() {
        let mut rng = Pcg32::seed_from_u64(42);
        for size in [1, 5, 10] {
            let parent = rock_at(Vec2::new(400.0, 300.0), size, &mut rng);
            assert!(split(&parent, BOUNDS, &mut rng).is_empty(), "size {size}");
        }
        let parent = rock_at(Vec2::new(400.0, 300.0), 11, &mut rng);
        let children = split(&parent, BOUNDS, &mut rng);
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.size == 5));
    }

    #[test]
    fn test_clear_zone() {
        let mut rng = Pcg32::seed_from_u64(42);
        let center = Vec2::new(400.0, 300.0);
        let mut field = vec![
            rock_at(center + Vec2::new(50.0, 0.0), 30, &mut rng),
            rock_at(center + Vec2::new(0.0, 100.0), 30, &mut rng),
            rock_at(center + Vec2::new(150.0, 0.0), 30, &mut rng),
        ];
        assert_eq!(clear_zone(&mut field, center, 100.0), 2);
        assert_eq!(field.len(), 1);
        assert_eq!(field[0].pos, center + Vec2::new(150.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_split_children_stay_near_parent(
            seed in any::<u64>(),
            size in 11u32..=50,
            x in 40.0f32..760.0,
            y in 40.0f32..560.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let parent = rock_at(Vec2::new(x, y), size, &mut rng);
            let children = split(&parent, BOUNDS, &mut rng);
            prop_assert_eq!(children.len(), 3);
            for child in &children {
                prop_assert_eq!(child.size, size / 2);
                prop_assert!((child.pos - parent.pos).abs().max_element() <= SPLIT_JITTER + 1e-3);
            }
        }
    }
}

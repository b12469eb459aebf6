//! Axis-aligned bounding box collision
//!
//! Every entity reduces to the AABB of its world-space outline. There is no
//! polygon-accurate test; two boxes that touch count as a hit.

use glam::Vec2;

use super::state::{Asteroid, Missile, Ship};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Smallest box enclosing all `points`.
    ///
    /// An empty slice yields an inverted box that intersects nothing.
    pub fn from_points(points: &[Vec2]) -> Self {
        points.iter().fold(
            Self {
                min: Vec2::splat(f32::INFINITY),
                max: Vec2::splat(f32::NEG_INFINITY),
            },
            |acc, &p| Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            },
        )
    }

    /// Zero-area box at a point
    #[inline]
    pub fn from_point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Overlap test, inclusive of shared edges
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.intersects(&Aabb::from_point(p))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// A missile that struck an asteroid this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissileHit {
    pub missile: usize,
    pub asteroid: usize,
}

/// Pair missiles with the asteroids they hit.
///
/// Missiles are tested in order against every asteroid still standing; each
/// missile and each asteroid appears in at most one hit.
pub fn missile_asteroid_hits(missiles: &[Missile], asteroids: &[Asteroid]) -> Vec<MissileHit> {
    let boxes: Vec<Aabb> = asteroids.iter().map(Asteroid::bounding_box).collect();
    let mut destroyed = vec![false; asteroids.len()];
    let mut hits = Vec::new();

    for (missile_idx, missile) in missiles.iter().enumerate() {
        let missile_box = missile.bounding_box();
        let target = boxes
            .iter()
            .enumerate()
            .find(|(i, b)| !destroyed[*i] && b.intersects(&missile_box))
            .map(|(i, _)| i);

        if let Some(asteroid_idx) = target {
            destroyed[asteroid_idx] = true;
            hits.push(MissileHit {
                missile: missile_idx,
                asteroid: asteroid_idx,
            });
        }
    }

    hits
}

/// Index of the first asteroid the ship collides with.
///
/// An exploding ship has no box and never collides.
pub fn ship_asteroid_hit(ship: &Ship, asteroids: &[Asteroid]) -> Option<usize> {
    let ship_box = ship.bounding_box()?;
    asteroids
        .iter()
        .position(|a| a.bounding_box().intersects(&ship_box))
}

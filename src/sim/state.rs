//! Game state and core simulation types
//!
//! Everything the session owns lives here: the entities, the current phase,
//! score and lives, the configuration and the injected RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn;
use crate::consts::*;
use crate::settings::GameConfig;
use crate::{heading_to_vector, rotate_points, wrap_position};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship is flying
    Playing,
    /// Ship is blowing up; waiting out the dwell time
    Exploding,
    /// No lives left, waiting for confirm or quit
    GameOver,
}

/// Where a new asteroid appears
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AsteroidSpawn {
    /// Random point on a screen edge with a random size
    AtEdge,
    /// Explicit position and size (split children, tests)
    At { pos: Vec2, size: u32 },
}

/// Number of vertices in an asteroid outline
pub const OUTLINE_POINTS: usize = 8;

/// A drifting rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Degrees, 0 = up, clockwise positive
    pub heading: f32,
    pub speed: f32,
    /// Radius-like size; always >= ASTEROID_MIN_SIZE
    pub size: u32,
    /// Local-space octagon, fixed at creation and only ever translated
    pub outline: [Vec2; OUTLINE_POINTS],
}

impl Asteroid {
    pub fn spawn<R: Rng + ?Sized>(placement: AsteroidSpawn, bounds: Vec2, rng: &mut R) -> Self {
        let (pos, size) = match placement {
            AsteroidSpawn::AtEdge => (
                random_edge_point(bounds, rng),
                rng.random_range(ASTEROID_MIN_SPAWN_SIZE..ASTEROID_MAX_SPAWN_SIZE),
            ),
            AsteroidSpawn::At { pos, size } => {
                if size < ASTEROID_MIN_SIZE {
                    log::warn!("Asteroid size {size} clamped to {ASTEROID_MIN_SIZE}");
                }
                (pos, size.max(ASTEROID_MIN_SIZE))
            }
        };

        Self {
            pos: wrap_position(pos, bounds),
            heading: rng.random_range(0.0..360.0),
            speed: rng.random_range(1.0..3.0),
            size,
            outline: jagged_outline(size, rng),
        }
    }

    /// Move one tick along the heading, wrapping at screen edges
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos = wrap_position(self.pos + heading_to_vector(self.heading) * self.speed, bounds);
    }

    /// Outline translated to the current position
    pub fn world_outline(&self) -> [Vec2; OUTLINE_POINTS] {
        self.outline.map(|p| self.pos + p)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.world_outline())
    }

    /// True if this asteroid breaks into children when destroyed
    #[inline]
    pub fn splits(&self) -> bool {
        self.size > SPLIT_MIN_SIZE && self.size / 2 > 0
    }
}

/// Uniform point on a horizontal or vertical screen edge
fn random_edge_point<R: Rng + ?Sized>(bounds: Vec2, rng: &mut R) -> Vec2 {
    if rng.random_bool(0.5) {
        // Left or right edge, random y
        let x = if rng.random_bool(0.5) { 0.0 } else { bounds.x };
        Vec2::new(x, rng.random_range(0.0..bounds.y))
    } else {
        // Top or bottom edge, random x
        let y = if rng.random_bool(0.5) { 0.0 } else { bounds.y };
        Vec2::new(rng.random_range(0.0..bounds.x), y)
    }
}

/// Irregular octagon: 45° spokes with ±10° and ±5 unit jitter
fn jagged_outline<R: Rng + ?Sized>(size: u32, rng: &mut R) -> [Vec2; OUTLINE_POINTS] {
    std::array::from_fn(|i| {
        let angle = i as f32 * 45.0 + rng.random_range(-10.0f32..=10.0);
        let radius = (size as f32 + rng.random_range(-5.0f32..=5.0)).max(1.0);
        heading_to_vector(angle) * radius
    })
}

/// Ship triangle in local space, nose pointing up
pub const SHIP_OUTLINE: [Vec2; 3] = [
    Vec2::new(0.0, -15.0),
    Vec2::new(-10.0, 10.0),
    Vec2::new(10.0, 10.0),
];

/// Local-space midpoint of the ship's tail, where the flame starts
const SHIP_TAIL: Vec2 = Vec2::new(0.0, 10.0);

/// Flame segment lengths, front to back
const FLAME_LENGTHS: [f32; 3] = [10.0, 6.0, 3.0];

/// Rotation control for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    Left,
    #[default]
    Straight,
    Right,
}

impl Turn {
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            Turn::Left => -1.0,
            Turn::Straight => 0.0,
            Turn::Right => 1.0,
        }
    }
}

/// Throttle control for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Throttle {
    Up,
    #[default]
    Hold,
    Down,
}

/// An ongoing ship explosion
#[derive(Debug, Clone)]
pub struct Explosion {
    /// Tick the explosion began
    pub started_tick: u64,
    pub particles: Vec<Particle>,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    /// Degrees, unbounded
    pub angle: f32,
    /// Forward speed in [0, max_speed]
    pub speed: f32,
    pub max_speed: f32,
    /// Present while the ship is exploding
    pub explosion: Option<Explosion>,
}

impl Ship {
    pub fn new(pos: Vec2, max_speed: f32) -> Self {
        Self {
            pos,
            angle: 0.0,
            speed: 0.0,
            max_speed,
            explosion: None,
        }
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.explosion.is_some()
    }

    pub fn rotate(&mut self, turn: Turn) {
        self.angle += turn.direction() * SHIP_TURN_DEGREES;
    }

    /// Thrust never goes negative; there is no reverse
    pub fn apply_throttle(&mut self, throttle: Throttle) {
        self.speed = match throttle {
            Throttle::Up => (self.speed + SHIP_THROTTLE_STEP).min(self.max_speed),
            Throttle::Down => (self.speed - SHIP_THROTTLE_STEP).max(0.0),
            Throttle::Hold => self.speed,
        };
    }

    /// Move the hull, or the debris while exploding
    pub fn advance(&mut self, bounds: Vec2) {
        match &mut self.explosion {
            None => {
                self.pos =
                    wrap_position(self.pos + heading_to_vector(self.angle) * self.speed, bounds);
            }
            Some(explosion) => {
                for particle in explosion.particles.iter_mut() {
                    particle.advance();
                }
                explosion.particles.retain(Particle::is_alive);
            }
        }
    }

    /// Blow up at the current position. No-op if already exploding.
    pub fn start_explosion<R: Rng + ?Sized>(&mut self, now: u64, count: usize, rng: &mut R) {
        if self.is_exploding() {
            return;
        }
        let particles = (0..count)
            .map(|_| Particle::new(self.pos, rng.random_range(0.0..360.0), rng.random_range(1.0..5.0)))
            .collect();
        self.explosion = Some(Explosion {
            started_tick: now,
            particles,
        });
    }

    /// Ticks since the explosion began, if exploding
    pub fn explosion_elapsed(&self, now: u64) -> Option<u64> {
        self.explosion
            .as_ref()
            .map(|e| now.saturating_sub(e.started_tick))
    }

    /// Back to the centre, at rest, pointing up
    pub fn respawn(&mut self, center: Vec2) {
        self.explosion = None;
        self.pos = center;
        self.angle = 0.0;
        self.speed = 0.0;
    }

    /// Triangle in world space
    pub fn hull(&self) -> [Vec2; 3] {
        rotate_points(&SHIP_OUTLINE, self.angle, self.pos)
    }

    /// Collision box; `None` while exploding
    pub fn bounding_box(&self) -> Option<Aabb> {
        if self.is_exploding() {
            None
        } else {
            Some(Aabb::from_points(&self.hull()))
        }
    }

    /// Exhaust trail segments behind the tail, each shorter than the last.
    /// Empty while stopped or exploding.
    pub fn flame(&self) -> Vec<(Vec2, Vec2)> {
        if self.is_exploding() || self.speed <= 0.0 {
            return Vec::new();
        }
        let [tail] = rotate_points(&[SHIP_TAIL], self.angle, self.pos);
        let back = -heading_to_vector(self.angle);
        let mut start = tail;
        FLAME_LENGTHS
            .iter()
            .map(|&len| {
                let end = start + back * len;
                let segment = (start, end);
                start = end;
                segment
            })
            .collect()
    }

    /// Live explosion particles (empty while intact)
    pub fn particles(&self) -> &[Particle] {
        self.explosion
            .as_ref()
            .map(|e| e.particles.as_slice())
            .unwrap_or_default()
    }
}

/// A shot fired from the ship
#[derive(Debug, Clone)]
pub struct Missile {
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
}

impl Missile {
    pub fn new(pos: Vec2, heading: f32, speed: f32) -> Self {
        Self { pos, heading, speed }
    }

    /// Straight-line motion, no wrapping
    pub fn advance(&mut self) {
        self.pos += heading_to_vector(self.heading) * self.speed;
    }

    /// Inside [0, width] x [0, height]
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        (0.0..=bounds.x).contains(&self.pos.x) && (0.0..=bounds.y).contains(&self.pos.y)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_point(self.pos)
    }
}

/// Explosion debris
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    /// Counts down from 255; also the green/blue colour channel
    pub lifetime: i32,
}

impl Particle {
    pub fn new(pos: Vec2, heading: f32, speed: f32) -> Self {
        Self {
            pos,
            heading,
            speed,
            lifetime: PARTICLE_LIFETIME,
        }
    }

    pub fn advance(&mut self) {
        self.pos += heading_to_vector(self.heading) * self.speed;
        self.lifetime -= PARTICLE_DECAY;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    /// Fades white -> red: R fixed, G = B = lifetime
    pub fn color(&self) -> [u8; 3] {
        let channel = self.lifetime.clamp(0, 255) as u8;
        [255, channel, channel]
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    AsteroidDestroyed { pos: Vec2, size: u32, children: usize },
    ShipDestroyed { pos: Vec2 },
    ShipRespawned { cleared: usize },
    GameOver { score: u64 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Injected RNG; seed it for reproducible runs
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub missiles: Vec<Missile>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with a seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Create a new session with an existing RNG
    pub fn with_rng(config: GameConfig, mut rng: Pcg32) -> Self {
        let asteroids = spawn::initial_population(&config, &mut rng);
        Self {
            ship: Ship::new(config.center(), config.ship_max_speed),
            lives: config.starting_lives,
            config,
            rng,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            asteroids,
            missiles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Rebuild the session from scratch, keeping config and RNG stream
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(self.config.clone(), rng);
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted with {} asteroids", self.asteroids.len());
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.config.bounds()
    }

    /// Launch a missile from the ship along its heading
    pub fn fire(&mut self) {
        self.missiles.push(Missile::new(
            self.ship.pos,
            self.ship.angle,
            self.config.missile_speed,
        ));
    }
}

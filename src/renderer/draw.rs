//! Draw primitives handed to the renderer

use glam::Vec2;

/// 8-bit RGB colour
pub type Rgb = [u8; 3];

/// One primitive in a frame's draw list
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Closed outline (asteroids, ship)
    Polygon { points: Vec<Vec2>, color: Rgb },
    /// Line segment (flame)
    Segment {
        from: Vec2,
        to: Vec2,
        color: Rgb,
        width: f32,
    },
    /// Single pixel (missiles, particles)
    Point { pos: Vec2, color: Rgb },
    /// Text anchored at its top-left corner
    Text {
        text: String,
        pos: Vec2,
        color: Rgb,
        size: f32,
    },
}

/// Colors for game elements
pub mod colors {
    use super::Rgb;

    pub const ASTEROID: Rgb = [255, 255, 255];
    pub const SHIP: Rgb = [255, 255, 255];
    pub const MISSILE: Rgb = [255, 255, 0];
    /// Flame segments, front to back
    pub const FLAME: [Rgb; 3] = [[255, 200, 0], [255, 120, 0], [255, 40, 0]];
    pub const HUD: Rgb = [255, 255, 255];
    pub const GAME_OVER: Rgb = [255, 0, 0];
}

//! Rendering boundary
//!
//! The simulation never draws. Each frame it produces an ordered list of
//! [`DrawCommand`]s which a [`Renderer`] backend turns into pixels.

pub mod draw;
pub mod shapes;

pub use draw::{DrawCommand, Rgb, colors};
pub use shapes::draw_list;

/// A backend that draws one frame at a time
pub trait Renderer {
    /// Draw `commands` in order; later primitives may cover earlier ones
    fn render(&mut self, commands: &[DrawCommand]);
}

/// Renderer with no display that logs what it would draw
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let (mut polygons, mut segments, mut points) = (0, 0, 0);
            for command in commands {
                match command {
                    DrawCommand::Polygon { .. } => polygons += 1,
                    DrawCommand::Segment { .. } => segments += 1,
                    DrawCommand::Point { .. } => points += 1,
                    DrawCommand::Text { text, .. } => log::trace!("frame {}: {text}", self.frames),
                }
            }
            log::trace!(
                "frame {}: {polygons} polygons, {segments} segments, {points} points",
                self.frames
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::GameState;

    #[test]
    fn test_headless_counts_frames() {
        let state = GameState::new(GameConfig::default(), 9);
        let mut renderer = HeadlessRenderer::default();
        for _ in 0..3 {
            renderer.render(&draw_list(&state));
        }
        assert_eq!(renderer.frames, 3);
    }
}

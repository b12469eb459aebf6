//! Draw list generation for a game state

use glam::Vec2;

use super::draw::{DrawCommand, colors};
use crate::sim::{GamePhase, GameState};

/// Flame segment widths, front to back
const FLAME_WIDTHS: [f32; 3] = [3.0, 2.0, 1.0];

const HUD_TEXT_SIZE: f32 = 24.0;
const BANNER_TEXT_SIZE: f32 = 48.0;

/// Build this frame's draw list. Later entries draw over earlier ones.
pub fn draw_list(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.asteroids.len() + state.missiles.len() + 32);

    for asteroid in &state.asteroids {
        commands.push(DrawCommand::Polygon {
            points: asteroid.world_outline().to_vec(),
            color: colors::ASTEROID,
        });
    }

    for missile in &state.missiles {
        commands.push(DrawCommand::Point {
            pos: missile.pos,
            color: colors::MISSILE,
        });
    }

    if state.ship.is_exploding() {
        for particle in state.ship.particles() {
            commands.push(DrawCommand::Point {
                pos: particle.pos,
                color: particle.color(),
            });
        }
    } else {
        commands.push(DrawCommand::Polygon {
            points: state.ship.hull().to_vec(),
            color: colors::SHIP,
        });
        for (i, (from, to)) in state.ship.flame().into_iter().enumerate() {
            commands.push(DrawCommand::Segment {
                from,
                to,
                color: colors::FLAME[i],
                width: FLAME_WIDTHS[i],
            });
        }
    }

    hud(state, &mut commands);

    if state.phase == GamePhase::GameOver {
        game_over_banner(state, &mut commands);
    }

    commands
}

fn hud(state: &GameState, commands: &mut Vec<DrawCommand>) {
    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(10.0, 10.0),
        color: colors::HUD,
        size: HUD_TEXT_SIZE,
    });
    commands.push(DrawCommand::Text {
        text: format!("Lives: {}", state.lives),
        pos: Vec2::new(10.0, 10.0 + HUD_TEXT_SIZE + 6.0),
        color: colors::HUD,
        size: HUD_TEXT_SIZE,
    });
}

fn game_over_banner(state: &GameState, commands: &mut Vec<DrawCommand>) {
    let center = state.config.center();
    commands.push(DrawCommand::Text {
        text: "GAME OVER".to_string(),
        pos: center + Vec2::new(-120.0, -60.0),
        color: colors::GAME_OVER,
        size: BANNER_TEXT_SIZE,
    });
    commands.push(DrawCommand::Text {
        text: format!("Final score: {}", state.score),
        pos: center + Vec2::new(-90.0, 0.0),
        color: colors::HUD,
        size: HUD_TEXT_SIZE,
    });
    commands.push(DrawCommand::Text {
        text: "Enter to play again, Esc to quit".to_string(),
        pos: center + Vec2::new(-170.0, 40.0),
        color: colors::HUD,
        size: HUD_TEXT_SIZE,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn polygons(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }

    #[test]
    fn test_playing_frame() {
        let mut state = GameState::new(GameConfig::default(), 5);
        state.fire();
        let commands = draw_list(&state);

        // 5 asteroids + ship
        assert_eq!(polygons(&commands), 6);
        assert!(matches!(commands[0], DrawCommand::Polygon { ref points, .. } if points.len() == 8));
        assert!(commands.iter().any(|c| matches!(c, DrawCommand::Point { color, .. } if *color == colors::MISSILE)));
        // Stationary ship has no flame
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Segment { .. })));
        assert_eq!(texts(&commands), vec!["Score: 0", "Lives: 3"]);
    }

    #[test]
    fn test_flame_drawn_while_moving() {
        let mut state = GameState::new(GameConfig::default(), 5);
        state.ship.speed = 2.0;
        let commands = draw_list(&state);
        let segments: Vec<f32> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Segment { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(segments, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_exploding_ship_drawn_as_particles() {
        let mut state = GameState::new(GameConfig::default(), 5);
        let mut rng = state.rng.clone();
        state.ship.start_explosion(0, 20, &mut rng);
        let commands = draw_list(&state);
        // Only the asteroids remain as polygons
        assert_eq!(polygons(&commands), state.asteroids.len());
        let points = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Point { .. }))
            .count();
        assert_eq!(points, 20);
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = GameState::new(GameConfig::default(), 5);
        state.phase = GamePhase::GameOver;
        state.score = 70;
        let commands = draw_list(&state);
        let texts = texts(&commands);
        assert!(texts.contains(&"GAME OVER"));
        assert!(texts.contains(&"Final score: 70"));
        // Banner is drawn last, over everything else
        assert!(matches!(commands.last(), Some(DrawCommand::Text { .. })));
    }
}

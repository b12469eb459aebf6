//! Rock Split entry point
//!
//! Runs the simulation headless with the demo autopilot at the configured
//! tick rate.
//!
//! Usage: `rock-split [--config <file.json>] [--seed <n>] [--frames <n>] [--games <n>] [--fast]`

use std::ops::ControlFlow;

use rock_split::GameConfig;
use rock_split::platform::{Autopilot, FrameLimiter, InputSource};
use rock_split::renderer::{HeadlessRenderer, Renderer, draw_list};
use rock_split::sim::{GameEvent, GameState, tick};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    seed: Option<u64>,
    frames: Option<u64>,
    games: u32,
    fast: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut opts = Options {
            games: 1,
            ..Default::default()
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => opts.config = args.next(),
                "--seed" => opts.seed = args.next().and_then(|s| s.parse().ok()),
                "--frames" => opts.frames = args.next().and_then(|s| s.parse().ok()),
                "--games" => {
                    opts.games = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
                }
                "--fast" => opts.fast = true,
                other => log::warn!("Ignoring unknown argument {other}"),
            }
        }
        opts
    }
}

/// Game instance holding all state
struct Game<I: InputSource, R: Renderer> {
    state: GameState,
    input: I,
    renderer: R,
    limiter: Option<FrameLimiter>,
}

impl<I: InputSource, R: Renderer> Game<I, R> {
    /// Run one frame: poll, tick, draw
    fn frame(&mut self) -> ControlFlow<()> {
        let input = self.input.poll(&self.state);
        let flow = tick(&mut self.state, &input);

        for event in &self.state.events {
            if let GameEvent::GameOver { score } = event {
                log::info!("Game over at tick {} with score {score}", self.state.time_ticks);
            }
        }

        self.renderer.render(&draw_list(&self.state));
        if let Some(limiter) = &mut self.limiter {
            limiter.wait();
        }
        flow
    }
}

fn main() {
    env_logger::init();
    log::info!("Rock Split (headless) starting...");

    let opts = Options::parse(std::env::args().skip(1));

    let config = match &opts.config {
        Some(path) => GameConfig::load(path).unwrap_or_else(|err| {
            log::error!("{err}; using defaults");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };

    let seed = opts.seed.unwrap_or_else(rand::random);
    log::info!("Seed {seed}, screen {}x{}", config.width, config.height);

    let restart_delay = config.tick_rate;
    let limiter = (!opts.fast).then(|| FrameLimiter::new(config.tick_rate));
    let mut game = Game {
        state: GameState::new(config, seed),
        input: Autopilot::new(opts.games, restart_delay),
        renderer: HeadlessRenderer::default(),
        limiter,
    };

    loop {
        if game.frame().is_break() {
            break;
        }
        if opts.frames.is_some_and(|limit| game.renderer.frames >= limit) {
            log::info!("Frame limit reached");
            break;
        }
    }

    log::info!(
        "Finished after {} frames, score {}",
        game.renderer.frames,
        game.state.score
    );
}

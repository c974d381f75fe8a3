//! Terminal Blockfall runner (default binary).
//!
//! Uses crossterm for input and the half-block framebuffer renderer for output.
//! Configuration comes from `BLOCKFALL_*` environment variables (see [`HostConfig`]).

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockfall::core::{FrameLoop, GameState, SystemClock};
use blockfall::input::map_key;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{apply_input, HostConfig};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    init_logging(&config)?;
    log::info!("starting blockfall with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }
    result
}

/// Send log output to the configured file. The terminal is in raw mode while playing,
/// so nothing is logged when no file is configured.
fn init_logging(config: &HostConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &HostConfig) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };
    let mut view = GameView::new(config.block_px, config.preview_px);
    let mut fb = FrameBuffer::new(0, 0);

    let clock = SystemClock::new();
    let mut frames = FrameLoop::new();
    let frame_period = config.frame_period();
    let min_viewport = GameView::min_viewport();
    let mut too_small = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fits = viewport.fits(min_viewport);
        if !fits && !too_small {
            log::warn!(
                "terminal is {}x{}, need at least {}x{}",
                w,
                h,
                min_viewport.width,
                min_viewport.height
            );
        }
        too_small = !fits;

        view.render_into(&game.snapshot(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input: wait at most one frame, then drain whatever else is queued.
        if event::poll(frame_period)? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(input) = map_key(key) {
                            if apply_input(&mut game, input).is_break() {
                                return Ok(());
                            }
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Gravity.
        frames.frame(&clock, &mut game);

        if let Some(lock) = game.take_last_event() {
            if lock.level_up {
                log::info!("level {} reached, score {}", lock.level, game.score());
            }
        }
    }
}

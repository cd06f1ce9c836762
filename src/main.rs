//! Terminal runner (default binary).
//!
//! Owns the loop driver: polls crossterm input with a short timeout, applies
//! player actions, steps gravity at the level's drop interval and renders a
//! snapshot every frame through the framebuffer renderer.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::{info, warn};

use tetris_cli::config::loader::{config_path, load_config_from, save_config_to};
use tetris_cli::config::{Cli, Config};
use tetris_cli::core::{GameSnapshot, GameState, Randomizer};
use tetris_cli::input::handle_key_event;
use tetris_cli::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_cli::types::{GameAction, FRAME_MS};

type Game = GameState<Randomizer>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = config_path(cli.config.as_deref());
    let (mut config, config_error) = match path.as_deref().map(load_config_from) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (Config::default(), Some(err)),
        None => (Config::default(), None),
    };
    config.apply_cli(&cli);

    if cli.save_config {
        let path = path.context("no config directory available; pass --config")?;
        save_config_to(&path, &config)
            .with_context(|| format!("writing config to {}", path.display()))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if let Err(err) = init_logging(&config.log_file) {
        eprintln!("logging disabled: {err:#}");
    }
    if let (Some(path), Some(err)) = (&path, config_error) {
        warn!("ignoring config {}: {}; using defaults", path.display(), err);
    }

    let seed = config.effective_seed();
    info!(
        "starting: seed {}, randomizer {:?}, rotation {:?}",
        seed, config.randomizer, config.rotation
    );
    let mut game = GameState::with_policy(config.piece_source(seed), config.rotation_policy());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored?;

    info!("exit: score {}, lines {}, level {}", game.score(), game.lines(), game.level());
    println!("Thanks for playing! Final score: {}", game.score());
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_drop = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input.
        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Quit {
                            game.quit();
                            return Ok(());
                        }
                        let was_paused = game.paused();
                        game.apply_action(action);
                        if action == GameAction::Restart || (was_paused && !game.paused()) {
                            last_drop = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let interval = Duration::from_millis(u64::from(game.drop_interval_ms()));
        if last_drop.elapsed() >= interval {
            last_drop = Instant::now();
            game.gravity_tick();
        }
    }
}

//! Terminal Tetris runner (default binary).
//!
//! Owns everything the engine does not: the terminal, the tick clock, key
//! polling and the log file. Each tick the most recent key press (if any) is
//! handed to `GameState::tick`, then the frame is redrawn.

mod cli;
mod rolling_log;

use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ascii_tetris::core::{GameState, Rules};
use ascii_tetris::input::{should_quit, CommandLatch};
use ascii_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use crate::cli::Cli;
use crate::rolling_log::RollingLog;

/// How a session ended
enum Exit {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rules = cli.rules()?;
    init_logging(&cli);

    let seed = cli.seed();
    info!(seed, ?rules, "start");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli, rules, seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    let (exit, score) = result?;
    match exit {
        Exit::Quit => info!(score, "quit"),
        Exit::GameOver => info!(score, "finished"),
    }
    println!("Score: {score}");
    Ok(())
}

fn init_logging(cli: &Cli) {
    if cli.no_log {
        return;
    }
    let sink = RollingLog::new(cli.log_base(), cli.log_max_bytes, cli.log_files);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(sink))
        .try_init();
}

fn run(term: &mut TerminalRenderer, cli: &Cli, rules: Rules, seed: u32) -> Result<(Exit, u32)> {
    let mut game = GameState::with_rules(rules, seed)?;
    let mut latch = CommandLatch::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(cli.tick_ms as u64);
    let mut last_tick = Instant::now();

    draw(term, &game, &mut fb)?;

    loop {
        // Collect key presses until the next tick is due.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(key = ?key.code, "quit requested");
                        return Ok((Exit::Quit, game.score()));
                    }
                    latch.feed(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        game.tick(latch.take());
        draw(term, &game, &mut fb)?;

        if game.game_over() {
            wait_for_key()?;
            return Ok((Exit::GameOver, game.score()));
        }
    }
}

fn draw(term: &mut TerminalRenderer, game: &GameState, fb: &mut FrameBuffer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    GameView.render_into(&game.snapshot(), Viewport::new(w, h), fb);
    term.draw(fb)
}

/// Block until any key is pressed.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

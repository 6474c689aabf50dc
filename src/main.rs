//! Terminal Tower Stack runner (default binary).
//!
//! Drives a `GameSession` at a fixed tick rate, reads keys with crossterm and
//! draws through the framebuffer renderer. The score history is printed to
//! stdout once the terminal is restored.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tower_stack::core::{GameConfig, GameSession};
use tower_stack::input::{command_for_key, should_quit, CommandLatch};
use tower_stack::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Number of best games printed on exit.
const REPORT_TOP_N: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "tower-stack", version, about = "Stack sliding blocks as high as you can")]
struct Args {
    /// Milliseconds per simulation tick
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..=1000))]
    tick_ms: u64,

    /// Write tracing output to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut session = GameSession::new(GameConfig::default());
    session.start().context("failed to start the first game")?;

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, &mut session, Duration::from_millis(args.tick_ms));

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    info!(
        games = session.history().count(),
        best = session.history().best_score(),
        "quit"
    );
    print!("{}", session.history().top_scores_report(REPORT_TOP_N));
    Ok(())
}

/// Log to a file; the terminal itself is owned by the renderer.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut latch = CommandLatch::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_event = None;
    let mut game_id = session.game_id();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, last_event.as_ref(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key) {
                        latch.press(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            session
                .update(elapsed.as_secs_f32(), latch.next_command())
                .context("game session rejected a tick")?;
            if session.game_id() != game_id {
                game_id = session.game_id();
                last_event = None;
            }
            if let Some(event) = session.take_last_event() {
                last_event = Some(event);
            }
        }
    }
}

//! Terminal 2048 runner (default binary).
//!
//! Without a subcommand this opens the interactive game on the alternate screen.
//! `headless` plays over stdin/stdout instead, one JSON message per line.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_2048::config::{Config, DEFAULT_LOG_FILTER};
use tui_2048::core::GameState;
use tui_2048::headless::Headless;
use tui_2048::highscore::HighScoreLedger;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::session::{spawn_source, Flow, Session};
use tui_2048::term::{FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport};
use tui_2048::types::VariantKind;

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Terminal 2048")]
struct Cli {
    /// Variant to start right away: classic, themed or extended.
    #[arg(long, global = true, value_parser = parse_variant)]
    variant: Option<VariantKind>,
    /// Seed for tile spawns; omit for a random game.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Save file to restore on startup.
    #[arg(long, global = true)]
    load: Option<PathBuf>,
    /// Directory for save files (default "Saved Games").
    #[arg(long)]
    save_dir: Option<PathBuf>,
    /// High-score file (default "highscore.dat").
    #[arg(long)]
    highscore: Option<PathBuf>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Read commands from stdin and write JSON observations to stdout.
    Headless,
}

fn parse_variant(s: &str) -> Result<VariantKind, String> {
    VariantKind::from_str(s).ok_or_else(|| format!("unknown variant '{}'", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(dir) = cli.save_dir.clone() {
        config.save_dir = dir;
    }
    if let Some(path) = cli.highscore.clone() {
        config.highscore_path = path;
    }
    init_tracing(&config)?;

    match cli.mode {
        Some(Mode::Headless) => run_headless(&cli),
        None => run_interactive(&cli, config),
    }
}

/// Log to the configured file only; the terminal belongs to the game.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run_headless(cli: &Cli) -> Result<()> {
    let source = spawn_source(cli.seed);
    let game = match &cli.load {
        Some(path) => GameState::load(path, source)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameState::new(cli.variant.unwrap_or_default(), source),
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    Headless::new(game).run(stdin.lock(), stdout.lock())
}

fn run_interactive(cli: &Cli, config: Config) -> Result<()> {
    let ledger = HighScoreLedger::load(&config.highscore_path);
    let mut session = Session::new(config, ledger, cli.seed);
    if let Some(path) = &cli.load {
        // A failed load leaves the menu up with the reason in the status line.
        let _ = session.load(path);
    } else if let Some(kind) = cli.variant {
        session.start(kind);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_err() {
        session.force_quit();
    }
    result
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let game_view = GameView::default();
    let menu_view = MenuView;
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.render_into(&game_view, &menu_view, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Nothing animates, so block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let flow = if is_interrupt(key) {
                    session.force_quit()
                } else if should_quit(key) {
                    session.quit()
                } else if let Some(action) = handle_key_event(key) {
                    session.handle(action)
                } else {
                    continue;
                };
                if flow == Flow::Quit {
                    return Ok(());
                }
                dirty = true;
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}

//! Interactive session: menu, active game, prompts, save state and best scores.
//!
//! The session owns everything the terminal loop needs and nothing terminal-specific;
//! `main` feeds it actions and asks it to draw.

use std::path::Path;

use crate::config::Config;
use crate::core::{GameSnapshot, GameState, LoadError, RandSource, SpawnSource};
use crate::highscore::HighScoreLedger;
use crate::term::{FrameBuffer, GameView, Hud, MenuModel, MenuView, Overlay, Viewport};
use crate::types::{GameAction, MoveOutcome, VariantKind};

/// Engine type used by interactive and headless play.
pub type Engine = GameState<Box<dyn SpawnSource>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// Modal question shown over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    None,
    /// Won for the first time: continue or leave
    Won,
    /// No move left: new game or leave
    GameOver,
    /// Leaving with unsaved progress: save, discard, or stay
    ConfirmExit,
}

/// Whether the main loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Build the spawn source for one game. A fixed seed gives reproducible games.
pub fn spawn_source(seed: Option<u64>) -> Box<dyn SpawnSource> {
    match seed {
        Some(seed) => Box::new(RandSource::seeded(seed)),
        None => Box::new(RandSource::from_entropy()),
    }
}

pub struct Session {
    config: Config,
    ledger: HighScoreLedger,
    seed: Option<u64>,
    games_started: u64,
    screen: Screen,
    prompt: Prompt,
    game: Option<Engine>,
    saved: bool,
    best: u64,
    status: Option<String>,
    snapshot: GameSnapshot,
}

impl Session {
    pub fn new(config: Config, ledger: HighScoreLedger, seed: Option<u64>) -> Self {
        Self {
            config,
            ledger,
            seed,
            games_started: 0,
            screen: Screen::Menu,
            prompt: Prompt::None,
            game: None,
            saved: true,
            best: 0,
            status: None,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn game(&self) -> Option<&Engine> {
        self.game.as_ref()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Best score of the current variant, including the running game.
    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn ledger(&self) -> &HighScoreLedger {
        &self.ledger
    }

    /// Start a fresh game of `kind`.
    pub fn start(&mut self, kind: VariantKind) {
        // Successive games from one seed must not repeat each other.
        let seed = self.seed.map(|s| s.wrapping_add(self.games_started));
        self.games_started += 1;
        self.enter_game(GameState::new(kind, spawn_source(seed)));
        tracing::info!(variant = kind.as_str(), "game started");
    }

    /// Restore a saved game. On failure the session stays where it was and shows why.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let seed = self.seed.map(|s| s.wrapping_add(self.games_started));
        match GameState::load(path, spawn_source(seed)) {
            Ok(game) => {
                self.games_started += 1;
                self.enter_game(game);
                self.status = Some(format!("Loaded {}", path.display()));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "load failed");
                self.status = Some(match &err {
                    LoadError::Io(_) => format!("Cannot open {}: {}", path.display(), err),
                    LoadError::Corrupt(_) => format!("Corrupted save file: {}", err),
                });
                Err(err)
            }
        }
    }

    fn enter_game(&mut self, game: Engine) {
        let kind = game.kind();
        self.best = self.ledger.best(kind).max(game.score());
        self.game = Some(game);
        self.screen = Screen::Playing;
        self.prompt = Prompt::None;
        self.saved = true;
        self.status = None;
    }

    /// Handle one mapped key. `main` calls [`Session::quit`] for quit keys instead.
    pub fn handle(&mut self, action: GameAction) -> Flow {
        match self.screen {
            Screen::Menu => self.handle_menu(action),
            Screen::Playing => match self.prompt {
                Prompt::None => self.handle_play(action),
                Prompt::Won => self.handle_won(action),
                Prompt::GameOver => self.handle_game_over(action),
                Prompt::ConfirmExit => self.handle_confirm_exit(action),
            },
        }
    }

    /// A quit key: leave the game (asking to save first) or, on the menu, exit.
    pub fn quit(&mut self) -> Flow {
        match self.screen {
            Screen::Menu => {
                self.flush_ledger();
                Flow::Quit
            }
            Screen::Playing => {
                self.request_exit();
                Flow::Continue
            }
        }
    }

    /// Exit immediately (ctrl-c), keeping the best score.
    pub fn force_quit(&mut self) -> Flow {
        self.record_best();
        self.flush_ledger();
        Flow::Quit
    }

    fn handle_menu(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::SelectVariant(kind) => self.start(kind),
            GameAction::LoadDefault => {
                let path = self.config.save_path();
                // The status line already reports the failure.
                let _ = self.load(&path);
            }
            GameAction::Back => return self.quit(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_play(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::Move(dir) => {
                let Some(game) = self.game.as_mut() else {
                    return Flow::Continue;
                };
                let outcome = game.apply_move(dir);
                if outcome.is_moved() {
                    self.saved = false;
                    self.status = None;
                    self.best = self.best.max(game.score());
                }
                match outcome {
                    MoveOutcome::GameOver => self.prompt = Prompt::GameOver,
                    MoveOutcome::Won => self.prompt = Prompt::Won,
                    MoveOutcome::Normal | MoveOutcome::NoMovement => {}
                }
            }
            GameAction::Save => {
                self.save();
            }
            GameAction::NewGame => self.restart(),
            GameAction::Back => self.request_exit(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_won(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::Continue | GameAction::Confirm => self.prompt = Prompt::None,
            GameAction::Decline | GameAction::Back => {
                self.prompt = Prompt::None;
                self.request_exit();
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_game_over(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::NewGame | GameAction::Confirm => self.restart(),
            GameAction::Decline | GameAction::Back => self.leave_game(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_confirm_exit(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::Confirm | GameAction::Save => {
                if self.save() {
                    self.leave_game();
                } else {
                    self.prompt = Prompt::None;
                }
            }
            GameAction::Decline => self.leave_game(),
            GameAction::Back => self.prompt = Prompt::None,
            _ => {}
        }
        Flow::Continue
    }

    fn request_exit(&mut self) {
        if self.saved || self.game.as_ref().is_some_and(|g| g.is_game_over()) {
            self.leave_game();
        } else {
            self.prompt = Prompt::ConfirmExit;
        }
    }

    fn restart(&mut self) {
        let kind = self.game.as_ref().map(|g| g.kind()).unwrap_or_default();
        self.record_best();
        self.start(kind);
    }

    /// Back to the menu, storing the best score.
    fn leave_game(&mut self) {
        self.record_best();
        self.flush_ledger();
        self.game = None;
        self.screen = Screen::Menu;
        self.prompt = Prompt::None;
        self.saved = true;
    }

    /// Write the default save file. Returns false (and reports it) on failure.
    pub fn save(&mut self) -> bool {
        let Some(game) = self.game.as_ref() else {
            return false;
        };
        let path = self.config.save_path();
        let result = self.config.ensure_save_dir().and_then(|()| game.save(&path));
        match result {
            Ok(()) => {
                self.saved = true;
                self.status = Some(format!("Saved to {}", path.display()));
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "save failed");
                self.status = Some(format!("Saving failed: {}", err));
                false
            }
        }
    }

    fn record_best(&mut self) {
        if let Some(game) = self.game.as_ref() {
            self.ledger.record(game.kind(), game.score());
        }
    }

    fn flush_ledger(&mut self) {
        if !self.ledger.is_dirty() {
            return;
        }
        if let Err(err) = self.ledger.save() {
            tracing::warn!(path = %self.ledger.path().display(), %err, "cannot write high scores");
            self.status = Some(format!("Cannot write high scores: {}", err));
        }
    }

    /// Draw the current screen into `fb`.
    pub fn render_into(
        &mut self,
        game_view: &GameView,
        menu_view: &MenuView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let status = self.status.as_deref();
        match (self.screen, self.game.as_ref()) {
            (Screen::Playing, Some(game)) => {
                game.snapshot_into(&mut self.snapshot);
                self.snapshot.best = self.best;
                let hud = Hud {
                    styles: game.styles(),
                    hint: game.hint(),
                    status,
                    overlay: match self.prompt {
                        Prompt::None => None,
                        Prompt::Won => Some(Overlay::Won),
                        Prompt::GameOver => Some(Overlay::GameOver),
                        Prompt::ConfirmExit => Some(Overlay::ConfirmExit),
                    },
                    unsaved: !self.saved,
                };
                game_view.render_into(&self.snapshot, &hud, viewport, fb);
            }
            _ => {
                let model = MenuModel {
                    best: self.ledger.scores(),
                    can_load: self.config.save_path().exists(),
                    status,
                };
                menu_view.render_into(&model, viewport, fb);
            }
        }
    }
}

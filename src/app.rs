//! Application context shared by the game's scenes.
//!
//! `GameApp` is constructed once by the host and handed to whatever needs the
//! configuration; there is no global instance.

use crate::config::{ConfigError, GameConfig};
use crate::game::{BoardController, BoardPresenter, CellInput};
use crate::machine::MachineError;
use crate::splash::{SplashPresenter, SplashScreen};
use tracing::info;

/// Switches the host to another scene.
pub trait SceneLoader {
    fn load_scene(&mut self, name: &str);
}

impl<F> SceneLoader for F
where
    F: FnMut(&str),
{
    fn load_scene(&mut self, name: &str) {
        self(name)
    }
}

/// Owns the validated configuration and opens the first scene.
pub struct GameApp {
    config: GameConfig,
    scenes: Box<dyn SceneLoader>,
    started: bool,
}

impl GameApp {
    /// Validate `config` and build the application context.
    pub fn new(config: GameConfig, scenes: Box<dyn SceneLoader>) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validated()?,
            scenes,
            started: false,
        })
    }

    /// Request the initial scene. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        info!(scene = %self.config.app.initial_scene, "Starting application");
        self.scenes.load_scene(&self.config.app.initial_scene);
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the splash screen for the configured sequence.
    pub fn splash_screen(
        &self,
        presenter: Box<dyn SplashPresenter>,
        scenes: Box<dyn SceneLoader>,
    ) -> Result<SplashScreen, MachineError> {
        SplashScreen::new(&self.config.splash, presenter, scenes)
    }

    /// Build a tic-tac-toe board with the configured pacing and AI.
    pub fn board(
        &self,
        presenter: Box<dyn BoardPresenter>,
        input: Box<dyn CellInput>,
    ) -> Result<BoardController, MachineError> {
        BoardController::new(&self.config.board, presenter, input)
    }
}

//! Splash screen sequencing.
//!
//! Runs the logo through `FadeIn -> Stay -> FadeOut -> MainBackground` and
//! then hands over to the next scene exactly once.

mod states;

pub use states::SplashPhase;

use crate::app::SceneLoader;
use crate::builder::MachineBuilder;
use crate::config::SplashConfig;
use crate::machine::{FiniteStateMachine, MachineError};
use states::{FadeIn, FadeOut, MainBackground, Stay};
use std::time::Duration;
use tracing::info;

/// Receives the splash screen's presentation notifications.
pub trait SplashPresenter {
    fn play_splash_audio(&mut self);

    fn stop_audio(&mut self);

    fn set_logo_visible(&mut self, visible: bool);

    /// Logo opacity in `0.0..=1.0`.
    fn set_logo_alpha(&mut self, alpha: f32);
}

pub(crate) struct SplashContext {
    pub(crate) presenter: Box<dyn SplashPresenter>,
    pub(crate) scene_requested: bool,
}

/// Owns the splash machine until the sequence completes.
pub struct SplashScreen {
    machine: Option<FiniteStateMachine<SplashContext>>,
    context: SplashContext,
    scenes: Box<dyn SceneLoader>,
    next_scene: String,
}

impl SplashScreen {
    /// Hide the logo and enter `FadeIn`.
    pub fn new(
        config: &SplashConfig,
        mut presenter: Box<dyn SplashPresenter>,
        scenes: Box<dyn SceneLoader>,
    ) -> Result<Self, MachineError> {
        presenter.set_logo_alpha(0.0);
        presenter.set_logo_visible(false);

        let mut context = SplashContext {
            presenter,
            scene_requested: false,
        };

        let machine = MachineBuilder::new()
            .state(FadeIn::new(config))
            .state(FadeOut::new(config))
            .state(Stay::new(config))
            .state(MainBackground)
            .initial(SplashPhase::FadeIn)
            .start(&mut context)?;

        Ok(Self {
            machine: Some(machine),
            context,
            scenes,
            next_scene: config.next_scene.clone(),
        })
    }

    /// Advance the sequence by one frame. No-op once finished.
    pub fn update(&mut self, dt: Duration) -> Result<(), MachineError> {
        let Some(machine) = self.machine.as_mut() else {
            return Ok(());
        };

        machine.update(&mut self.context, dt)?;
        if self.context.scene_requested {
            self.finish();
        }
        Ok(())
    }

    fn finish(&mut self) {
        if let Some(mut machine) = self.machine.take() {
            machine.stop(&mut self.context);
        }
        self.context.presenter.stop_audio();

        info!(scene = %self.next_scene, "Splash screen finished");
        self.scenes.load_scene(&self.next_scene);
    }

    /// Current step, `None` once finished.
    pub fn phase(&self) -> Option<SplashPhase> {
        self.machine
            .as_ref()
            .and_then(|machine| machine.current_id())
            .and_then(|id| SplashPhase::try_from(id).ok())
    }

    pub fn is_finished(&self) -> bool {
        self.machine.is_none()
    }
}

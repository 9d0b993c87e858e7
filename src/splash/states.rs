//! Presentation states of the splash sequence.

use crate::config::SplashConfig;
use crate::core::{HookResult, State, StateId, Step, Timer};
use crate::splash::SplashContext;
use crate::state_ids;
use std::time::Duration;

state_ids! {
    /// Steps of the splash sequence, in order.
    pub enum SplashPhase {
        FadeIn,
        Stay,
        FadeOut,
        MainBackground,
    }
}

/// Plays the jingle and fades the logo in.
pub(crate) struct FadeIn {
    duration: Duration,
    timer: Timer,
}

impl FadeIn {
    pub(crate) fn new(config: &SplashConfig) -> Self {
        Self {
            duration: config.fade_in(),
            timer: Timer::new(),
        }
    }
}

impl State<SplashContext> for FadeIn {
    fn id(&self) -> StateId {
        SplashPhase::FadeIn.id()
    }

    fn name(&self) -> &str {
        "FadeIn"
    }

    fn enter(&mut self, ctx: &mut SplashContext) {
        self.timer.reset();
        ctx.presenter.play_splash_audio();
        ctx.presenter.set_logo_visible(true);
    }

    fn update(&mut self, ctx: &mut SplashContext, dt: Duration) -> HookResult {
        if self.timer.tick(dt) > self.duration {
            return Ok(Step::goto(SplashPhase::Stay));
        }
        ctx.presenter
            .set_logo_alpha(self.timer.progress(self.duration));
        Ok(Step::Stay)
    }
}

/// Holds the logo on screen.
pub(crate) struct Stay {
    duration: Duration,
    timer: Timer,
}

impl Stay {
    pub(crate) fn new(config: &SplashConfig) -> Self {
        Self {
            duration: config.stay(),
            timer: Timer::new(),
        }
    }
}

impl State<SplashContext> for Stay {
    fn id(&self) -> StateId {
        SplashPhase::Stay.id()
    }

    fn name(&self) -> &str {
        "Stay"
    }

    fn enter(&mut self, _ctx: &mut SplashContext) {
        self.timer.reset();
    }

    fn update(&mut self, _ctx: &mut SplashContext, dt: Duration) -> HookResult {
        if self.timer.tick(dt) > self.duration {
            return Ok(Step::goto(SplashPhase::FadeOut));
        }
        Ok(Step::Stay)
    }
}

/// Fades the logo out, then silences and hides it on exit.
pub(crate) struct FadeOut {
    duration: Duration,
    timer: Timer,
}

impl FadeOut {
    pub(crate) fn new(config: &SplashConfig) -> Self {
        Self {
            duration: config.fade_out(),
            timer: Timer::new(),
        }
    }
}

impl State<SplashContext> for FadeOut {
    fn id(&self) -> StateId {
        SplashPhase::FadeOut.id()
    }

    fn name(&self) -> &str {
        "FadeOut"
    }

    fn enter(&mut self, _ctx: &mut SplashContext) {
        self.timer.reset();
    }

    fn update(&mut self, ctx: &mut SplashContext, dt: Duration) -> HookResult {
        if self.timer.tick(dt) > self.duration {
            return Ok(Step::goto(SplashPhase::MainBackground));
        }
        ctx.presenter
            .set_logo_alpha(1.0 - self.timer.progress(self.duration));
        Ok(Step::Stay)
    }

    fn exit(&mut self, ctx: &mut SplashContext) {
        ctx.presenter.stop_audio();
        ctx.presenter.set_logo_visible(false);
    }
}

/// Asks the splash screen to move on to the next scene.
pub(crate) struct MainBackground;

impl State<SplashContext> for MainBackground {
    fn id(&self) -> StateId {
        SplashPhase::MainBackground.id()
    }

    fn name(&self) -> &str {
        "MainBackground"
    }

    fn update(&mut self, ctx: &mut SplashContext, _dt: Duration) -> HookResult {
        ctx.scene_requested = true;
        Ok(Step::Stay)
    }
}

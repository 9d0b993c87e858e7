//! Splash screen sequencing driven frame by frame.

use minigame::app::GameApp;
use minigame::config::{GameConfig, SplashConfig};
use minigame::splash::{SplashPhase, SplashPresenter, SplashScreen};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    PlayAudio,
    StopAudio,
    Visible(bool),
    Alpha(f32),
}

struct Recorder(Rc<RefCell<Vec<Event>>>);

impl SplashPresenter for Recorder {
    fn play_splash_audio(&mut self) {
        self.0.borrow_mut().push(Event::PlayAudio);
    }

    fn stop_audio(&mut self) {
        self.0.borrow_mut().push(Event::StopAudio);
    }

    fn set_logo_visible(&mut self, visible: bool) {
        self.0.borrow_mut().push(Event::Visible(visible));
    }

    fn set_logo_alpha(&mut self, alpha: f32) {
        self.0.borrow_mut().push(Event::Alpha(alpha));
    }
}

type Shared<T> = Rc<RefCell<Vec<T>>>;

fn splash(config: &SplashConfig) -> (SplashScreen, Shared<Event>, Shared<String>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let scenes = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&scenes);
    let loader = move |name: &str| sink.borrow_mut().push(name.to_string());
    let screen = SplashScreen::new(
        config,
        Box::new(Recorder(Rc::clone(&events))),
        Box::new(loader),
    )
    .unwrap();

    (screen, events, scenes)
}

fn secs(value: f32) -> Duration {
    Duration::from_secs_f32(value)
}

#[test]
fn construction_hides_logo_then_starts_fade_in() {
    let (screen, events, scenes) = splash(&SplashConfig::default());

    assert_eq!(screen.phase(), Some(SplashPhase::FadeIn));
    assert_eq!(
        *events.borrow(),
        vec![
            Event::Alpha(0.0),
            Event::Visible(false),
            Event::PlayAudio,
            Event::Visible(true),
        ]
    );
    assert!(scenes.borrow().is_empty());
}

#[test]
fn full_sequence_loads_next_scene_once() {
    let (mut screen, events, scenes) = splash(&SplashConfig::default());
    events.borrow_mut().clear();

    screen.update(secs(1.0)).unwrap();
    assert_eq!(events.borrow().last(), Some(&Event::Alpha(0.5)));

    screen.update(secs(1.0)).unwrap();
    assert_eq!(events.borrow().last(), Some(&Event::Alpha(1.0)));
    assert_eq!(screen.phase(), Some(SplashPhase::FadeIn));

    screen.update(secs(0.1)).unwrap();
    assert_eq!(screen.phase(), Some(SplashPhase::Stay));

    screen.update(secs(2.0)).unwrap();
    assert_eq!(screen.phase(), Some(SplashPhase::Stay));
    screen.update(secs(0.5)).unwrap();
    assert_eq!(screen.phase(), Some(SplashPhase::FadeOut));

    events.borrow_mut().clear();
    screen.update(secs(0.5)).unwrap();
    assert_eq!(*events.borrow(), vec![Event::Alpha(0.5)]);

    screen.update(secs(0.6)).unwrap();
    assert_eq!(screen.phase(), Some(SplashPhase::MainBackground));
    assert_eq!(
        events.borrow()[1..],
        [Event::StopAudio, Event::Visible(false)]
    );
    assert!(scenes.borrow().is_empty());

    screen.update(secs(0.016)).unwrap();
    assert!(screen.is_finished());
    assert_eq!(screen.phase(), None);
    assert_eq!(*scenes.borrow(), vec!["mini_1".to_string()]);

    screen.update(secs(5.0)).unwrap();
    screen.update(secs(5.0)).unwrap();
    assert_eq!(scenes.borrow().len(), 1);
}

#[test]
fn alpha_never_leaves_unit_range() {
    let (mut screen, events, _) = splash(&SplashConfig::default());

    while !screen.is_finished() {
        screen.update(secs(0.05)).unwrap();
    }

    for event in events.borrow().iter() {
        if let Event::Alpha(alpha) = event {
            assert!((0.0..=1.0).contains(alpha), "alpha out of range: {alpha}");
        }
    }
}

#[test]
fn custom_durations_and_scene() {
    let config = SplashConfig {
        fade_in_secs: 0.5,
        stay_secs: 0.5,
        fade_out_secs: 0.5,
        next_scene: "menu".to_string(),
    };
    let (mut screen, _, scenes) = splash(&config);

    let mut frames = 0;
    while !screen.is_finished() {
        screen.update(secs(0.25)).unwrap();
        frames += 1;
    }

    // Three frames per timed step plus the hand-over frame.
    assert_eq!(frames, 10);
    assert_eq!(*scenes.borrow(), vec!["menu".to_string()]);
}

#[test]
fn app_builds_splash_from_config() {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&opened);
    let mut app = GameApp::new(
        GameConfig::default(),
        Box::new(move |name: &str| sink.borrow_mut().push(name.to_string())),
    )
    .unwrap();
    app.start();

    let events = Rc::new(RefCell::new(Vec::new()));
    let screen = app
        .splash_screen(
            Box::new(Recorder(Rc::clone(&events))),
            Box::new(|_: &str| {}),
        )
        .unwrap();

    assert_eq!(screen.phase(), Some(SplashPhase::FadeIn));
    assert!(events.borrow().contains(&Event::PlayAudio));
    assert_eq!(*opened.borrow(), vec!["_splash_screen".to_string()]);
}

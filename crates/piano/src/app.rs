use crate::{
    AppCommand, AppError, AppResult, PianoEvent, ProxyDispatch, config::Config,
    key_layout::key_index_at, status_line::status_title,
};

use piano_core::{InputRouter, Piano, Player, PointerKind, SynthEngine, SystemClock};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tao::{
    dpi::LogicalSize,
    event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::{EventLoopProxy, EventLoopWindowTarget},
    keyboard::Key,
    window::{Window, WindowBuilder},
};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, instrument, warn};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Close the window and exit.
    Exit,
}

/// Main application state.
///
/// Lives on the main thread with the window and the audio stream. Playback
/// timers run on `runtime` and report back through [`PianoEvent`]s.
pub struct App {
    pub(crate) piano: Piano<SynthEngine, SystemClock, ProxyDispatch>,
    pub(crate) router: InputRouter,
    pub(crate) window: Window,
    pub(crate) cursor_x: Option<f64>,
    pub(crate) title: String,
    /// Owns the playback worker threads; dropping it stops them.
    pub(crate) _runtime: Runtime,
}

impl App {
    /// Build the window, playback runtime and piano from `config`.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(
        config: &Config,
        target: &EventLoopWindowTarget<PianoEvent>,
        proxy: EventLoopProxy<PianoEvent>,
    ) -> AppResult<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("piano-playback")
            .enable_time()
            .build()
            .map_err(|e| AppError::RuntimeError {
                reason: format!("Failed to create tokio runtime: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let window = WindowBuilder::new()
            .with_title("Virtual Piano")
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
            .build(target)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let player = Player::new(runtime.handle().clone(), ProxyDispatch::new(proxy));

        let piano = Piano::new(
            SynthEngine::new(config.synth.settings()),
            SystemClock::new(),
            player,
            config.feedback.palette(),
            config.feedback.tracker(),
        );

        let router = InputRouter::new(config.keyboard.keymap());

        info!(
            keys = router.keymap().len(),
            waveform = %config.synth.waveform,
            "Piano ready"
        );

        let mut app = Self {
            piano,
            router,
            window,
            cursor_x: None,
            title: String::new(),
            _runtime: runtime,
        };
        app.refresh_title();

        Ok(app)
    }

    /// Handle a window event from the main loop.
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> Flow {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window closed");
                return Flow::Exit;
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = Some(position.x);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_x = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(x) = self.cursor_x {
                    self.press_at(x, PointerKind::Mouse);
                }
            }
            WindowEvent::Touch(Touch {
                phase: TouchPhase::Started,
                location,
                ..
            }) => {
                self.press_at(location.x, PointerKind::Touch);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Escape => self.handle_command(AppCommand::StopPlayback),
                    Key::Character(text) => self.handle_key(text, event.repeat),
                    _ => {}
                }
            }
            _ => {}
        }

        Flow::Continue
    }

    /// Handle a playback callback forwarded from the runtime.
    pub fn handle_piano_event(&mut self, event: PianoEvent) {
        match event {
            PianoEvent::Replay { playback_id, note } => {
                self.piano.replay(playback_id, &note);
            }
            PianoEvent::PlaybackFinished { playback_id } => {
                self.piano.playback_finished(playback_id);
                info!(playback_id = %playback_id, "Playback complete");
            }
        }
        self.refresh_title();
    }

    /// Expire highlights whose window has elapsed.
    pub fn tick(&mut self) {
        if self.piano.tick() {
            self.refresh_title();
        }
    }

    /// When the event loop must wake up next to clear a highlight.
    pub fn next_wakeup(&self) -> Option<Instant> {
        let deadline = self.piano.highlights().next_deadline()?;
        Some(self.piano.recorder().clock().instant_at(deadline))
    }

    fn handle_key(&mut self, text: &str, repeat: bool) {
        if let Some(routed) = self.router.handle_physical_key(text, repeat) {
            self.piano.press(routed);
            self.refresh_title();
            return;
        }

        if repeat {
            return;
        }

        if let Some(command) = AppCommand::from_key(text) {
            self.handle_command(command);
        }
    }

    fn press_at(&mut self, x: f64, kind: PointerKind) {
        let width = f64::from(self.window.inner_size().width);
        let keymap = self.router.keymap();

        let Some(element) = key_index_at(x, width, keymap.len()).and_then(|i| keymap.get(i))
        else {
            return;
        };

        let routed = self.router.handle_pointer(kind, element);
        self.piano.press(routed);
        self.refresh_title();
    }

    #[instrument(skip(self))]
    fn handle_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::ToggleRecording => match self.piano.toggle_recording() {
                Ok(state) => debug!(?state, "Record toggled"),
                Err(e) => warn!(error = ?e, "Record toggle failed"),
            },
            AppCommand::Play => {
                // The play control is disabled while recording or empty.
                if !self.piano.controls().play_enabled {
                    debug!("Play is disabled");
                    return;
                }
                if let Err(e) = self.piano.play() {
                    warn!(error = ?e, "Playback failed to start");
                }
            }
            AppCommand::StopPlayback => {
                self.piano.stop_playback();
            }
            AppCommand::SelectWaveform(waveform) => {
                self.piano.sink_mut().set_waveform(waveform);
            }
        }
        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        let title = status_title(
            &self.piano.controls(),
            self.piano.sink().settings().waveform,
            &self.piano.lit_keys(),
        );

        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }
}

//! Virtual Piano: play, record and replay notes from the computer keyboard,
//! mouse or touch screen.

mod app;
mod app_command;
mod config;
mod error;
mod key_layout;
mod piano_event;
mod proxy_dispatch;
mod status_line;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::{App, Flow},
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    piano_event::PianoEvent,
    proxy_dispatch::ProxyDispatch,
};

use crate::config::Config;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("piano=debug,piano_core=debug")),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<PianoEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // App lives on the main thread: the window and the cpal stream are
    // bound to it. Playback timers report back through `proxy`.
    let mut app = match App::new(&config, &event_loop, proxy) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start piano: {:?}", e);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::UserEvent(piano_event) => app.handle_piano_event(piano_event),
            Event::WindowEvent { event, .. } => {
                if app.handle_window_event(&event) == Flow::Exit {
                    *control_flow = ControlFlow::ExitWithCode(0);
                    return;
                }
            }
            _ => {}
        }

        app.tick();

        *control_flow = match app.next_wakeup() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    });
}

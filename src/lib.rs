#![warn(rust_2018_idioms)]
//! A decorative battery avatar for the terminal: a little pet whose mood
//! tracks your battery charge, with an optional manually-pinned mood.
//!
//! The interesting parts live in [`collection`] (telemetry acquisition and
//! the fallback simulator) and [`avatar`] (the pure state-to-visual
//! mapping); everything else is presentation.

#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

pub mod app;
pub mod avatar;
pub mod canvas;
pub mod collection;
pub mod constants;
pub mod event;
pub mod options;
pub mod utils {
    pub mod cancellation_token;
    pub mod logging;
}

use std::{
    sync::{Arc, mpsc::Sender},
    thread,
    time::{Duration, Instant},
};

use crossterm::event::{Event, poll, read};

use app::AppConfigFields;
use collection::{BatteryCollector, TelemetrySource};
use constants::INPUT_POLL_IN_MILLISECONDS;
use event::AvatarEvent;
use utils::cancellation_token::CancellationToken;

/// Spawn the thread that polls crossterm for user input and forwards it to
/// the main loop, lightly throttled.
pub fn create_input_thread(
    sender: Sender<AvatarEvent>, cancellation_token: Arc<CancellationToken>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut mouse_timer = Instant::now();
        let mut keyboard_timer = Instant::now();

        loop {
            if let Some(is_terminated) = cancellation_token.try_check() {
                // We don't block.
                if is_terminated {
                    break;
                }
            }

            if let Ok(poll) = poll(Duration::from_millis(INPUT_POLL_IN_MILLISECONDS)) {
                if poll {
                    if let Ok(event) = read() {
                        match event {
                            Event::Key(key) => {
                                if Instant::now().duration_since(keyboard_timer).as_millis() >= 20 {
                                    if sender.send(AvatarEvent::KeyInput(key)).is_err() {
                                        break;
                                    }
                                    keyboard_timer = Instant::now();
                                }
                            }
                            Event::Mouse(mouse) => {
                                if Instant::now().duration_since(mouse_timer).as_millis() >= 20 {
                                    if sender.send(AvatarEvent::MouseInput(mouse)).is_err() {
                                        break;
                                    }
                                    mouse_timer = Instant::now();
                                }
                            }
                            Event::Resize(_, _) => {
                                if sender.send(AvatarEvent::Resize).is_err() {
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    })
}

/// Spawn the thread that owns the [`BatteryCollector`]: acquire telemetry
/// (or fall back to the simulator), then tick at the configured rate until
/// cancelled, sending a state snapshot to the main loop after each pass.
pub fn create_collection_thread<S: TelemetrySource + Send + 'static>(
    sender: Sender<AvatarEvent>, cancellation_token: Arc<CancellationToken>,
    app_config_fields: &AppConfigFields, source: S,
) -> thread::JoinHandle<()> {
    let update_time = app_config_fields.tick_rate_in_milliseconds;
    let starting_level = app_config_fields.starting_level;
    let starting_charging = app_config_fields.starting_charging;

    thread::spawn(move || {
        let mut collector =
            BatteryCollector::with_starting_state(source, starting_level, starting_charging);
        collector.init();

        // Push the initial state so the UI knows right away whether the
        // battery is real or simulated.
        if sender
            .send(AvatarEvent::Update(Box::new(collector.state)))
            .is_ok()
        {
            loop {
                if cancellation_token.sleep_with_cancellation(Duration::from_millis(update_time)) {
                    break;
                }

                collector.update();
                if sender
                    .send(AvatarEvent::Update(Box::new(collector.state)))
                    .is_err()
                {
                    break;
                }
            }
        }

        collector.teardown();
    })
}

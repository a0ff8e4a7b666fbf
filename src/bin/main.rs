#![warn(rust_2018_idioms)]

use std::{
    io::stdout,
    panic,
    sync::{Arc, mpsc},
};

use anyhow::{Context, Result};
use battpal::{
    canvas::{CanvasStyles, Painter},
    collection::NullTelemetry,
    create_collection_thread, create_input_thread,
    event::{AvatarEvent, handle_key_event_or_break, handle_mouse_event},
    options,
    utils::cancellation_token::CancellationToken,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tui::{Terminal, backend::CrosstermBackend};

fn main() -> Result<()> {
    let args = options::args::get_args();

    #[cfg(all(feature = "fern", debug_assertions))]
    {
        battpal::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    // Anything that can fail on user input happens before we touch the
    // terminal, so errors print like a normal CLI tool.
    let config_path = options::get_config_path(args.general_args.config_location.as_deref());
    let config = options::create_or_get_config(config_path.as_deref())
        .context("Unable to properly parse or create the config file.")?;

    let mut app = options::init_app(&args, &config)
        .context("Found an issue while building the app.")?;
    let styles = CanvasStyles::new(config.style.as_ref())
        .context("Found an issue while parsing the config file's styling.")?;
    let mut painter = Painter::init(styles);

    let cancellation_token = Arc::new(CancellationToken::default());
    let (sender, receiver) = mpsc::channel();

    let _input_thread = create_input_thread(sender.clone(), cancellation_token.clone());

    let collection_thread = {
        let force_simulation = app.app_config_fields.force_simulation;

        #[cfg(feature = "battery")]
        {
            if force_simulation {
                create_collection_thread(
                    sender.clone(),
                    cancellation_token.clone(),
                    &app.app_config_fields,
                    NullTelemetry,
                )
            } else {
                create_collection_thread(
                    sender.clone(),
                    cancellation_token.clone(),
                    &app.app_config_fields,
                    battpal::collection::starship::StarshipTelemetry::new(),
                )
            }
        }
        #[cfg(not(feature = "battery"))]
        {
            let _ = force_simulation;
            create_collection_thread(
                sender.clone(),
                cancellation_token.clone(),
                &app.app_config_fields,
                NullTelemetry,
            )
        }
    };

    // Ctrl-C and termination signals route through the same event channel.
    {
        let sender = sender.clone();
        ctrlc::set_handler(move || {
            let _ = sender.send(AvatarEvent::Terminate);
        })
        .context("Unable to set up the termination handler.")?;
    }

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    // Make sure a panic in the draw path still restores the terminal.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    painter.draw_data(&mut terminal, &app)?;

    while let Ok(recv) = receiver.recv() {
        match recv {
            AvatarEvent::KeyInput(key) => {
                if handle_key_event_or_break(key, &mut app) {
                    break;
                }
                painter.draw_data(&mut terminal, &app)?;
            }
            AvatarEvent::MouseInput(mouse) => {
                handle_mouse_event(mouse, &mut app);
                painter.draw_data(&mut terminal, &app)?;
            }
            AvatarEvent::Update(state) => {
                app.update_battery(*state);
                painter.draw_data(&mut terminal, &app)?;
            }
            AvatarEvent::Resize => {
                painter.draw_data(&mut terminal, &app)?;
            }
            AvatarEvent::Terminate => {
                break;
            }
        }
    }

    // Stop the workers before leaving the alternate screen; the collection
    // thread tears its collector down on the way out.
    cancellation_token.cancel();
    let _ = collection_thread.join();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

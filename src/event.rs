//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::{app::App, collection::BatteryState};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum AvatarEvent {
    Resize,
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),
    Update(Box<BatteryState>),
    Terminate,
}

/// Handle a [`MouseEvent`].
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) {
    match event.kind {
        MouseEventKind::ScrollUp => app.handle_scroll_up(),
        MouseEventKind::ScrollDown => app.handle_scroll_down(),
        MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
            if app.mode_menu.is_open {
                app.on_enter();
            } else {
                app.toggle_mode_menu();
            }
        }
        _ => {}
    }
}

/// Handle a [`KeyEvent`]. Returns true if the program should exit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    if event.modifiers.is_empty() {
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Up => app.on_up_key(),
            KeyCode::Down => app.on_down_key(),
            KeyCode::Enter => app.on_enter(),
            KeyCode::Esc => app.on_esc(),
            KeyCode::Char(caught_char) => app.on_char_key(caught_char),
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        if event.code == KeyCode::Char('c') {
            return true;
        }
    }

    false
}

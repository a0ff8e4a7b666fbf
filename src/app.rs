//! Main application state.

use crate::{
    avatar::{self, ModeOverride, VisualDescriptor},
    collection::BatteryState,
};

/// The seven entries of the mood menu, in display order.
pub const MODE_MENU_ENTRIES: [(ModeOverride, &str, &str); 7] = [
    (ModeOverride::Auto, "Auto (Battery Based)", "🔄"),
    (ModeOverride::Happy, "Happy Mode", "😄"),
    (ModeOverride::Party, "Party Mode", "🎉"),
    (ModeOverride::Cool, "Cool Mode", "😎"),
    (ModeOverride::Angry, "Angry Mode", "😡"),
    (ModeOverride::Sleepy, "Sleepy Mode", "😴"),
    (ModeOverride::Love, "Love Mode", "💖"),
];

/// Behaviour settings fixed at startup.
#[derive(Debug, Clone)]
pub struct AppConfigFields {
    pub tick_rate_in_milliseconds: u64,
    pub force_simulation: bool,
    pub starting_level: u8,
    pub starting_charging: bool,
}

impl Default for AppConfigFields {
    fn default() -> Self {
        AppConfigFields {
            tick_rate_in_milliseconds: crate::constants::DEFAULT_TICK_RATE_IN_MILLISECONDS,
            force_simulation: false,
            starting_level: 50,
            starting_charging: false,
        }
    }
}

/// State for the mood menu overlay. Selection is tracked here rather than
/// mutated into the drawn widgets, so drawing stays a pure projection.
#[derive(Debug, Default)]
pub struct ModeMenuState {
    pub is_open: bool,
    pub selected: usize,
}

impl ModeMenuState {
    fn move_up(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(MODE_MENU_ENTRIES.len() - 1);
    }

    fn move_down(&mut self) {
        self.selected = (self.selected + 1) % MODE_MENU_ENTRIES.len();
    }
}

#[derive(Debug, Default)]
pub struct App {
    /// The latest snapshot from the collection thread.
    pub battery: BatteryState,
    /// The active mood override. Starts on auto, never persisted.
    pub mode: ModeOverride,
    pub mode_menu: ModeMenuState,
    pub app_config_fields: AppConfigFields,
}

impl App {
    pub fn new(app_config_fields: AppConfigFields, starting_mode: ModeOverride) -> Self {
        let battery = BatteryState {
            level: app_config_fields.starting_level,
            charging: app_config_fields.starting_charging,
            supported: false,
        };

        App {
            battery,
            mode: starting_mode,
            mode_menu: ModeMenuState::default(),
            app_config_fields,
        }
    }

    /// Replace the active mood override; takes effect on the next
    /// resolution.
    pub fn set_mode(&mut self, mode: ModeOverride) {
        self.mode = mode;
    }

    /// Store a fresh battery snapshot from the collection thread.
    pub fn update_battery(&mut self, battery: BatteryState) {
        self.battery = battery;
    }

    /// Resolve what should currently be drawn.
    pub fn current_visual(&self) -> VisualDescriptor {
        avatar::resolve(&self.battery, self.mode)
    }

    pub fn on_up_key(&mut self) {
        if self.mode_menu.is_open {
            self.mode_menu.move_up();
        }
    }

    pub fn on_down_key(&mut self) {
        if self.mode_menu.is_open {
            self.mode_menu.move_down();
        }
    }

    /// Enter applies the highlighted menu entry and closes the menu.
    pub fn on_enter(&mut self) {
        if self.mode_menu.is_open {
            let (mode, _, _) = MODE_MENU_ENTRIES[self.mode_menu.selected];
            self.set_mode(mode);
            self.mode_menu.is_open = false;
        }
    }

    pub fn on_esc(&mut self) {
        self.mode_menu.is_open = false;
    }

    pub fn on_char_key(&mut self, caught_char: char) {
        match caught_char {
            'm' | 'M' => self.toggle_mode_menu(),
            'a' | 'A' => self.set_mode(ModeOverride::Auto),
            _ => {}
        }
    }

    pub fn toggle_mode_menu(&mut self) {
        self.mode_menu.is_open = !self.mode_menu.is_open;
        if self.mode_menu.is_open {
            // Open on the entry that matches the active mode.
            self.mode_menu.selected = MODE_MENU_ENTRIES
                .iter()
                .position(|(mode, _, _)| *mode == self.mode)
                .unwrap_or(0);
        }
    }

    pub fn handle_scroll_up(&mut self) {
        self.on_up_key();
    }

    pub fn handle_scroll_down(&mut self) {
        self.on_down_key();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::Mood;

    #[test]
    fn menu_selection_wraps_both_ways() {
        let mut app = App::default();
        app.toggle_mode_menu();
        assert_eq!(app.mode_menu.selected, 0);

        app.on_up_key();
        assert_eq!(app.mode_menu.selected, MODE_MENU_ENTRIES.len() - 1);

        app.on_down_key();
        assert_eq!(app.mode_menu.selected, 0);
    }

    #[test]
    fn enter_applies_the_selected_mode_and_closes_the_menu() {
        let mut app = App::default();
        app.toggle_mode_menu();
        app.on_down_key();
        app.on_down_key();
        app.on_enter();

        assert_eq!(app.mode, ModeOverride::Party);
        assert!(!app.mode_menu.is_open);
        assert_eq!(app.current_visual().mood, Mood::Party);
    }

    #[test]
    fn keys_are_ignored_while_the_menu_is_closed() {
        let mut app = App::default();
        app.on_up_key();
        app.on_down_key();
        app.on_enter();

        assert_eq!(app.mode, ModeOverride::Auto);
        assert_eq!(app.mode_menu.selected, 0);
    }

    #[test]
    fn reopening_highlights_the_active_mode() {
        let mut app = App::default();
        app.set_mode(ModeOverride::Sleepy);
        app.toggle_mode_menu();
        assert_eq!(app.mode_menu.selected, 5);
    }

    #[test]
    fn fresh_battery_snapshots_feed_resolution() {
        let mut app = App::default();
        app.update_battery(BatteryState {
            level: 10,
            charging: false,
            supported: true,
        });
        assert_eq!(app.current_visual().mood, Mood::Critical);

        app.update_battery(BatteryState {
            level: 10,
            charging: true,
            supported: true,
        });
        assert_eq!(app.current_visual().mood, Mood::Charging);
    }
}

//! Rendering via ratatui.

pub mod drawing_utils;

mod widgets {
    pub mod avatar_card;
    pub mod mode_menu;
}

use std::io;

use tui::{Terminal, backend::Backend, style::Color};

use crate::{
    app::App,
    avatar::{Mood, VisualDescriptor},
    options::{OptionError, config::style::StyleConfig},
};

/// User-configurable colors, resolved once at startup. Anything unset
/// falls through to the color baked into the descriptor table.
#[derive(Debug, Default)]
pub struct CanvasStyles {
    charging_color: Option<Color>,
    high_battery_color: Option<Color>,
    medium_battery_color: Option<Color>,
    low_battery_color: Option<Color>,
}

impl CanvasStyles {
    pub fn new(config: Option<&StyleConfig>) -> Result<Self, OptionError> {
        let mut styles = CanvasStyles::default();

        if let Some(config) = config {
            styles.charging_color = parse_colour_field(&config.charging_color)?;
            styles.high_battery_color = parse_colour_field(&config.high_battery_color)?;
            styles.medium_battery_color = parse_colour_field(&config.medium_battery_color)?;
            styles.low_battery_color = parse_colour_field(&config.low_battery_color)?;
        }

        Ok(styles)
    }

    /// The color the given visual should be drawn with. Overrides apply per
    /// auto-mode tier; pinned moods always keep their built-in color.
    pub(crate) fn visual_color(&self, visual: &VisualDescriptor) -> Color {
        let override_color = match visual.mood {
            Mood::Charging => self.charging_color,
            Mood::Happy | Mood::Good => self.high_battery_color,
            Mood::Neutral => self.medium_battery_color,
            Mood::Worried | Mood::Critical => self.low_battery_color,
            _ => None,
        };

        override_color.unwrap_or(visual.color)
    }
}

fn parse_colour_field(field: &Option<String>) -> Result<Option<Color>, OptionError> {
    field
        .as_deref()
        .map(|s| crate::options::config::style::str_to_colour(s).map_err(OptionError::config))
        .transpose()
}

pub struct Painter {
    pub styles: CanvasStyles,
}

impl Painter {
    pub fn init(styles: CanvasStyles) -> Self {
        Painter { styles }
    }

    /// Draw one frame: the avatar card, and the mood menu on top of it when
    /// open.
    pub fn draw_data<B: Backend>(
        &mut self, terminal: &mut Terminal<B>, app: &App,
    ) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|f| {
            let area = f.area();
            let card_loc = drawing_utils::centered_rect(44, 15, area);
            widgets::avatar_card::draw_avatar_card(self, f, app, card_loc);

            if app.mode_menu.is_open {
                let menu_loc = drawing_utils::centered_rect(30, 11, area);
                widgets::mode_menu::draw_mode_menu(self, f, app, menu_loc);
            }
        })?;

        Ok(())
    }
}

use tui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, MODE_MENU_ENTRIES},
    canvas::{Painter, drawing_utils},
};

/// Draw the mood menu as an overlay on top of the card.
pub fn draw_mode_menu(painter: &Painter, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
    let visual = app.current_visual();
    let color = painter.styles.visual_color(&visual);

    // Size the overlay to the widest entry instead of the whole draw area.
    let inner_width = MODE_MENU_ENTRIES
        .iter()
        .map(|(_, name, icon)| icon.width() + 1 + name.width())
        .max()
        .unwrap_or(0) as u16;
    let menu_loc = drawing_utils::centered_rect(
        (inner_width + 6).max(20),
        MODE_MENU_ENTRIES.len() as u16 + 2,
        draw_loc,
    );

    let items = MODE_MENU_ENTRIES
        .iter()
        .map(|(mode, name, icon)| {
            let marker = if *mode == app.mode { "• " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(*icon),
                Span::raw(" "),
                Span::raw(*name),
            ]))
        })
        .collect::<Vec<_>>();

    let menu = List::new(items)
        .block(
            Block::default()
                .title(Line::from(Span::styled(
                    " Mood ── Esc to close ",
                    Style::default().fg(color),
                )))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .highlight_style(
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    state.select(Some(app.mode_menu.selected));

    f.render_widget(Clear, menu_loc);
    f.render_stateful_widget(menu, menu_loc, &mut state);
}

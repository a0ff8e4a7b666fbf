use tui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::{app::App, avatar::ModeOverride, canvas::Painter};

/// Draw the avatar card: hat, face, expression, the battery gauge, and the
/// telemetry indicator.
pub fn draw_avatar_card(painter: &Painter, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
    let visual = app.current_visual();
    let color = painter.styles.visual_color(&visual);

    let card_block = Block::default()
        .title(Line::from(Span::styled(
            " bpal ",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = card_block.inner(draw_loc);
    f.render_widget(card_block, draw_loc);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // hat
            Constraint::Length(1), // face
            Constraint::Length(1), // expression
            Constraint::Length(1),
            Constraint::Length(1), // gauge
            Constraint::Length(1),
            Constraint::Length(1), // mood
            Constraint::Length(1), // telemetry indicator
            Constraint::Min(0),
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    for (text, row) in [
        (visual.hat, rows[0]),
        (visual.character, rows[1]),
        (visual.expression, rows[2]),
    ] {
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            row,
        );
    }

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(app.battery.level))
        .label(format!("{}%", app.battery.level));
    f.render_widget(gauge, rows[4]);

    let mood_line = if app.mode == ModeOverride::Auto {
        Line::from(vec![
            Span::raw("mood: "),
            Span::styled(visual.mood.as_str(), Style::default().fg(color)),
        ])
    } else {
        Line::from(vec![
            Span::raw("mood: "),
            Span::styled(visual.mood.as_str(), Style::default().fg(color)),
            Span::styled(" (pinned)", Style::default().add_modifier(Modifier::DIM)),
        ])
    };
    f.render_widget(
        Paragraph::new(mood_line).alignment(Alignment::Center),
        rows[6],
    );

    let indicator = if app.battery.supported {
        Span::styled("● real-time battery", Style::default().fg(color))
    } else {
        Span::styled(
            "◌ simulated battery",
            Style::default().add_modifier(Modifier::DIM),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(indicator)).alignment(Alignment::Center),
        rows[7],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "m: mood menu  q: quit",
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
        rows[9],
    );
}

use tui::layout::Rect;

/// A `width` x `height` [`Rect`] centered inside `area`, shrunk to fit if
/// the terminal is smaller than that.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

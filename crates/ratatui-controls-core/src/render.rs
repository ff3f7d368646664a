use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::position::BarPosition;

pub const TRACK_SYMBOL: &str = "─";
pub const FILL_SYMBOL: &str = "━";
pub const HANDLE_SYMBOL: &str = "●";

/// Draws `text` on the first row of `area`, clipped to its width.
pub fn render_line(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    buf.set_style(Rect::new(area.x, area.y, area.width, 1), style);
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

/// Draws `text` horizontally centered on the first row of `area`.
pub fn render_centered(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = (UnicodeWidthStr::width(text) as u16).min(area.width);
    let x = area.x + (area.width - w) / 2;
    buf.set_stringn(x, area.y, text, w as usize, style);
}

/// Column (relative to the start of a track of `width` cells) for an offset in percent.
pub fn column_for(percent: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let col = (percent.clamp(0.0, 100.0) / 100.0 * width as f64).floor();
    (col as u16).min(width - 1)
}

/// Draws the track on the first row of `area` and the fill segment over it.
pub fn render_bar(
    area: Rect,
    buf: &mut Buffer,
    position: &BarPosition,
    track_style: Style,
    fill_style: Style,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for dx in 0..area.width {
        if let Some(cell) = buf.cell_mut((area.x + dx, area.y)) {
            cell.set_symbol(TRACK_SYMBOL);
            cell.set_style(track_style);
        }
    }
    if position.width <= 0.0 {
        return;
    }
    let w = area.width as f64;
    let start = (position.offset.clamp(0.0, 100.0) / 100.0 * w).floor() as u16;
    let end = ((position.offset + position.width).clamp(0.0, 100.0) / 100.0 * w).round() as u16;
    for dx in start..end.min(area.width) {
        if let Some(cell) = buf.cell_mut((area.x + dx, area.y)) {
            cell.set_symbol(FILL_SYMBOL);
            cell.set_style(fill_style);
        }
    }
}

pub fn render_handle(x: u16, y: u16, buf: &mut Buffer, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(HANDLE_SYMBOL);
        cell.set_style(style);
    }
}

/// Formats a number without a trailing `.0` for whole values.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

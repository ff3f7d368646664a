use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::render;
use crate::slider::Slider;
use crate::theme::Theme;

/// Numeric attributes exposed by each handle for assistive technology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleAttrs {
    pub tab_index: i32,
    pub value_min: f64,
    pub value_max: f64,
    pub value_now: f64,
    pub parent_width: Option<f64>,
}

impl Slider {
    /// Renders label, description and the input row, recording the areas used for hit-testing.
    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.handle_hits.clear();
        if area.width == 0 || area.height == 0 {
            self.container.clear();
            self.bar.clear();
            return;
        }

        let mut y = area.y;
        let bottom = area.y.saturating_add(area.height);
        if let Some(label) = self.label.as_deref() {
            render::render_line(Rect::new(area.x, y, area.width, 1), buf, label, theme.heading);
            y += 1;
        }
        if let Some(description) = self.description.as_deref() {
            if y < bottom {
                render::render_line(
                    Rect::new(area.x, y, area.width, 1),
                    buf,
                    description,
                    theme.text_muted,
                );
                y += 1;
            }
        }
        if y >= bottom {
            self.container.clear();
            self.bar.clear();
            return;
        }

        let row = Rect::new(area.x, y, area.width, 1);
        self.container.set(row);
        self.bar.set(row);
        if self.remeasure {
            self.remeasure = false;
            self.measure();
        }

        let position = self.position();
        render::render_bar(row, buf, &position.bar, theme.track, theme.fill);

        let focused = if self.controller.has_focus() {
            self.focused_index()
        } else {
            None
        };
        for (i, handle) in position.handles.iter().enumerate() {
            let x = row.x + render::column_for(handle.percent, row.width);
            let style = if focused == Some(i) {
                theme.handle_focused
            } else {
                theme.handle
            };
            render::render_handle(x, row.y, buf, style);
            self.handle_hits.push(Rect::new(x, row.y, 1, 1));
        }
    }

    pub fn handle_attrs(&self) -> Vec<HandleAttrs> {
        let range = self.controller.range();
        self.controller
            .value()
            .as_slice()
            .iter()
            .map(|v| HandleAttrs {
                tab_index: 0,
                value_min: range.min,
                value_max: range.max,
                value_now: *v,
                parent_width: self.parent_width,
            })
            .collect()
    }

    /// Index into the rendered handles of the handle holding keyboard focus.
    fn focused_index(&self) -> Option<usize> {
        if self.controller.value().is_multi() {
            self.controller.active_handle()
        } else {
            Some(0)
        }
    }
}

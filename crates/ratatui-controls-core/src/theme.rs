use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub heading: Style,
    pub accent: Style,
    pub danger: Style,
    pub track: Style,
    pub fill: Style,
    pub handle: Style,
    pub handle_focused: Style,
    pub button: Style,
    pub button_disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            heading: Style::default().bold(),
            accent: Style::default().cyan(),
            danger: Style::default().red(),
            track: Style::default().dark_gray(),
            fill: Style::default().cyan(),
            handle: Style::default().white(),
            handle_focused: Style::default().cyan().bold(),
            button: Style::default().cyan(),
            button_disabled: Style::default().dark_gray(),
        }
    }
}

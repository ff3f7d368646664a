use crossterm::event::DisableFocusChange;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableFocusChange;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_controls::crossterm_input::input_event_from_crossterm;
use ratatui_controls::input::InputEvent;
use ratatui_controls::listeners::WindowListeners;
use ratatui_controls::render::format_number;
use ratatui_controls::slider::Slider;
use ratatui_controls::slider::SliderOptions;
use ratatui_controls::slider::SliderValue;
use ratatui_controls::stepper::InputStepper;
use ratatui_controls::stepper::StepperOptions;
use ratatui_controls::theme::Theme;
use std::io;
use std::time::Duration;
use std::time::Instant;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Volume,
    Price,
    Adults,
}

struct App {
    volume: Slider,
    price: Slider,
    adults: InputStepper,
    focus: Option<Focus>,
    window: WindowListeners,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let window = WindowListeners::new();
    let volume = Slider::with_window(
        SliderOptions {
            label: Some("Volume".into()),
            description: Some("Arrows step by 5, Home/End jump".into()),
            default_value: Some(SliderValue::Single(40.0)),
            min: 0.0,
            max: 100.0,
            step: 5.0,
            ..Default::default()
        },
        window.clone(),
    )?
    .on_change(|v| tracing::info!(?v, "volume changed"));
    let price = Slider::with_window(
        SliderOptions {
            label: Some("Price".into()),
            description: Some("Drag either handle or click the bar".into()),
            default_value: Some(SliderValue::Multi(vec![20.0, 300.0])),
            min: 0.0,
            max: 500.0,
            step: 10.0,
            ..Default::default()
        },
        window.clone(),
    )?;
    let adults = InputStepper::with_options(StepperOptions {
        label: Some("Adults".into()),
        help: Some("You need to enter count of adults".into()),
        min_value: 1.0,
        max_value: 10.0,
        default_value: 2.0,
        ..Default::default()
    })?;

    let mut app = App {
        volume,
        price,
        adults,
        focus: None,
        window,
    };

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &mut app);

    app.volume.unmount();
    app.price.unmount();
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res.map_err(Into::into)
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let theme = Theme::default();
    let now = Instant::now();
    app.volume.mount(now);
    app.price.mount(now);

    loop {
        let now = Instant::now();
        app.volume.tick(now);
        app.price.tick(now);

        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let block = Block::default()
                .title("Controls (Tab to move focus, q to quit)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let [volume_area, price_area, adults_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Length(3),
                ])
                .areas(inner);

            let buf = f.buffer_mut();
            app.volume.render_ref(volume_area, buf, &theme);
            app.price.render_ref(price_area, buf, &theme);
            app.adults.render_ref(adults_area, buf, &theme);

            let price = app
                .price
                .value()
                .as_slice()
                .iter()
                .map(|v| format_number(*v))
                .collect::<Vec<_>>()
                .join(" - ");
            let status_line = format!(
                "volume={}  price={price}  adults={}  listeners={}",
                format_number(app.volume.value().as_slice()[0]),
                format_number(app.adults.value()),
                app.window.total(),
            );
            buf.set_span(status.x, status.y, &Span::raw(status_line), status.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(16))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q')) {
                return Ok(());
            }
        }
        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        dispatch(app, ev);
    }
}

fn dispatch(app: &mut App, ev: InputEvent) {
    if let InputEvent::Key(key) = &ev {
        if key.code == ratatui_controls::input::KeyCode::Tab && !app.controls_hold_focus() {
            app.focus_first();
            return;
        }
        if key.code == ratatui_controls::input::KeyCode::Tab && app.adults.is_focused() {
            app.adults.blur();
            app.focus_first();
            return;
        }
    }

    app.volume.handle_event(ev.clone());
    app.price.handle_event(ev.clone());
    app.adults.handle_event(ev.clone());

    // A slider that tabbed past its last handle hands focus to the next control.
    if matches!(ev, InputEvent::Key(_)) {
        app.advance_focus();
    }
}

impl App {
    fn controls_hold_focus(&self) -> bool {
        self.volume.controller().has_focus()
            || self.price.controller().has_focus()
            || self.adults.is_focused()
    }

    fn focus_first(&mut self) {
        self.volume.focus_handle(0);
        self.focus = Some(Focus::Volume);
    }

    fn advance_focus(&mut self) {
        match self.focus {
            Some(Focus::Volume) if !self.volume.controller().has_focus() => {
                self.price.focus_next();
                self.focus = Some(Focus::Price);
            }
            Some(Focus::Price) if !self.price.controller().has_focus() => {
                self.adults.focus();
                self.focus = Some(Focus::Adults);
            }
            _ => {}
        }
    }
}

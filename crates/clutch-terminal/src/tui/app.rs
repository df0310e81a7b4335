//! The interface shell: terminal setup, the event loop and screen routing.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use clutch_app::{AppState, Coordinates, Intent, Screen};

use crate::tui::components::ToastManager;
use crate::tui::input::{InputMode, ScreenAction};
use crate::tui::screens::{
    centered_rect, AuthScreen, EventsScreen, FeedScreen, GpsScreen, NotificationsScreen,
    ProfileScreen, ScreenView,
};
use crate::tui::styles::{Styles, ToastLevel};

/// Events delivered to the shell from background tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// A location fix arrived.
    LocationFix(Coordinates),
}

/// Owns the session store, the screens and the terminal loop.
///
/// Until a user signs in every key goes to the auth gate; afterwards keys
/// route to the active screen, with number keys, Tab and `q` handled
/// globally while no text field is focused.
pub struct TuiApp {
    state: AppState,
    auth: AuthScreen,
    feed: FeedScreen,
    events: EventsScreen,
    gps: GpsScreen,
    profile: ProfileScreen,
    notifications: NotificationsScreen,
    toasts: ToastManager,
    styles: Styles,
    show_help: bool,
    should_quit: bool,
    event_rx: Option<UnboundedReceiver<AppEvent>>,
}

impl TuiApp {
    /// Creates the shell with an unauthenticated session.
    pub fn new(styles: Styles) -> Self {
        Self {
            state: AppState::new(),
            auth: AuthScreen::new(),
            feed: FeedScreen::new(),
            events: EventsScreen::new(),
            gps: GpsScreen::new(),
            profile: ProfileScreen::new(),
            notifications: NotificationsScreen::new(),
            toasts: ToastManager::new(),
            styles,
            show_help: false,
            should_quit: false,
            event_rx: None,
        }
    }

    /// Attaches the receiving end of the background event channel.
    pub fn set_event_receiver(&mut self, rx: UnboundedReceiver<AppEvent>) {
        self.event_rx = Some(rx);
    }

    /// Read access to the session store.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// True once a quit was requested.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the help overlay is up.
    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// The queued toasts.
    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Runs the interface until the user quits.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.toasts.cleanup();
            terminal.draw(|f| self.ui(f))?;

            if let Ok(true) = event::poll(Duration::from_millis(100)) {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
            self.pump_events();

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Routes one key press. Public so tests can drive the shell headless.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        if !self.state.is_authenticated() {
            let action = self.auth.handle_key(key, &self.state);
            if let Some(action) = action {
                self.process_action(action);
            }
            return;
        }

        if self.input_mode() == InputMode::Normal {
            match key.code {
                KeyCode::Char('q') => {
                    self.process_action(ScreenAction::Quit);
                    return;
                }
                KeyCode::Char('h') | KeyCode::Char('?') => {
                    self.show_help = true;
                    return;
                }
                KeyCode::Tab => {
                    let screen = self.state.screen().next();
                    self.dispatch(Intent::NavigateTo { screen });
                    return;
                }
                KeyCode::BackTab => {
                    let screen = self.state.screen().prev();
                    self.dispatch(Intent::NavigateTo { screen });
                    return;
                }
                KeyCode::Char(c @ '1'..='5') => {
                    if let Some(screen) = Screen::from_key(c as u8 - b'0') {
                        self.dispatch(Intent::NavigateTo { screen });
                    }
                    return;
                }
                _ => {}
            }
        }

        let action = match self.state.screen() {
            Screen::Feed => self.feed.handle_key(key, &self.state),
            Screen::Events => self.events.handle_key(key, &self.state),
            Screen::Gps => self.gps.handle_key(key, &self.state),
            Screen::Profile => self.profile.handle_key(key, &self.state),
            Screen::Notifications => self.notifications.handle_key(key, &self.state),
        };
        if let Some(action) = action {
            self.process_action(action);
        }
    }

    /// Applies events queued by background tasks; the run loop calls this
    /// once per tick.
    pub fn pump_events(&mut self) {
        let Some(rx) = self.event_rx.as_mut() else { return };
        let mut pending = Vec::new();
        while let Ok(event) = rx.try_recv() {
            pending.push(event);
        }
        for event in pending {
            match event {
                AppEvent::LocationFix(coordinates) => {
                    self.dispatch(Intent::SetLocation { coordinates });
                }
            }
        }
    }

    fn process_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Dispatch(intent) => self.dispatch(intent),
            ScreenAction::Navigate(screen) => self.dispatch(Intent::NavigateTo { screen }),
            ScreenAction::Toast { level, message } => {
                self.toasts.push(message, level);
            }
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        let description = intent.description();
        match self.state.apply(intent) {
            Ok(()) => self.enter_screen(),
            Err(err) => {
                tracing::debug!(intent = description, error = %err, "intent rejected");
                self.toasts.push(err.to_string(), ToastLevel::Error);
            }
        }
    }

    fn enter_screen(&mut self) {
        match self.state.screen() {
            Screen::Feed => self.feed.on_enter(&self.state),
            Screen::Events => self.events.on_enter(&self.state),
            Screen::Gps => self.gps.on_enter(&self.state),
            Screen::Profile => self.profile.on_enter(&self.state),
            Screen::Notifications => self.notifications.on_enter(&self.state),
        }
    }

    fn input_mode(&self) -> InputMode {
        if !self.state.is_authenticated() {
            return self.auth.input_mode();
        }
        match self.state.screen() {
            Screen::Feed => self.feed.input_mode(),
            Screen::Events => self.events.input_mode(),
            Screen::Gps => self.gps.input_mode(),
            Screen::Profile => self.profile.input_mode(),
            Screen::Notifications => self.notifications.input_mode(),
        }
    }

    fn ui(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(f.size());

        if self.state.is_authenticated() {
            match self.state.screen() {
                Screen::Feed => self.feed.render(f, chunks[0], &self.state, &self.styles),
                Screen::Events => self.events.render(f, chunks[0], &self.state, &self.styles),
                Screen::Gps => self.gps.render(f, chunks[0], &self.state, &self.styles),
                Screen::Profile => self.profile.render(f, chunks[0], &self.state, &self.styles),
                Screen::Notifications => {
                    self.notifications.render(f, chunks[0], &self.state, &self.styles);
                }
            }
        } else {
            self.auth.render(f, chunks[0], &self.state, &self.styles);
        }
        self.render_nav_bar(f, chunks[1]);

        if self.show_help {
            self.render_help_overlay(f);
        }
        self.toasts.render(f, f.size(), &self.styles);
    }

    fn render_nav_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let mode = self.input_mode();
        let mut spans = vec![
            Span::styled(format!(" {} ", mode.as_str()), self.styles.mode_indicator()),
            Span::raw(" "),
        ];
        if self.state.is_authenticated() {
            let current = self.state.screen();
            for screen in Screen::all() {
                let label = format!(
                    " {} {} {} ",
                    screen.key_number(),
                    screen.icon(),
                    screen.name()
                );
                let style = if screen == current {
                    self.styles.selected()
                } else {
                    self.styles.text_muted()
                };
                spans.push(Span::styled(label, style));
            }
            spans.push(Span::styled(
                " | Tab next | h help | q quit",
                self.styles.text_muted(),
            ));
        } else {
            spans.push(Span::styled("CLUTCH CLUB", self.styles.text_highlight()));
            spans.push(Span::styled(
                " | sign in to continue | Ctrl+C quit",
                self.styles.text_muted(),
            ));
        }
        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.styles.border()),
        );
        f.render_widget(bar, area);
    }

    fn render_help_overlay(&self, f: &mut Frame<'_>) {
        let area = centered_rect(60, 70, f.size());
        f.render_widget(Clear, area);

        let lines = vec![
            Line::styled("Global", self.styles.text_highlight()),
            Line::raw("  1-5        switch screen"),
            Line::raw("  Tab/S-Tab  next / previous screen"),
            Line::raw("  q          quit"),
            Line::raw("  h or ?     toggle this help"),
            Line::raw(""),
            Line::styled("Feed", self.styles.text_highlight()),
            Line::raw("  j/k        move selection"),
            Line::raw("  l or Enter like the selected post"),
            Line::raw("  n          compose a post"),
            Line::raw("  b          open notifications"),
            Line::raw(""),
            Line::styled("Events", self.styles.text_highlight()),
            Line::raw("  Enter      open the signup form"),
            Line::raw(""),
            Line::styled("Profile", self.styles.text_highlight()),
            Line::raw("  e          edit the profile"),
            Line::raw(""),
            Line::styled("Forms", self.styles.text_highlight()),
            Line::raw("  Enter      submit"),
            Line::raw("  Esc        cancel"),
        ];
        let help = Paragraph::new(lines)
            .style(self.styles.text())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border_focused())
                    .title(" Help "),
            );
        f.render_widget(help, area);
    }
}

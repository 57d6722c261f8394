//! Application state for the interactive profile screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::client::ProfileClient;
use crate::controller::{FetchOutcome, ProfileController, RequestTicket, ViewState};
use crate::inspector::DetailInspector;
use crate::ui::inspector::inspector_rows;

/// Rows moved by PgUp/PgDn in the inspector.
const PAGE_SCROLL: u16 = 10;

/// Assumed until the terminal reports its size.
const DEFAULT_SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// Messages received from async operations.
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch started by [`App::refresh`] finished.
    ProfileFetched {
        ticket: RequestTicket,
        outcome: FetchOutcome,
    },
}

/// Everything the UI task owns.
pub struct App {
    pub controller: ProfileController,
    pub inspector: DetailInspector,
    /// Sender handed to spawned fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop so it can `select!` on it
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Animation counter for the spinner
    pub tick_count: u64,
    pub should_quit: bool,
    /// Set whenever something visible changed
    pub needs_redraw: bool,
    /// Last known terminal size
    screen: Rect,
}

impl App {
    pub fn new(client: ProfileClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            controller: ProfileController::new(client),
            inspector: DetailInspector::new(),
            message_tx,
            message_rx: Some(message_rx),
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
            screen: DEFAULT_SCREEN,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Record a new terminal size and re-clamp the inspector to it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        self.fit_inspector();
        self.mark_dirty();
    }

    /// Scroll limits follow the wrapped record at the current size.
    fn fit_inspector(&mut self) {
        if let Some(profile) = self.controller.profile() {
            let (rows, viewport) = inspector_rows(self.screen, profile);
            self.inspector.fit(rows.len(), viewport);
        }
    }

    /// Start a fetch on a background task. Must be called inside a Tokio
    /// runtime.
    pub fn refresh(&mut self) -> RequestTicket {
        let ticket = self.controller.begin_load();
        self.inspector.close();
        self.mark_dirty();

        let client = self.controller.client().clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_profile().await;
            if tx.send(AppMessage::ProfileFetched { ticket, outcome }).is_err() {
                tracing::debug!("App gone before profile fetch finished");
            }
        });

        ticket
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ProfileFetched { ticket, outcome } => {
                if self.controller.complete(ticket, outcome) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// The inspector can only be opened while a profile is shown.
    pub fn open_inspector(&mut self) {
        if self.controller.profile().is_some() {
            self.inspector.open();
            self.fit_inspector();
            self.mark_dirty();
        }
    }

    pub fn close_inspector(&mut self) {
        self.inspector.close();
        self.mark_dirty();
    }

    /// `d` opens the inspector over a loaded profile and closes it again.
    pub fn toggle_inspector(&mut self) {
        if self.inspector.is_open() || self.controller.profile().is_some() {
            self.inspector.toggle();
            self.fit_inspector();
            self.mark_dirty();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.inspector.is_open() {
            self.handle_inspector_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('r') => {
                tracing::info!("Refresh requested");
                self.refresh();
            }
            KeyCode::Char('d') => self.toggle_inspector(),
            KeyCode::Enter => self.open_inspector(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_inspector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('d') => self.toggle_inspector(),
            KeyCode::Esc | KeyCode::Char('q') => self.close_inspector(),
            KeyCode::Char('j') | KeyCode::Down => self.inspector.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.inspector.scroll_up(1),
            KeyCode::PageDown => self.inspector.scroll_down(PAGE_SCROLL),
            KeyCode::PageUp => self.inspector.scroll_up(PAGE_SCROLL),
            KeyCode::Home => self.inspector.scroll_up(u16::MAX),
            KeyCode::End => self.inspector.scroll_down(u16::MAX),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Advance animations; only the loading spinner needs redraws.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.controller.state().is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

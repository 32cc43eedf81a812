//! Main application orchestrator.

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Widget,
};
use tracing::{debug, info};

use crate::application::{Intent, TodoStore};
use crate::domain::keybinding::{Action, Keybind, default_keybinds, find_action};
use crate::infrastructure::AppConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    DraftAction, DraftInput, StatusBar, TodoPane, TodoPaneAction, TodoPaneState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Application shell owning the store and all widget state.
pub struct App {
    store: TodoStore,
    draft: DraftInput<'static>,
    pane: TodoPaneState,
    binds: Vec<Keybind>,
    theme: Theme,
    mouse: bool,
    focus: Focus,
    state: AppState,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: TodoStore::new(),
            draft: DraftInput::new(),
            pane: TodoPaneState::new(),
            binds: default_keybinds(),
            theme: Theme::from_config(config),
            mouse: config.mouse,
            focus: Focus::Input,
            state: AppState::Running,
        }
    }

    /// Runs the draw/poll loop until quit.
    ///
    /// # Errors
    /// Returns error if terminal drawing or event polling fails.
    pub fn run(mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        if self.mouse {
            execute!(std::io::stdout(), EnableMouseCapture)?;
        }

        let events = EventHandler::new();

        let result = loop {
            if let Err(err) = terminal.draw(|frame| self.render(frame)) {
                break Err(err.into());
            }

            match events.poll() {
                Ok(Some(event)) => self.handle_event(&event),
                Ok(None) => {}
                Err(err) => break Err(err.into()),
            }

            if self.state == AppState::Exiting {
                break Ok(());
            }
        };

        if self.mouse {
            execute!(std::io::stdout(), DisableMouseCapture)?;
        }

        info!("Application exiting normally");
        result
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.pane.scroll_down(self.store.state().len()),
                MouseEventKind::ScrollUp => self.pane.scroll_up(self.store.state().len()),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from anywhere; plain 'q' only outside the input.
        if find_action(&self.binds, key) == Some(Action::Quit) {
            self.state = AppState::Exiting;
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match self.draft.handle_key(key, &self.binds) {
            Some(DraftAction::Submit { text }) => {
                self.dispatch(Intent::Add { text });
            }
            Some(DraftAction::ClearAll) => {
                self.dispatch(Intent::Clear);
            }
            Some(DraftAction::ExitInput) => self.set_focus(Focus::List),
            None => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match self
            .pane
            .handle_key(key, &self.binds, self.store.state().items())
        {
            Some(TodoPaneAction::Toggle(id)) => {
                self.dispatch(Intent::Toggle { id });
            }
            Some(TodoPaneAction::ClearAll) => {
                self.dispatch(Intent::Clear);
            }
            Some(TodoPaneAction::ExitList) => self.set_focus(Focus::Input),
            Some(TodoPaneAction::Quit) => self.state = AppState::Exiting,
            None => {}
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.store.dispatch(intent);
        self.pane.clamp(self.store.state().len());
    }

    fn set_focus(&mut self, focus: Focus) {
        debug!(?focus, "focus changed");
        self.focus = focus;
        self.draft.set_focused(focus == Focus::Input);
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [input_area, list_area, status_area] = layout.areas(frame.area());

        let state = self.store.state();
        let status = StatusBar::for_list(state.len(), state.completed_count(), &self.binds);

        let buf = frame.buffer_mut();
        self.draft.render(input_area, buf, self.theme);

        let pane = TodoPane::new(
            self.store.state().items(),
            self.focus == Focus::List,
            self.theme,
        );
        pane.render(list_area, buf, &mut self.pane);

        (&status).render(status_area, buf);
    }
}

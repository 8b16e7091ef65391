//! Application state and input handling.

use crate::catalog::SubjectSource;
use crate::controller::{LoadTicket, SessionController};
use crate::error::FetchError;
use crate::game::{Phase, Subject};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// A finished fetch travelling back to the event loop.
#[derive(Debug)]
pub struct LoadEvent {
    /// Ticket the fetch was started with.
    pub ticket: LoadTicket,
    /// Fetch result.
    pub result: Result<Subject, FetchError>,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    controller: SessionController,
    source: Arc<dyn SubjectSource>,
    input: String,
    load_tx: mpsc::UnboundedSender<LoadEvent>,
    load_rx: mpsc::UnboundedReceiver<LoadEvent>,
}

impl App {
    /// Creates a new application. Call [`App::begin_session`] to load the first subject.
    pub fn new(controller: SessionController, source: Arc<dyn SubjectSource>) -> Self {
        let (load_tx, load_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            source,
            input: String::new(),
            load_tx,
            load_rx,
        }
    }

    /// The session controller.
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Guess text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Starts a fresh session and spawns its fetch on the runtime.
    #[instrument(skip(self))]
    pub fn begin_session(&mut self) -> LoadTicket {
        self.input.clear();
        let ticket = self.controller.start();
        let source = Arc::clone(&self.source);
        let tx = self.load_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_subject(ticket.id()).await;
            // The receiver only closes when the app is gone.
            let _ = tx.send(LoadEvent { ticket, result });
        });
        debug!(generation = ticket.generation(), "Fetch spawned");
        ticket
    }

    /// Applies every load that has finished. Returns true if anything changed.
    pub fn drain_loads(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.load_rx.try_recv() {
            changed |= self.apply_load(event);
        }
        changed
    }

    /// Waits for the next finished load and applies it.
    pub async fn next_load(&mut self) -> bool {
        match self.load_rx.recv().await {
            Some(event) => self.apply_load(event),
            None => false,
        }
    }

    fn apply_load(&mut self, event: LoadEvent) -> bool {
        self.controller.resolve(event.ticket, event.result)
    }

    /// Handles a key event.
    #[instrument(skip(self), fields(phase = %self.controller.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            info!("User quit");
            return AppAction::Quit;
        }

        match self.controller.phase() {
            Phase::Playing => self.handle_playing_key(key),
            phase if phase.is_terminal() => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter) {
                    info!("Replay requested");
                    self.begin_session();
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c)
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                if self.controller.submit_guess(&self.input).is_some() {
                    self.input.clear();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchErrorKind, FetchStage};
    use crate::game::IdSampler;

    struct FixedSource(Option<Subject>);

    #[async_trait::async_trait]
    impl SubjectSource for FixedSource {
        async fn fetch_subject(&self, _id: u32) -> Result<Subject, FetchError> {
            self.0
                .clone()
                .ok_or_else(|| FetchError::new(FetchStage::Species, FetchErrorKind::Status(404)))
        }
    }

    fn pikachu() -> Subject {
        Subject::new(
            25,
            "pikachu",
            vec!["electric".into()],
            Some("generation-i".into()),
            Some("yellow".into()),
            Some("Mouse Pokémon".into()),
            None,
        )
    }

    fn app(subject: Option<Subject>) -> App {
        App::new(
            SessionController::new(IdSampler::new(25, 25)),
            Arc::new(FixedSource(subject)),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn typing_and_enter_submits_guess() {
        let mut app = app(Some(pikachu()));
        app.begin_session();
        assert!(app.next_load().await);
        assert_eq!(app.controller().phase(), Phase::Playing);

        type_text(&mut app, "raichu");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input(), "raich");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input(), "");
        assert_eq!(app.controller().attempts(), 1);

        type_text(&mut app, "Pikachu");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().phase(), Phase::Won);
    }

    #[tokio::test]
    async fn modified_keys_do_not_type() {
        let mut app = app(Some(pikachu()));
        app.begin_session();
        assert!(app.next_load().await);

        type_text(&mut app, "pika");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(app.input(), "pikaC");
    }

    #[tokio::test]
    async fn replay_after_error() {
        let mut app = app(None);
        app.begin_session();
        app.next_load().await;
        assert_eq!(app.controller().phase(), Phase::Error);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller().phase(), Phase::Loading);
        assert_eq!(app.controller().generation(), 2);
    }

    #[tokio::test]
    async fn escape_quits() {
        let mut app = app(Some(pikachu()));
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
    }
}

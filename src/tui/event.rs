//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tokio::sync::{mpsc, watch};

use crate::models::ItemId;
use crate::session::SessionView;

use super::app::{App, Focus, Pending};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// The session published a new view.
    SessionUpdated(Box<SessionView>),
    /// A session operation finished.
    ActionFinished {
        /// Error to show, if the operation failed.
        error: Option<String>,
        /// Session revision after the operation.
        revision: u64,
    },
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Spawns a task that forwards every published session view.
pub fn spawn_view_forwarder(
    mut updates: watch::Receiver<SessionView>,
    tx: mpsc::UnboundedSender<Message>,
) {
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let view = updates.borrow_and_update().clone();
            if tx.send(Message::SessionUpdated(Box::new(view))).is_err() {
                break;
            }
        }
    });
}

/// Session operations requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Toggle(ItemId),
    Increment(ItemId),
    Decrement(ItemId),
    Remove(ItemId),
    Submit,
    DismissOutcome,
}

impl Action {
    /// Pending marker shown while the action runs.
    pub fn pending(&self) -> Option<Pending> {
        match self {
            Action::Submit => Some(Pending::Submit),
            Action::DismissOutcome => None,
            _ => Some(Pending::Update),
        }
    }
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::SessionUpdated(view) => {
            app.apply_view(*view);
            None
        }
        Message::ActionFinished { error, revision } => {
            app.finish_action(revision);
            if let Some(error) = error {
                app.show_error(error);
            }
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_errors();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c || (key.code == KeyCode::Char('q') && key.modifiers.is_empty()) {
        app.should_quit = true;
        return None;
    }

    if app.popup_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') => Some(Action::DismissOutcome),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return None;
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            return app.submit_enabled().then_some(Action::Submit);
        }
        _ => {}
    }

    match app.focus {
        Focus::List => handle_list_keys(app, key),
        Focus::Chips => handle_chip_keys(app, key),
    }
}

/// Handles keys while the ingredient list has focus.
fn handle_list_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor_up();
            None
        }
        _ => {
            // Mutations wait for the previous operation to finish.
            if app.pending.is_some() {
                return None;
            }
            let row = app.current_row()?;
            let id = row.item.id;
            match key.code {
                KeyCode::Char(' ') => Some(Action::Toggle(id)),
                KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Increment(id)),
                KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::Decrement(id)),
                KeyCode::Char('x') | KeyCode::Delete if row.selected => Some(Action::Remove(id)),
                _ => None,
            }
        }
    }
}

/// Handles keys while the chip list has focus.
fn handle_chip_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.chip_left();
            None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.chip_right();
            None
        }
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            if app.pending.is_some() {
                return None;
            }
            app.current_chip().map(Action::Remove)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::OfflineBackend;
    use crate::order::OrderPolicy;
    use crate::session::Session;

    fn key(code: KeyCode) -> Message {
        Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    async fn session() -> Session {
        Session::start(Arc::new(OfflineBackend), OrderPolicy::Lenient).await
    }

    #[tokio::test]
    async fn space_toggles_highlighted_row() {
        let session = session().await;
        let mut app = App::new(session.view());
        update(&mut app, key(KeyCode::Down));
        assert_eq!(update(&mut app, key(KeyCode::Char(' '))), Some(Action::Toggle(2)));
    }

    #[tokio::test]
    async fn quantity_keys_map_to_actions() {
        let session = session().await;
        let mut app = App::new(session.view());
        assert_eq!(
            update(&mut app, key(KeyCode::Char('+'))),
            Some(Action::Increment(1))
        );
        assert_eq!(
            update(&mut app, key(KeyCode::Char('-'))),
            Some(Action::Decrement(1))
        );
    }

    #[tokio::test]
    async fn submit_ignored_with_empty_selection() {
        let session = session().await;
        let mut app = App::new(session.view());
        assert_eq!(update(&mut app, key(KeyCode::Enter)), None);
    }

    #[tokio::test]
    async fn submit_and_chip_removal_after_selection() {
        let mut session = session().await;
        session.toggle(4).await.unwrap();
        let mut app = App::new(session.view());

        assert_eq!(update(&mut app, key(KeyCode::Char('o'))), Some(Action::Submit));

        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Chips);
        assert_eq!(update(&mut app, key(KeyCode::Char('x'))), Some(Action::Remove(4)));
    }

    #[tokio::test]
    async fn pending_blocks_mutations_and_submit() {
        let mut session = session().await;
        session.toggle(1).await.unwrap();
        let mut app = App::new(session.view());
        app.pending = Some(Pending::Update);

        assert_eq!(update(&mut app, key(KeyCode::Char(' '))), None);
        assert_eq!(update(&mut app, key(KeyCode::Enter)), None);
        update(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 1);

        update(
            &mut app,
            Message::ActionFinished {
                error: Some("boom".to_string()),
                revision: session.revision(),
            },
        );
        assert!(app.pending.is_none());
        assert_eq!(app.error_message.as_ref().unwrap().message, "boom");
    }

    #[tokio::test]
    async fn removing_last_chip_keeps_submit_blocked_until_view_arrives() {
        let mut session = session().await;
        session.toggle(3).await.unwrap();
        let mut app = App::new(session.view());
        update(&mut app, key(KeyCode::Tab));

        let action = update(&mut app, key(KeyCode::Char('x')));
        assert_eq!(action, Some(Action::Remove(3)));
        app.pending = Action::Remove(3).pending();

        session.remove(3).await.unwrap();
        update(
            &mut app,
            Message::ActionFinished {
                error: None,
                revision: session.revision(),
            },
        );
        assert_eq!(update(&mut app, key(KeyCode::Enter)), None);

        update(&mut app, Message::SessionUpdated(Box::new(session.view())));
        assert!(app.pending.is_none());
        assert_eq!(update(&mut app, key(KeyCode::Enter)), None);
        assert!(!app.submit_enabled());
    }

    #[tokio::test]
    async fn popup_only_accepts_dismiss() {
        let mut session = session().await;
        session.toggle(1).await.unwrap();
        session.submit().await.unwrap();
        let mut app = App::new(session.view());
        assert!(app.popup_open());

        assert_eq!(update(&mut app, key(KeyCode::Char(' '))), None);
        assert_eq!(update(&mut app, key(KeyCode::Esc)), Some(Action::DismissOutcome));
    }

    #[tokio::test]
    async fn q_quits() {
        let session = session().await;
        let mut app = App::new(session.view());
        update(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn ctrl_c_quits_even_with_popup() {
        let mut session = session().await;
        session.toggle(2).await.unwrap();
        session.submit().await.unwrap();
        let mut app = App::new(session.view());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(update(&mut app, Message::Input(Event::Key(ctrl_c))), None);
        assert!(app.should_quit);
    }
}

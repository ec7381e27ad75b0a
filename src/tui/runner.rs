//! Main loop: renders, dispatches input, runs session operations.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tracing::{debug, error};

use crate::session::Session;
use crate::{BowlError, Result};

use super::app::App;
use super::event::{
    Action, Message, spawn_event_reader, spawn_tick_timer, spawn_view_forwarder, update,
};
use super::terminal::Tui;
use super::ui::render;

/// UI refresh interval for ticks.
const TICK_INTERVAL_MS: u64 = 250;

/// Runs the ordering screen until the user quits.
///
/// # Errors
///
/// Returns [`BowlError::Io`] if drawing to the terminal fails.
pub async fn run(terminal: &mut Tui, session: Session) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    spawn_view_forwarder(session.subscribe(), tx.clone());
    spawn_interrupt_listener(tx.clone());

    let mut app = App::new(session.view());
    let session = Arc::new(Mutex::new(session));

    loop {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| BowlError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = update(&mut app, message) {
            app.pending = action.pending();
            spawn_action(Arc::clone(&session), action, tx.clone());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs one action against the session on its own task.
///
/// The session lock serializes actions. Exactly one
/// [`Message::ActionFinished`] is sent per action, even if the action task
/// panics.
fn spawn_action(session: Arc<Mutex<Session>>, action: Action, tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        let message = match tokio::spawn(run_action(session, action)).await {
            Ok((result, revision)) => Message::ActionFinished {
                error: result.err().map(|e| e.to_string()),
                revision,
            },
            Err(e) => {
                error!(?action, error = %e, "Session action aborted");
                Message::ActionFinished {
                    error: Some(format!("{action:?} aborted: {e}")),
                    revision: 0,
                }
            }
        };
        let _ = tx.send(message);
    });
}

/// Applies `action` and returns its result with the session revision
/// afterwards.
async fn run_action(session: Arc<Mutex<Session>>, action: Action) -> (Result<()>, u64) {
    let mut session = session.lock().await;
    debug!(?action, "Running action");
    let result = match action {
        Action::Toggle(id) => session.toggle(id).await,
        Action::Increment(id) => session.increment(id).await,
        Action::Decrement(id) => session.decrement(id).await,
        Action::Remove(id) => session.remove(id).await,
        Action::Submit => session.submit().await.map(|_| ()),
        Action::DismissOutcome => {
            session.dismiss_outcome();
            Ok(())
        }
    };
    (result, session.revision())
}

/// Turns SIGINT into a quit request.
fn spawn_interrupt_listener(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(Message::Quit);
        }
    });
}

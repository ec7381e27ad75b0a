use std::sync::Arc;

use bowlr::BowlError;
use bowlr::api::{Backend, HttpBackend, OfflineBackend};
use bowlr::config::fetch_config;
use bowlr::logging::init_logging;
use bowlr::session::Session;
use bowlr::tui::{self, TerminalGuard};

#[tokio::main]
async fn main() -> Result<(), BowlError> {
    let app_config = fetch_config()?;

    // Logs go to a file; the terminal belongs to the TUI.
    init_logging(app_config.log_file.as_deref())?;

    let backend: Arc<dyn Backend> = if app_config.backend.offline {
        Arc::new(OfflineBackend)
    } else {
        Arc::new(HttpBackend::new(
            &app_config.backend.api_url,
            app_config.backend.timeout,
        )?)
    };

    let session = Session::start(backend, app_config.order_policy).await;

    let mut guard = TerminalGuard::enter()?;
    let result = tui::run(guard.terminal(), session).await;
    guard.restore()?;

    result
}

//! Terminal user interface for building and ordering a bowl.
//!
//! Renders the ingredient list, the selection chips, the nutrition summary
//! and the order confirmation from the latest session view.

pub mod app;
pub mod components;
pub mod event;
pub mod runner;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use runner::run;
pub use terminal::{TerminalGuard, Tui};
pub use ui::render;

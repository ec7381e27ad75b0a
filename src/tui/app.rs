//! Application state for the TUI.

use std::time::Instant;

use crate::models::ItemId;
use crate::session::{RowView, SessionView};

/// Seconds an error message stays on the status bar.
const ERROR_DISPLAY_SECS: u64 = 5;

/// UI-side state. Ordering state lives in the session and arrives here as
/// the latest published [`SessionView`].
pub struct App {
    /// Latest view published by the session.
    pub view: SessionView,
    /// Highlighted row in the ingredient list.
    pub cursor: usize,
    /// Highlighted chip in the selection list.
    pub chip_cursor: usize,
    /// Current focus.
    pub focus: Focus,
    /// Operation currently running against the session, if any.
    pub pending: Option<Pending>,
    /// View revision that ends `pending` once it arrives.
    settle_at: Option<u64>,
    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the app around the session's first view.
    pub fn new(view: SessionView) -> Self {
        Self {
            view,
            cursor: 0,
            chip_cursor: 0,
            focus: Focus::List,
            pending: None,
            settle_at: None,
            error_message: None,
            should_quit: false,
        }
    }

    /// Replaces the view, ignoring stale revisions, and keeps cursors in
    /// range.
    pub fn apply_view(&mut self, view: SessionView) {
        if view.revision < self.view.revision {
            return;
        }
        self.view = view;
        if self.settle_at.is_some_and(|revision| self.view.revision >= revision) {
            self.settle_at = None;
            self.pending = None;
        }

        self.cursor = self.cursor.min(self.view.rows.len().saturating_sub(1));
        if self.view.chips.is_empty() {
            self.chip_cursor = 0;
            self.focus = Focus::List;
        } else {
            self.chip_cursor = self.chip_cursor.min(self.view.chips.len() - 1);
        }
    }

    /// Marks the running operation as finished once the view published at
    /// `revision` has been applied.
    pub fn finish_action(&mut self, revision: u64) {
        if self.view.revision >= revision {
            self.settle_at = None;
            self.pending = None;
        } else {
            self.settle_at = Some(revision);
        }
    }

    /// Row under the cursor.
    pub fn current_row(&self) -> Option<&RowView> {
        self.view.rows.get(self.cursor)
    }

    /// Item id of the chip under the chip cursor.
    pub fn current_chip(&self) -> Option<ItemId> {
        self.view.chips.get(self.chip_cursor).map(|chip| chip.id)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.view.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn chip_right(&mut self) {
        if self.chip_cursor + 1 < self.view.chips.len() {
            self.chip_cursor += 1;
        }
    }

    pub fn chip_left(&mut self) {
        self.chip_cursor = self.chip_cursor.saturating_sub(1);
    }

    /// Switches focus between the list and the chips. Chips only take focus
    /// when there is at least one.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List if !self.view.chips.is_empty() => Focus::Chips,
            _ => Focus::List,
        };
    }

    /// Submit is enabled when the session allows it and nothing is running.
    pub fn submit_enabled(&self) -> bool {
        self.view.can_submit && self.pending.is_none()
    }

    /// Whether the order outcome popup is showing.
    pub fn popup_open(&self) -> bool {
        self.view.outcome.is_some()
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than [`ERROR_DISPLAY_SECS`].
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > std::time::Duration::from_secs(ERROR_DISPLAY_SECS)
        {
            self.error_message = None;
        }
    }
}

/// UI focus targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    List,
    Chips,
}

/// Kind of session operation in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    /// Selection change awaiting its totals recompute.
    Update,
    /// Order submission.
    Submit,
}

impl Pending {
    pub fn label(&self) -> &'static str {
        match self {
            Pending::Update => "Updating...",
            Pending::Submit => "Placing order...",
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}

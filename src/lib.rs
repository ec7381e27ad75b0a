//! Build-your-own-bowl ordering client.
//!
//! Loads the ingredient catalog, tracks the user's selection and
//! quantities, keeps nutrition/price totals current (server-computed when
//! possible, summed locally otherwise), and submits orders. The [`tui`]
//! module renders it all in the terminal.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod order;
pub mod selection;
pub mod session;
pub mod totals;
pub mod tui;

pub use error::{BowlError, Result};

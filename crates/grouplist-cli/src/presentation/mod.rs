//! # Presentation Layer
//!
//! The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View / Renderer ] --> [ Output ]
//! ```
//!
//! - `view_models/`: pure data the user gets to see. Everything is `Serialize`
//!   so `--format json` is the same contract as the screen.
//! - `presenters/`: pure functions from engine output to view models.
//! - `views/`: formatting of one view model (plain text `Display`, ratatui
//!   widgets). No decisions about *what* to show.
//! - `renderers/`: drivers that put views on a device (stdout, terminal UI)
//!   and own UI-only state such as selection and scroll.
//! - `formatters/`: small shared helpers (labels, colors, truncation).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};

// NOTE: grouplist layering
//
// - grouplist-store reads the raw record list (bundled asset or file) and is
//   the only place that does I/O on data. Failures come back as Io/Decode.
// - grouplist-engine is pure: records -> [Header, Row..] sequence, accent
//   colors, expansion state, and what is visible in a viewport.
// - This crate wires them to the terminal: handlers own the flow, presenters
//   build view models, renderers draw them (console or TUI).
//
// A load failure never aborts the program. The list is left empty and the
// message is shown once (toast in the TUI, stderr on the console).

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ExpandArgs};
pub use commands::run;

//! Record store access for grouplist.
//!
//! Reads the raw record list from the bundled asset or a file, decodes it
//! leniently, and reports failures as either an I/O or a decode error. The
//! load can run on a background thread via [`spawn_load`].

pub mod error;
mod lenient;
pub mod loader;

pub use error::{Error, Result};
pub use lenient::decode_records;
pub use loader::{BUNDLED_DATA, LoadReport, RecordSource, load, spawn_load};

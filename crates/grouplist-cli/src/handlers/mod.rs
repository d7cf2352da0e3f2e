mod context;

pub mod browse;
pub mod config;
pub mod demo;
pub mod list;

pub use context::HandlerContext;

// storefront/src/terminal/mod.rs

//! The text front-end: command parsing, views and the input loop.

pub mod app;
pub mod command;
pub mod render;

pub use app::Terminal;

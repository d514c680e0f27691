//! CLI library components for the course registration form.

pub mod config;
pub mod context;
pub mod logging;
pub mod render;
pub mod session;
pub mod sink;

//! CLI library components for the video game sales browser.

pub mod browse;
pub mod logging;
pub mod query_args;
pub mod render;

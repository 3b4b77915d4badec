//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod screen;

pub use screen::render_screen_page;

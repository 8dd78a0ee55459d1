//! Leptos components for the console chrome and the blog theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console renders only its message row; page bodies are server-side
//! HTML fragments. The theme mounts two standalone widgets into an
//! otherwise static blog page.

pub mod menu_toggle;
pub mod message_row;
pub mod return_top;
pub mod theme;

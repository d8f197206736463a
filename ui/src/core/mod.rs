//! Platform-agnostic state and content behind the views.

pub mod content;
pub mod hover;
pub mod menu;

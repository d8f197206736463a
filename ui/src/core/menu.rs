//! Open/closed state of the mobile navigation menu.
//!
//! The header owns one `MenuState` inside a `Signal`; nothing else reads or
//! writes it. Each activation of the toggle control flips the flag, so after
//! `n` clicks the menu is open iff `n` is odd.
//!
//! Display helpers (`toggle_icon`, `toggle_label_key`, `aria_expanded`) keep
//! the markup a pure function of the flag.

use super::content::IconKind;

/// Whether the mobile menu panel is currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Initial state on mount.
    pub const fn closed() -> Self {
        Self { open: false }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Invert the flag (one click on the toggle control).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Icon shown on the toggle: a hamburger while closed, a cross while open.
    pub fn toggle_icon(&self) -> IconKind {
        if self.open {
            IconKind::Close
        } else {
            IconKind::Menu
        }
    }

    /// Message id for the toggle's accessible label.
    pub fn toggle_label_key(&self) -> &'static str {
        if self.open {
            "nav-menu-close"
        } else {
            "nav-menu-open"
        }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

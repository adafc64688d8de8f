//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth and page data so
//! rendering controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::{self, Theme};

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    /// Switch theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = theme::toggle(self.theme);
    }
}

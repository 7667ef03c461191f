//! # Navigator
//!
//! Top-level gate between the one-shot landing screen and the routed main
//! screens. Once the landing is dismissed it stays dismissed for the rest
//! of the session.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Main,
}

#[derive(Debug, Default)]
pub struct Navigator {
    landing_dismissed: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        if self.landing_dismissed {
            View::Main
        } else {
            View::Landing
        }
    }

    /// Leaves the landing screen. Returns true only on the first call.
    pub fn dismiss_landing(&mut self) -> bool {
        if self.landing_dismissed {
            return false;
        }
        info!("Landing dismissed");
        self.landing_dismissed = true;
        true
    }
}

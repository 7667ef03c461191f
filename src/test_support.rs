//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::links::LinkOpener;
use crate::core::state::{App, Timing};
use crate::core::timer::ManualClock;

/// A link opener that remembers every URL instead of launching anything.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

/// Creates a test App on the landing screen, driven by a manual clock.
pub fn test_app() -> (App, ManualClock) {
    let clock = ManualClock::new();
    let app = App::new(Catalog::default(), Timing::default(), clock.clone());
    (app, clock)
}

/// Like `test_app`, with the landing already dismissed (Home mounted).
pub fn main_app() -> (App, ManualClock) {
    let (mut app, clock) = test_app();
    update(&mut app, Action::DismissLanding);
    (app, clock)
}

/// Delivers every due timer to `update()`, the way the event loop does.
pub fn pump_timers(app: &mut App) -> Vec<Effect> {
    app.timers
        .fire_due()
        .into_iter()
        .map(|fired| update(app, Action::TimerFired(fired)))
        .collect()
}

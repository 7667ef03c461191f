//! # Popup Controller
//!
//! Transient confirmation overlay ("Sent ✔") that hides itself after a
//! fixed duration. Showing it again while visible restarts the duration;
//! there is never more than one hide timer armed.

use std::fmt;
use std::time::Duration;

use crate::core::timer::{TimerGuard, TimerId, Timers};

pub const DEFAULT_POPUP_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct PopupController<T> {
    visible: bool,
    hide_timer: Option<TimerGuard<T>>,
    target: T,
}

impl<T: Clone + fmt::Debug> PopupController<T> {
    pub fn new(target: T) -> Self {
        Self {
            visible: false,
            hide_timer: None,
            target,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, timers: &Timers<T>, duration: Duration) {
        self.visible = true;
        if let Some(old) = self.hide_timer.take() {
            old.cancel();
        }
        self.hide_timer = Some(timers.schedule(duration, self.target.clone()));
    }

    pub fn hide(&mut self) {
        self.visible = false;
        if let Some(timer) = self.hide_timer.take() {
            timer.cancel();
        }
    }

    /// Auto-hide. Ignores ids other than the armed hide timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match &self.hide_timer {
            Some(guard) if guard.id() == id => {
                self.hide_timer = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }
}

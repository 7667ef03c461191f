//! # Interaction State
//!
//! The "pop" flag behind every tappable card. Each card owns one instance;
//! pressing one card never touches another.
//!
//! Two feedback styles share one state machine:
//!
//! - **Click**: `activate()` raises the flag and arms a short reset timer.
//!   Activating again before the reset cancels the old timer and arms a new
//!   one, so the flag drops once, timed from the latest activation.
//! - **Press**: `press_start()` raises the flag, `press_end()` lowers it and
//!   reports whether the card's action should run. Releasing without a
//!   press does nothing.
//!
//! The card's action itself (open a link, switch screen) is not stored
//! here. The reducer runs it right after `activate()` or a successful
//! `press_end()`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::timer::{TimerGuard, TimerId, Timers};

/// How long a clicked card stays popped.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    #[default]
    Click,
    Press,
}

#[derive(Debug)]
pub struct InteractionState<T> {
    feedback: Feedback,
    active: bool,
    pressing: bool,
    reset: Option<TimerGuard<T>>,
    target: T,
}

impl<T: Clone + fmt::Debug> InteractionState<T> {
    /// `target` is what the reset timer reports back when it fires.
    pub fn new(feedback: Feedback, target: T) -> Self {
        Self {
            feedback,
            active: false,
            pressing: false,
            reset: None,
            target,
        }
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Id of the armed reset timer, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.reset.as_ref().map(TimerGuard::id)
    }

    /// Click activation. Last activation wins.
    pub fn activate(&mut self, timers: &Timers<T>, reset_delay: Duration) {
        self.active = true;
        // Cancel before arming so there is never more than one reset in flight.
        if let Some(old) = self.reset.take() {
            old.cancel();
        }
        self.reset = Some(timers.schedule(reset_delay, self.target.clone()));
    }

    pub fn press_start(&mut self) {
        if let Some(old) = self.reset.take() {
            old.cancel();
        }
        self.pressing = true;
        self.active = true;
    }

    /// Ends a press. True means a press was in progress and the action should run.
    pub fn press_end(&mut self) -> bool {
        if !self.pressing {
            return false;
        }
        self.pressing = false;
        self.active = false;
        true
    }

    pub fn is_pressing(&self) -> bool {
        self.pressing
    }

    /// Reacts to a fired timer. Anything but the armed reset is ignored.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match &self.reset {
            Some(guard) if guard.id() == id => {
                self.reset = None;
                self.active = false;
                true
            }
            _ => false,
        }
    }
}

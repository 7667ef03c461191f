//! # Application State
//!
//! Everything the session knows, in one place. No terminal types here;
//! presentation-only state (focus, scroll) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator          // landing dismissed?
//! ├── router: ScreenRouter          // current main screen
//! ├── mounted: MountedScreen        // element state of the screen on display
//! │   ├── Landing
//! │   ├── Cards { screen, cards }   // Home, Movies, Episodes
//! │   ├── About
//! │   └── Contact(ContactState)     // form + "Sent" popup
//! ├── catalog: Catalog              // static content
//! ├── timers: Timers<TimerTarget>   // pending resets / auto-hides
//! ├── timing: Timing                // reset delay, popup duration
//! └── status_message: String        // last thing worth telling the user
//! ```
//!
//! Element state belongs to the mounted screen. Switching screens replaces
//! `mounted`, and dropping the old value cancels every timer it owned.
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::form::FormState;
use crate::core::interaction::{DEFAULT_RESET_DELAY, InteractionState};
use crate::core::navigator::{Navigator, View};
use crate::core::popup::{DEFAULT_POPUP_DURATION, PopupController};
use crate::core::router::{ScreenId, ScreenRouter};
use crate::core::timer::{Clock, SystemClock, Timers};

/// Who a timer belongs to. Carried back to `update()` when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTarget {
    CardReset { screen: ScreenId, card: usize },
    PopupHide,
}

pub type Card = InteractionState<TimerTarget>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub reset_delay: Duration,
    pub popup_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            popup_duration: DEFAULT_POPUP_DURATION,
        }
    }
}

#[derive(Debug)]
pub struct ContactState {
    pub form: FormState,
    pub popup: PopupController<TimerTarget>,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            popup: PopupController::new(TimerTarget::PopupHide),
        }
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum MountedScreen {
    Landing,
    Cards { screen: ScreenId, cards: Vec<Card> },
    About,
    Contact(ContactState),
}

impl MountedScreen {
    /// Fresh element state for `screen`: no active cards, empty form.
    pub fn mount(screen: ScreenId, catalog: &Catalog) -> Self {
        match screen {
            ScreenId::Home | ScreenId::Movies | ScreenId::Episodes => MountedScreen::Cards {
                screen,
                cards: catalog
                    .cards(screen)
                    .iter()
                    .enumerate()
                    .map(|(card, spec)| {
                        InteractionState::new(spec.feedback, TimerTarget::CardReset { screen, card })
                    })
                    .collect(),
            },
            ScreenId::About => MountedScreen::About,
            ScreenId::Contact => MountedScreen::Contact(ContactState::new()),
        }
    }
}

pub struct App {
    pub navigator: Navigator,
    pub router: ScreenRouter,
    pub mounted: MountedScreen,
    pub catalog: Catalog,
    pub timers: Timers<TimerTarget>,
    pub timing: Timing,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog, timing: Timing, clock: impl Clock + 'static) -> Self {
        Self {
            navigator: Navigator::new(),
            router: ScreenRouter::default(),
            mounted: MountedScreen::Landing,
            catalog,
            timers: Timers::new(clock),
            timing,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.catalog.clone(), config.timing, SystemClock);
        app.router = ScreenRouter::new(config.start_screen);
        if config.skip_landing {
            app.navigator.dismiss_landing();
            app.remount();
        }
        app
    }

    pub fn view(&self) -> View {
        self.navigator.current_view()
    }

    /// Replaces the mounted element state to match navigator and router.
    pub fn remount(&mut self) {
        // Unmount first so the old screen's timers are gone before anything new is armed.
        self.mounted = MountedScreen::Landing;
        if self.view() == View::Main {
            self.mounted = MountedScreen::mount(self.router.current(), &self.catalog);
        }
    }

    /// Card states of the mounted screen (empty when it has no cards).
    pub fn cards(&self) -> &[Card] {
        match &self.mounted {
            MountedScreen::Cards { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn contact(&self) -> Option<&ContactState> {
        match &self.mounted {
            MountedScreen::Contact(contact) => Some(contact),
            _ => None,
        }
    }
}

//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User hits Enter on a card? That's `Action::ActivateCard(index)`.
//! A reset timer runs out? That's `Action::TimerFired(fired)`.
//!
//! `update()` applies an action to the state and returns an `Effect` for
//! the adapter to carry out. Opening a link is an effect; the reducer
//! itself does no I/O.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Actions aimed at something that is not on screen (a card index past the
//! end, a form while Contact is not mounted, a timer whose owner is gone)
//! are ignored. They come from stale events, not from the user.

use log::{debug, info, warn};

use crate::core::catalog::CardAction;
use crate::core::form::FieldName;
use crate::core::interaction::Feedback;
use crate::core::navigator::View;
use crate::core::router::ScreenId;
use crate::core::state::{App, MountedScreen, TimerTarget};
use crate::core::timer::Fired;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DismissLanding,
    SelectScreen(ScreenId),
    /// Click a card. On press-feedback cards this is a full press and release,
    /// then a timed pop like a click.
    ActivateCard(usize),
    PressCard(usize),
    /// Release goes to whichever card is being pressed, wherever it happens.
    ReleasePress,
    /// The card's "click to view" button.
    OpenCardLink(usize),
    SetField(FieldName, String),
    InsertChar(FieldName, char),
    DeleteChar(FieldName),
    SubmitForm,
    DismissPopup,
    TimerFired(Fired<TimerTarget>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    OpenLink(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::DismissLanding => {
            if app.navigator.dismiss_landing() {
                app.remount();
                Effect::Redraw
            } else {
                Effect::None
            }
        }

        Action::SelectScreen(id) => {
            if app.view() == View::Landing {
                debug!("Ignoring select({}) while on landing", id);
                return Effect::None;
            }
            select_screen(app, id)
        }

        Action::ActivateCard(index) => activate_card(app, index),

        Action::PressCard(index) => match mounted_card(app, index) {
            Some(card) => {
                card.press_start();
                Effect::Redraw
            }
            None => Effect::None,
        },

        Action::ReleasePress => {
            let released = match &mut app.mounted {
                MountedScreen::Cards { screen, cards } => cards
                    .iter_mut()
                    .enumerate()
                    .filter_map(|(index, card)| card.press_end().then_some(index))
                    .last()
                    .map(|index| (*screen, index)),
                _ => None,
            };
            match released {
                Some((screen, index)) => {
                    let action = app
                        .catalog
                        .card(screen, index)
                        .and_then(|spec| spec.action.clone());
                    run_card_action(app, action)
                }
                None => Effect::None,
            }
        }

        Action::OpenCardLink(index) => {
            let Some(screen) = mounted_card_screen(app) else {
                return Effect::None;
            };
            match app.catalog.card(screen, index).and_then(|spec| spec.link.clone()) {
                Some(url) => open_link(app, url),
                None => {
                    debug!("Card {} on {} has no link", index, screen);
                    Effect::None
                }
            }
        }

        Action::SetField(field, value) => match &mut app.mounted {
            MountedScreen::Contact(contact) => {
                contact.form.set_field(field, value);
                Effect::Redraw
            }
            _ => Effect::None,
        },

        Action::InsertChar(field, c) => match &mut app.mounted {
            MountedScreen::Contact(contact) => {
                contact.form.insert_char(field, c);
                Effect::Redraw
            }
            _ => Effect::None,
        },

        Action::DeleteChar(field) => match &mut app.mounted {
            MountedScreen::Contact(contact) => {
                contact.form.delete_char(field);
                Effect::Redraw
            }
            _ => Effect::None,
        },

        Action::SubmitForm => {
            let timers = &app.timers;
            match &mut app.mounted {
                MountedScreen::Contact(contact) => {
                    let snapshot = contact.form.submit();
                    match serde_json::to_string(&snapshot) {
                        Ok(json) => info!("Contact form submitted: {}", json),
                        Err(e) => warn!("Contact form submitted (unserializable: {})", e),
                    }
                    contact.popup.show(timers, app.timing.popup_duration);
                    app.status_message = "Message sent".to_string();
                    Effect::Redraw
                }
                _ => Effect::None,
            }
        }

        Action::DismissPopup => match &mut app.mounted {
            MountedScreen::Contact(contact) if contact.popup.is_visible() => {
                contact.popup.hide();
                Effect::Redraw
            }
            _ => Effect::None,
        },

        Action::TimerFired(fired) => timer_fired(app, fired),
    }
}

fn select_screen(app: &mut App, id: ScreenId) -> Effect {
    if app.router.select(id) {
        app.remount();
        Effect::Redraw
    } else {
        Effect::None
    }
}

fn mounted_card_screen(app: &App) -> Option<ScreenId> {
    match &app.mounted {
        MountedScreen::Cards { screen, .. } => Some(*screen),
        _ => None,
    }
}

fn mounted_card(app: &mut App, index: usize) -> Option<&mut crate::core::state::Card> {
    match &mut app.mounted {
        MountedScreen::Cards { cards, screen } => {
            let found = cards.get_mut(index);
            if found.is_none() {
                debug!("No card {} on {}", index, screen);
            }
            found
        }
        _ => None,
    }
}

fn activate_card(app: &mut App, index: usize) -> Effect {
    let Some(screen) = mounted_card_screen(app) else {
        return Effect::None;
    };
    let action = app
        .catalog
        .card(screen, index)
        .and_then(|spec| spec.action.clone());

    let timers = app.timers.clone();
    let reset_delay = app.timing.reset_delay;
    let Some(card) = mounted_card(app, index) else {
        return Effect::None;
    };

    match card.feedback() {
        Feedback::Click => card.activate(&timers, reset_delay),
        Feedback::Press => {
            // No release to wait for from a key, so the pop runs on the reset timer.
            card.press_start();
            card.press_end();
            card.activate(&timers, reset_delay);
        }
    }

    match run_card_action(app, action) {
        Effect::None => Effect::Redraw,
        effect => effect,
    }
}

fn run_card_action(app: &mut App, action: Option<CardAction>) -> Effect {
    match action {
        Some(CardAction::OpenLink(url)) => open_link(app, url),
        Some(CardAction::Navigate(id)) => match select_screen(app, id) {
            Effect::None => Effect::Redraw,
            effect => effect,
        },
        None => Effect::Redraw,
    }
}

fn open_link(app: &mut App, url: String) -> Effect {
    info!("Opening link: {}", url);
    app.status_message = format!("Opening {}", url);
    Effect::OpenLink(url)
}

fn timer_fired(app: &mut App, fired: Fired<TimerTarget>) -> Effect {
    let handled = match (fired.target, &mut app.mounted) {
        (TimerTarget::CardReset { screen, card }, MountedScreen::Cards { screen: mounted, cards })
            if screen == *mounted =>
        {
            cards
                .get_mut(card)
                .is_some_and(|state| state.on_timer(fired.id))
        }
        (TimerTarget::PopupHide, MountedScreen::Contact(contact)) => {
            contact.popup.on_timer(fired.id)
        }
        _ => false,
    };

    if handled {
        Effect::Redraw
    } else {
        debug!("Dropped stale {} for {:?}", fired.id, fired.target);
        Effect::None
    }
}

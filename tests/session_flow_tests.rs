use std::time::Duration;

use strawhat::core::action::{Action, Effect, update};
use strawhat::core::catalog::Catalog;
use strawhat::core::form::{FieldName, FormSnapshot};
use strawhat::core::navigator::View;
use strawhat::core::router::ScreenId;
use strawhat::core::state::{App, MountedScreen, Timing};
use strawhat::core::timer::ManualClock;

// ============================================================================
// Helper Functions
// ============================================================================

/// Fresh session on the landing page with a hand-driven clock
fn new_session() -> (App, ManualClock) {
    let clock = ManualClock::new();
    let app = App::new(Catalog::default(), Timing::default(), clock.clone());
    (app, clock)
}

/// Advances the clock and delivers whatever became due
fn advance(app: &mut App, clock: &ManualClock, ms: u64) -> Vec<Effect> {
    clock.advance_ms(ms);
    app.timers
        .fire_due()
        .into_iter()
        .map(|fired| update(app, Action::TimerFired(fired)))
        .collect()
}

fn popup_visible(app: &App) -> bool {
    app.contact().is_some_and(|c| c.popup.is_visible())
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_landing_to_movies_scenario() {
    let (mut app, _clock) = new_session();
    assert_eq!(app.view(), View::Landing);
    assert!(matches!(app.mounted, MountedScreen::Landing));

    update(&mut app, Action::DismissLanding);
    assert_eq!(app.view(), View::Main);
    assert_eq!(app.router.current(), ScreenId::Home);

    update(&mut app, Action::SelectScreen(ScreenId::Movies));
    assert_eq!(app.router.current(), ScreenId::Movies);
    assert!(matches!(
        app.mounted,
        MountedScreen::Cards {
            screen: ScreenId::Movies,
            ..
        }
    ));
}

#[test]
fn test_dismiss_landing_is_idempotent() {
    let (mut app, _clock) = new_session();
    for _ in 0..3 {
        update(&mut app, Action::DismissLanding);
        assert_eq!(app.view(), View::Main);
    }
    assert_eq!(app.router.current(), ScreenId::Home);
}

#[test]
fn test_last_selection_wins() {
    let (mut app, _clock) = new_session();
    update(&mut app, Action::DismissLanding);

    let sequence = [
        ScreenId::About,
        ScreenId::About,
        ScreenId::Episodes,
        ScreenId::Contact,
        ScreenId::Contact,
        ScreenId::Movies,
    ];
    for id in sequence {
        update(&mut app, Action::SelectScreen(id));
    }
    assert_eq!(app.router.current(), ScreenId::Movies);
    // Repeated selections of the same screen are not transitions
    assert_eq!(app.router.transitions(), 4);
}

#[test]
fn test_teaser_card_leads_to_movies() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);
    let teaser = app.cards().len() - 1;

    update(&mut app, Action::ActivateCard(teaser));
    assert_eq!(app.router.current(), ScreenId::Movies);

    // The Home cards were unmounted with their reset timers
    assert_eq!(app.timers.pending(), 0);
    assert!(advance(&mut app, &clock, 1000).is_empty());
}

// ============================================================================
// Cards
// ============================================================================

#[test]
fn test_click_pop_resets_after_delay() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);

    let effect = update(&mut app, Action::ActivateCard(1));
    assert!(matches!(effect, Effect::OpenLink(_)));
    assert!(app.cards()[1].is_active());
    assert!(!app.cards()[2].is_active());

    advance(&mut app, &clock, 149);
    assert!(app.cards()[1].is_active());
    advance(&mut app, &clock, 1);
    assert!(!app.cards()[1].is_active());
}

#[test]
fn test_repeated_click_only_resets_once() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);

    update(&mut app, Action::ActivateCard(1));
    advance(&mut app, &clock, 100);
    update(&mut app, Action::ActivateCard(1));
    assert_eq!(app.timers.pending(), 1);

    // 150ms after the first click, but only 50ms after the second
    advance(&mut app, &clock, 50);
    assert!(app.cards()[1].is_active());

    advance(&mut app, &clock, 100);
    assert!(!app.cards()[1].is_active());
    assert_eq!(app.timers.pending(), 0);
}

#[test]
fn test_press_release_opens_once() {
    let (mut app, _clock) = new_session();
    update(&mut app, Action::DismissLanding);
    update(&mut app, Action::SelectScreen(ScreenId::Episodes));

    assert_eq!(update(&mut app, Action::PressCard(0)), Effect::Redraw);
    assert!(app.cards()[0].is_active());

    let released = update(&mut app, Action::ReleasePress);
    assert!(matches!(released, Effect::OpenLink(_)));
    assert!(!app.cards()[0].is_active());

    // A second release has nothing to end
    assert!(!matches!(
        update(&mut app, Action::ReleasePress),
        Effect::OpenLink(_)
    ));
}

#[test]
fn test_switching_screens_while_active_cancels_reset() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);
    update(&mut app, Action::SelectScreen(ScreenId::Movies));
    update(&mut app, Action::ActivateCard(0));
    assert_eq!(app.timers.pending(), 1);

    update(&mut app, Action::SelectScreen(ScreenId::About));
    assert_eq!(app.timers.pending(), 0);

    update(&mut app, Action::SelectScreen(ScreenId::Movies));
    assert!(app.cards().iter().all(|card| !card.is_active()));
    assert!(advance(&mut app, &clock, 500).is_empty());
}

// ============================================================================
// Contact form and popup
// ============================================================================

#[test]
fn test_form_round_trip_and_popup() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);
    update(&mut app, Action::SelectScreen(ScreenId::Contact));

    update(
        &mut app,
        Action::SetField(FieldName::Name, "Luffy".to_string()),
    );
    let contact = app.contact().expect("contact mounted");
    assert_eq!(contact.form.field(FieldName::Name), "Luffy");

    update(&mut app, Action::SubmitForm);
    let contact = app.contact().expect("contact mounted");
    assert_eq!(contact.form.field(FieldName::Name), "");
    assert!(contact.form.is_empty());
    assert!(popup_visible(&app));
    assert_eq!(app.status_message, "Message sent");

    advance(&mut app, &clock, 2000);
    assert!(!popup_visible(&app));
}

#[test]
fn test_form_snapshot_shape() {
    let snapshot = FormSnapshot {
        name: "Luffy".to_string(),
        ..FormSnapshot::default()
    };
    assert_eq!(snapshot.email, "");
    assert_eq!(snapshot.message, "");
}

#[test]
fn test_popup_restarts_on_second_show() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);
    update(&mut app, Action::SelectScreen(ScreenId::Contact));

    update(&mut app, Action::SubmitForm);
    advance(&mut app, &clock, 1000);
    update(&mut app, Action::SubmitForm);
    assert_eq!(app.timers.pending(), 1);

    advance(&mut app, &clock, 1000); // t = 2000
    assert!(popup_visible(&app));
    advance(&mut app, &clock, 500); // t = 2500
    assert!(popup_visible(&app));
    advance(&mut app, &clock, 500); // t = 3000
    assert!(!popup_visible(&app));
}

#[test]
fn test_leaving_contact_discards_form_and_popup_timer() {
    let (mut app, clock) = new_session();
    update(&mut app, Action::DismissLanding);
    update(&mut app, Action::SelectScreen(ScreenId::Contact));
    update(&mut app, Action::InsertChar(FieldName::Email, 'z'));
    update(&mut app, Action::SubmitForm);
    update(&mut app, Action::InsertChar(FieldName::Message, 'x'));

    update(&mut app, Action::SelectScreen(ScreenId::Home));
    assert_eq!(app.timers.pending(), 0);
    clock.advance(Duration::from_secs(5));
    assert!(app.timers.fire_due().is_empty());

    update(&mut app, Action::SelectScreen(ScreenId::Contact));
    let contact = app.contact().expect("contact mounted");
    assert!(contact.form.is_empty());
    assert!(!contact.popup.is_visible());
}

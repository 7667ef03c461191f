//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop sleeps until the next terminal event or the next timer
//! deadline, whichever comes first. With no timers pending it wakes every
//! 500ms at most. Due timers are delivered to `update()` as
//! `Action::TimerFired`, on the same thread as every other action, so a
//! card reset can never race with a click.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

pub mod component;
pub mod components;
pub mod event;
pub mod opener;
pub mod resources;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::FieldName;
use crate::core::interaction::Feedback;
use crate::core::links::LinkOpener;
use crate::core::navigator::View;
use crate::core::router::ScreenId;
use crate::core::state::App;
use crate::tui::components::ContactFocus;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::opener::SystemOpener;
use crate::tui::ui::{Hit, HitAreas};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    /// Screen the state below belongs to (`None` on the landing page).
    pub screen: Option<ScreenId>,
    /// Keyboard-selected card on card screens.
    pub focus: usize,
    pub contact_focus: ContactFocus,
    /// Card screens follow `focus`; Contact follows `contact_focus`.
    pub cards_scroll: ScrollViewState,
    pub contact_scroll: ScrollViewState,
    pub about_scroll: ScrollViewState,
    /// Rebuilt on every draw.
    pub hits: HitAreas,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets presentation state when the app has moved to another screen.
    pub fn sync(&mut self, app: &App) {
        let screen = (app.view() == View::Main).then(|| app.router.current());
        if screen != self.screen {
            debug!("Presentation state reset for {:?}", screen);
            *self = Self {
                screen,
                ..Self::default()
            };
        }
        let card_count = app.cards().len();
        if self.focus >= card_count {
            self.focus = card_count.saturating_sub(1);
        }
    }

    fn focus_next(&mut self, app: &App) {
        if self.focus + 1 < app.cards().len() {
            self.focus += 1;
        }
    }

    fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }
}

/// Maps one terminal event to at most one action.
///
/// Presentation-only changes (focus, scrolling) are applied to `tui`
/// directly and produce no action.
pub fn handle_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if app.view() == View::Landing {
        return match event {
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::DismissLanding),
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::MouseDown(col, row) => match tui.hits.hit(col, row) {
                Some(Hit::LandingButton) => Some(Action::DismissLanding),
                _ => None,
            },
            _ => None,
        };
    }

    // Common to every main screen
    match event {
        TuiEvent::NextTab => return Some(Action::SelectScreen(app.router.current().next())),
        TuiEvent::PrevTab => return Some(Action::SelectScreen(app.router.current().prev())),
        TuiEvent::MouseUp(_, _) => {
            let pressing = app.cards().iter().any(|card| card.is_pressing());
            return pressing.then_some(Action::ReleasePress);
        }
        TuiEvent::MouseDown(col, row) => {
            if let Some(Hit::Nav(id)) = tui.hits.hit(col, row) {
                return Some(Action::SelectScreen(id));
            }
        }
        _ => {}
    }

    match app.router.current() {
        ScreenId::Home | ScreenId::Movies | ScreenId::Episodes => {
            handle_card_screen(event, app, tui)
        }
        ScreenId::About => handle_about(event, tui),
        ScreenId::Contact => handle_contact(event, app, tui),
    }
}

fn screen_shortcut(c: char) -> Option<Action> {
    let digit = c.to_digit(10)? as usize;
    let id = ScreenId::ALL.get(digit.checked_sub(1)?)?;
    Some(Action::SelectScreen(*id))
}

fn handle_card_screen(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
            tui.focus_prev();
            None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
            tui.focus_next(app);
            None
        }
        TuiEvent::Submit | TuiEvent::InputChar(' ') => {
            (!app.cards().is_empty()).then_some(Action::ActivateCard(tui.focus))
        }
        TuiEvent::InputChar('o') => Some(Action::OpenCardLink(tui.focus)),
        TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::InputChar(c) => screen_shortcut(c),
        TuiEvent::MouseDown(col, row) => match tui.hits.hit(col, row) {
            Some(Hit::CardLink(index)) => {
                tui.focus = index;
                Some(Action::OpenCardLink(index))
            }
            Some(Hit::Card(index)) => {
                tui.focus = index;
                let card = app.cards().get(index)?;
                match card.feedback() {
                    Feedback::Press => Some(Action::PressCard(index)),
                    Feedback::Click => Some(Action::ActivateCard(index)),
                }
            }
            _ => None,
        },
        _ => None,
    }
}

fn handle_about(event: TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
            tui.about_scroll.scroll_up();
            None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
            tui.about_scroll.scroll_down();
            None
        }
        TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::InputChar(c) => screen_shortcut(c),
        _ => None,
    }
}

fn handle_contact(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    let popup_visible = app.contact().is_some_and(|c| c.popup.is_visible());
    match (event, tui.contact_focus) {
        (TuiEvent::Escape, _) if popup_visible => Some(Action::DismissPopup),
        (TuiEvent::Escape, _) => Some(Action::Quit),
        (TuiEvent::SendForm, _) => Some(Action::SubmitForm),
        (TuiEvent::CursorUp, focus) => {
            tui.contact_focus = focus.prev();
            None
        }
        (TuiEvent::CursorDown, focus) => {
            tui.contact_focus = focus.next();
            None
        }
        (TuiEvent::Submit | TuiEvent::InputChar(' '), ContactFocus::Submit) => {
            Some(Action::SubmitForm)
        }
        (TuiEvent::Submit, ContactFocus::Field(FieldName::Message)) => {
            Some(Action::InsertChar(FieldName::Message, '\n'))
        }
        (TuiEvent::Submit, focus) => {
            tui.contact_focus = focus.next();
            None
        }
        (TuiEvent::InputChar(c), ContactFocus::Field(field)) => Some(Action::InsertChar(field, c)),
        (TuiEvent::Backspace, ContactFocus::Field(field)) => Some(Action::DeleteChar(field)),
        (TuiEvent::MouseDown(col, row), _) => match tui.hits.hit(col, row) {
            Some(Hit::Field(field)) => {
                tui.contact_focus = ContactFocus::Field(field);
                None
            }
            Some(Hit::Submit) => {
                tui.contact_focus = ContactFocus::Submit;
                Some(Action::SubmitForm)
            }
            _ => None,
        },
        _ => None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Applies an action and carries out its effect. Returns true on quit.
fn dispatch(app: &mut App, opener: &impl LinkOpener, action: Action) -> bool {
    debug!("Dispatching {:?}", action);
    match update(app, action) {
        Effect::Quit => true,
        Effect::OpenLink(url) => {
            opener.open(&url);
            false
        }
        Effect::Redraw | Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let opener = SystemOpener::new(config.link_opener.as_deref());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        tui.sync(&app);
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Sleep until the next event or the next timer, whichever is sooner
        let timeout = app
            .timers
            .time_until_next()
            .map_or(IDLE_POLL, |until| until.min(IDLE_POLL));
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain every pending event before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_event(event, &app, &mut tui)
                && dispatch(&mut app, &opener, action)
            {
                should_quit = true;
                break;
            }
            tui.sync(&app);
        }

        for fired in app.timers.fire_due() {
            needs_redraw = true;
            should_quit |= dispatch(&mut app, &opener, Action::TimerFired(fired));
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{main_app, test_app};
    use ratatui::layout::Rect;

    fn synced(app: &App) -> TuiState {
        let mut tui = TuiState::new();
        tui.sync(app);
        tui
    }

    #[test]
    fn test_landing_keys() {
        let (app, _clock) = test_app();
        let mut tui = synced(&app);
        assert_eq!(
            handle_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::DismissLanding)
        );
        assert_eq!(
            handle_event(TuiEvent::InputChar('q'), &app, &mut tui),
            Some(Action::Quit)
        );
        // Tabs do nothing before the landing is dismissed
        assert_eq!(handle_event(TuiEvent::NextTab, &app, &mut tui), None);
    }

    #[test]
    fn test_landing_button_click() {
        let (app, _clock) = test_app();
        let mut tui = synced(&app);
        tui.hits.landing_button = Some(Rect::new(10, 10, 16, 3));
        assert_eq!(
            handle_event(TuiEvent::MouseDown(12, 11), &app, &mut tui),
            Some(Action::DismissLanding)
        );
        assert_eq!(handle_event(TuiEvent::MouseDown(0, 0), &app, &mut tui), None);
    }

    #[test]
    fn test_force_quit_everywhere() {
        let (app, _clock) = main_app();
        let mut tui = synced(&app);
        assert_eq!(
            handle_event(TuiEvent::ForceQuit, &app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_tabs_and_digits_select_screens() {
        let (app, _clock) = main_app();
        let mut tui = synced(&app);
        assert_eq!(
            handle_event(TuiEvent::NextTab, &app, &mut tui),
            Some(Action::SelectScreen(ScreenId::Movies))
        );
        assert_eq!(
            handle_event(TuiEvent::PrevTab, &app, &mut tui),
            Some(Action::SelectScreen(ScreenId::Contact))
        );
        assert_eq!(
            handle_event(TuiEvent::InputChar('4'), &app, &mut tui),
            Some(Action::SelectScreen(ScreenId::About))
        );
        assert_eq!(handle_event(TuiEvent::InputChar('9'), &app, &mut tui), None);
        assert_eq!(handle_event(TuiEvent::InputChar('0'), &app, &mut tui), None);
    }

    #[test]
    fn test_focus_moves_and_clamps() {
        let (app, _clock) = main_app();
        let mut tui = synced(&app);
        let count = app.cards().len();
        for _ in 0..count + 3 {
            handle_event(TuiEvent::CursorDown, &app, &mut tui);
        }
        assert_eq!(tui.focus, count - 1);
        assert_eq!(
            handle_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::ActivateCard(count - 1))
        );
        for _ in 0..count + 3 {
            handle_event(TuiEvent::CursorUp, &app, &mut tui);
        }
        assert_eq!(tui.focus, 0);
        assert_eq!(
            handle_event(TuiEvent::InputChar('o'), &app, &mut tui),
            Some(Action::OpenCardLink(0))
        );
    }

    #[test]
    fn test_focus_resets_on_screen_change() {
        let (mut app, _clock) = main_app();
        let mut tui = synced(&app);
        tui.focus = 2;
        update(&mut app, Action::SelectScreen(ScreenId::Movies));
        tui.sync(&app);
        assert_eq!(tui.screen, Some(ScreenId::Movies));
        assert_eq!(tui.focus, 0);
    }

    #[test]
    fn test_card_click_depends_on_feedback() {
        let (mut app, _clock) = main_app();
        let mut tui = synced(&app);
        tui.hits.cards.push((1, Rect::new(0, 5, 30, 3)));
        assert_eq!(
            handle_event(TuiEvent::MouseDown(3, 6), &app, &mut tui),
            Some(Action::ActivateCard(1))
        );
        assert_eq!(tui.focus, 1);

        update(&mut app, Action::SelectScreen(ScreenId::Episodes));
        tui.sync(&app);
        tui.hits.cards.push((0, Rect::new(0, 0, 30, 4)));
        tui.hits.links.push((0, Rect::new(5, 2, 17, 1)));
        assert_eq!(
            handle_event(TuiEvent::MouseDown(1, 1), &app, &mut tui),
            Some(Action::PressCard(0))
        );
        assert_eq!(
            handle_event(TuiEvent::MouseDown(6, 2), &app, &mut tui),
            Some(Action::OpenCardLink(0))
        );
    }

    #[test]
    fn test_release_only_while_pressing() {
        let (mut app, _clock) = main_app();
        let mut tui = synced(&app);
        update(&mut app, Action::SelectScreen(ScreenId::Episodes));
        tui.sync(&app);
        assert_eq!(handle_event(TuiEvent::MouseUp(0, 0), &app, &mut tui), None);

        update(&mut app, Action::PressCard(0));
        assert_eq!(
            handle_event(TuiEvent::MouseUp(70, 30), &app, &mut tui),
            Some(Action::ReleasePress)
        );
    }

    #[test]
    fn test_nav_click() {
        let (app, _clock) = main_app();
        let mut tui = synced(&app);
        tui.hits.nav.push((ScreenId::About, Rect::new(40, 30, 10, 3)));
        assert_eq!(
            handle_event(TuiEvent::MouseDown(41, 31), &app, &mut tui),
            Some(Action::SelectScreen(ScreenId::About))
        );
    }

    #[test]
    fn test_about_scrolls_without_actions() {
        let (mut app, _clock) = main_app();
        update(&mut app, Action::SelectScreen(ScreenId::About));
        let mut tui = synced(&app);
        assert_eq!(handle_event(TuiEvent::CursorDown, &app, &mut tui), None);
        assert_eq!(handle_event(TuiEvent::ScrollUp, &app, &mut tui), None);
        assert_eq!(
            handle_event(TuiEvent::InputChar('q'), &app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_contact_typing() {
        let (mut app, _clock) = main_app();
        update(&mut app, Action::SelectScreen(ScreenId::Contact));
        let mut tui = synced(&app);

        // Digits and q are text here, not shortcuts
        assert_eq!(
            handle_event(TuiEvent::InputChar('1'), &app, &mut tui),
            Some(Action::InsertChar(FieldName::Name, '1'))
        );
        assert_eq!(
            handle_event(TuiEvent::InputChar('q'), &app, &mut tui),
            Some(Action::InsertChar(FieldName::Name, 'q'))
        );
        assert_eq!(
            handle_event(TuiEvent::Backspace, &app, &mut tui),
            Some(Action::DeleteChar(FieldName::Name))
        );

        // Enter advances through single-line fields, inserts newlines in Message
        assert_eq!(handle_event(TuiEvent::Submit, &app, &mut tui), None);
        assert_eq!(tui.contact_focus, ContactFocus::Field(FieldName::Email));
        handle_event(TuiEvent::CursorDown, &app, &mut tui);
        assert_eq!(
            handle_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::InsertChar(FieldName::Message, '\n'))
        );
        handle_event(TuiEvent::CursorDown, &app, &mut tui);
        assert_eq!(tui.contact_focus, ContactFocus::Submit);
        assert_eq!(
            handle_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::SubmitForm)
        );
    }

    #[test]
    fn test_contact_escape_dismisses_popup_first() {
        let (mut app, _clock) = main_app();
        update(&mut app, Action::SelectScreen(ScreenId::Contact));
        let mut tui = synced(&app);
        assert_eq!(
            handle_event(TuiEvent::SendForm, &app, &mut tui),
            Some(Action::SubmitForm)
        );
        update(&mut app, Action::SubmitForm);
        assert_eq!(
            handle_event(TuiEvent::Escape, &app, &mut tui),
            Some(Action::DismissPopup)
        );
        update(&mut app, Action::DismissPopup);
        assert_eq!(
            handle_event(TuiEvent::Escape, &app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_contact_mouse() {
        let (mut app, _clock) = main_app();
        update(&mut app, Action::SelectScreen(ScreenId::Contact));
        let mut tui = synced(&app);
        tui.hits.fields.push((FieldName::Message, Rect::new(0, 8, 40, 7)));
        tui.hits.submit = Some(Rect::new(13, 15, 14, 3));
        assert_eq!(handle_event(TuiEvent::MouseDown(2, 9), &app, &mut tui), None);
        assert_eq!(tui.contact_focus, ContactFocus::Field(FieldName::Message));
        assert_eq!(
            handle_event(TuiEvent::MouseDown(15, 16), &app, &mut tui),
            Some(Action::SubmitForm)
        );
    }

    #[test]
    fn test_dispatch_opens_links() {
        use crate::test_support::RecordingOpener;

        let (mut app, _clock) = main_app();
        let opener = RecordingOpener::default();
        assert!(!dispatch(&mut app, &opener, Action::ActivateCard(1)));
        assert_eq!(opener.opened.borrow().len(), 1);
        assert!(dispatch(&mut app, &opener, Action::Quit));
    }
}

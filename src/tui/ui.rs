use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use tui_scrollview::ScrollViewState;

use crate::core::form::FieldName;
use crate::core::navigator::View;
use crate::core::router::ScreenId;
use crate::core::state::{App, MountedScreen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AboutPage, CardDeck, ContactPage, LandingPage, NAV_BAR_HEIGHT, NavBar, SentPopup, StatusBar,
};

/// Clickable rectangles recorded during the last draw.
#[derive(Debug, Default, Clone)]
pub struct HitAreas {
    pub landing_button: Option<Rect>,
    pub nav: Vec<(ScreenId, Rect)>,
    pub cards: Vec<(usize, Rect)>,
    pub links: Vec<(usize, Rect)>,
    pub fields: Vec<(FieldName, Rect)>,
    pub submit: Option<Rect>,
}

/// What a mouse position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    LandingButton,
    Nav(ScreenId),
    CardLink(usize),
    Card(usize),
    Field(FieldName),
    Submit,
}

impl HitAreas {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Topmost thing under (col, row). Buttons inside cards win over the card.
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(col, row);
        if self.landing_button.is_some_and(|r| r.contains(pos)) {
            return Some(Hit::LandingButton);
        }
        if let Some((id, _)) = self.nav.iter().find(|(_, r)| r.contains(pos)) {
            return Some(Hit::Nav(*id));
        }
        if let Some((i, _)) = self.links.iter().find(|(_, r)| r.contains(pos)) {
            return Some(Hit::CardLink(*i));
        }
        if let Some((i, _)) = self.cards.iter().find(|(_, r)| r.contains(pos)) {
            return Some(Hit::Card(*i));
        }
        if let Some((field, _)) = self.fields.iter().find(|(_, r)| r.contains(pos)) {
            return Some(Hit::Field(*field));
        }
        if self.submit.is_some_and(|r| r.contains(pos)) {
            return Some(Hit::Submit);
        }
        None
    }
}

/// Maps a rectangle laid out inside a scroll view onto the screen, clipped
/// to the viewport. `None` when it is scrolled out of sight.
pub fn scrolled_rect(rect: Rect, viewport: Rect, offset: Position) -> Option<Rect> {
    let top = i32::from(rect.y) - i32::from(offset.y);
    let bottom = top + i32::from(rect.height);
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(i32::from(viewport.height));
    if visible_bottom <= visible_top || rect.x >= viewport.width {
        return None;
    }
    Some(Rect::new(
        viewport.x + rect.x,
        viewport.y + visible_top as u16,
        rect.width.min(viewport.width - rect.x),
        (visible_bottom - visible_top) as u16,
    ))
}

/// Scrolls as little as possible to bring `target` into a viewport `height`
/// rows tall, and never past the end of `content_height`.
pub fn scroll_into_view(
    state: &mut ScrollViewState,
    target: Option<Rect>,
    content_height: u16,
    height: u16,
) {
    let mut offset = state.offset();
    if let Some(target) = target {
        if target.y < offset.y || target.height > height {
            offset.y = target.y;
        } else if target.bottom() > offset.y.saturating_add(height) {
            offset.y = target.bottom() - height;
        }
    }
    offset.y = offset.y.min(content_height.saturating_sub(height));
    offset.x = 0;
    state.set_offset(offset);
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    tui.hits.clear();
    let area = frame.area();

    if app.view() == View::Landing {
        LandingPage {
            catalog: &app.catalog,
            hits: &mut tui.hits,
        }
        .render(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let [status_area, content_area, nav_area] =
        Layout::vertical([Length(1), Min(0), Length(NAV_BAR_HEIGHT)]).areas(area);

    let screen = app.router.current();
    StatusBar {
        banner: &app.catalog.banner,
        status_message: &app.status_message,
        screen,
    }
    .render(frame, status_area);

    match &app.mounted {
        MountedScreen::Cards { screen, cards } => {
            CardDeck {
                screen: *screen,
                specs: app.catalog.cards(*screen),
                states: cards,
                focus: tui.focus,
                hits: &mut tui.hits,
                scroll: &mut tui.cards_scroll,
            }
            .render(frame, content_area);
        }
        MountedScreen::About => {
            AboutPage {
                content: &app.catalog.about,
                scroll: &mut tui.about_scroll,
            }
            .render(frame, content_area);
        }
        MountedScreen::Contact(contact) => {
            ContactPage {
                form: &contact.form,
                footer: &app.catalog.contact_footer,
                focus: tui.contact_focus,
                hits: &mut tui.hits,
                scroll: &mut tui.contact_scroll,
            }
            .render(frame, content_area);
            if contact.popup.is_visible() {
                SentPopup.render(frame, content_area);
            }
        }
        MountedScreen::Landing => {}
    }

    NavBar {
        selected: screen,
        hits: &mut tui.hits,
    }
    .render(frame, nav_area);
}

//! # Card Deck Component
//!
//! Lays out the cards of Home, Movies and Episodes.
//!
//! Home mirrors its phone layout: the featured card on top, the popular
//! episodes two per row under a heading, and the movies teaser last.
//! Movies and Episodes are a plain column.
//!
//! Cards keep their full height and the deck scrolls instead, following
//! the keyboard focus. Every visible card's on-screen rectangle is recorded
//! in [`HitAreas`] so mouse input can find it again.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{CardSpec, ResourceProvider};
use crate::core::router::ScreenId;
use crate::core::state::Card;
use crate::tui::component::Component;
use crate::tui::components::card::{CardView, card_height};
use crate::tui::resources::GlyphResources;
use crate::tui::ui::{HitAreas, scroll_into_view, scrolled_rect};

const FEATURED_HEIGHT: u16 = 5;

/// Card and heading positions in scroll-content coordinates.
struct DeckLayout {
    heading: Option<Rect>,
    cards: Vec<(usize, Rect)>,
    height: u16,
}

pub struct CardDeck<'a> {
    pub screen: ScreenId,
    pub specs: Vec<&'a CardSpec>,
    pub states: &'a [Card],
    pub focus: usize,
    pub hits: &'a mut HitAreas,
    pub scroll: &'a mut ScrollViewState,
}

impl CardDeck<'_> {
    fn layout(&self, width: u16) -> DeckLayout {
        match self.screen {
            ScreenId::Home => self.home_layout(width),
            _ => self.column_layout(width),
        }
    }

    fn home_layout(&self, width: u16) -> DeckLayout {
        // Home order: featured, popular..., teaser.
        let mut layout = DeckLayout {
            heading: None,
            cards: Vec::new(),
            height: 0,
        };
        let count = self.specs.len();
        if count == 0 {
            return layout;
        }

        let mut y = 0;
        layout.cards.push((0, Rect::new(0, y, width, FEATURED_HEIGHT)));
        y += FEATURED_HEIGHT;
        if count == 1 {
            layout.height = y;
            return layout;
        }

        layout.heading = Some(Rect::new(0, y, width, 1));
        y += 1;

        let teaser = count - 1;
        let popular: Vec<usize> = (1..teaser).collect();
        for row in popular.chunks(2) {
            let row_height = row
                .iter()
                .map(|&i| card_height(self.specs[i]))
                .max()
                .unwrap_or(0);
            let cells = Layout::horizontal([Constraint::Ratio(1, 2); 2])
                .split(Rect::new(0, y, width, row_height));
            for (&index, cell) in row.iter().zip(cells.iter()) {
                layout.cards.push((index, *cell));
            }
            y += row_height;
        }

        // One blank row above the teaser
        y += 1;
        let teaser_height = card_height(self.specs[teaser]);
        layout.cards.push((teaser, Rect::new(0, y, width, teaser_height)));
        layout.height = y + teaser_height;
        layout
    }

    fn column_layout(&self, width: u16) -> DeckLayout {
        let mut y = 0;
        let cards = self
            .specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let rect = Rect::new(0, y, width, card_height(spec));
                y += rect.height;
                (index, rect)
            })
            .collect();
        DeckLayout {
            heading: None,
            cards,
            height: y,
        }
    }

    fn draw_card(&mut self, view: &mut ScrollView, index: usize, rect: Rect, viewport: Rect) {
        let (Some(spec), Some(state)) = (self.specs.get(index), self.states.get(index)) else {
            return;
        };
        let card = CardView {
            spec,
            glyph: GlyphResources.resolve(&spec.image),
            active: state.is_active(),
            focused: index == self.focus,
        };

        let offset = self.scroll.offset();
        if let Some(link) = card.link_area(rect)
            && let Some(on_screen) = scrolled_rect(link, viewport, offset)
        {
            self.hits.links.push((index, on_screen));
        }
        if let Some(on_screen) = scrolled_rect(rect, viewport, offset) {
            self.hits.cards.push((index, on_screen));
        }
        view.render_widget(card, rect);
    }
}

impl Component for CardDeck<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.specs.is_empty() {
            return;
        }

        // Leave a column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let viewport = Rect {
            width: content_width,
            ..area
        };
        let layout = self.layout(content_width);

        let focused = layout
            .cards
            .iter()
            .find(|(index, _)| *index == self.focus)
            .map(|(_, rect)| *rect);
        scroll_into_view(self.scroll, focused, layout.height, area.height);

        let mut view = ScrollView::new(Size::new(content_width, layout.height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        if let Some(heading) = layout.heading {
            view.render_widget(
                Paragraph::new(Line::from("⭐ POPULAR EPISODES ⭐").centered()).style(
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                heading,
            );
        }

        for &(index, rect) in &layout.cards {
            self.draw_card(&mut view, index, rect, viewport);
        }

        frame.render_stateful_widget(view, area, self.scroll);
    }
}

//! # Card Widget
//!
//! One content card. The "pop" of an active card is drawn as a thick,
//! bright border with bold text, which is as close to a scale-up as a
//! terminal cell grid gets.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::CardSpec;
use crate::tui::resources::Glyph;

/// Height of a card with no button row.
pub const CARD_HEIGHT: u16 = 3;
/// Height of a card that shows a "click to view" button.
pub const CARD_WITH_LINK_HEIGHT: u16 = 4;

const LINK_LABEL: &str = "[ click to view ]";

pub fn card_height(spec: &CardSpec) -> u16 {
    if spec.link.is_some() {
        CARD_WITH_LINK_HEIGHT
    } else {
        CARD_HEIGHT
    }
}

#[derive(Clone, Copy)]
pub struct CardView<'a> {
    pub spec: &'a CardSpec,
    pub glyph: Glyph,
    pub active: bool,
    pub focused: bool,
}

impl CardView<'_> {
    /// Where the "click to view" button lands when the card is drawn in `area`.
    pub fn link_area(&self, area: Rect) -> Option<Rect> {
        self.spec.link.as_ref()?;
        let inner = Block::bordered().inner(area);
        if inner.height < 2 {
            return None;
        }
        let width = (LINK_LABEL.width() as u16).min(inner.width);
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        Some(Rect::new(x, inner.y + 1, width, 1))
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut title_style = Style::default().fg(Color::White);
        let mut border_type = BorderType::Rounded;

        if self.active {
            border_type = BorderType::Thick;
            border_style = border_style.fg(Color::LightYellow).add_modifier(Modifier::BOLD);
            title_style = title_style.fg(Color::LightYellow).add_modifier(Modifier::BOLD);
        }

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let heading = Line::from(vec![
            Span::styled(self.glyph.symbol, Style::default().fg(self.glyph.color)),
            Span::raw("  "),
            Span::styled(self.spec.title.as_str(), title_style),
        ])
        .centered();
        Paragraph::new(heading).render(Rect { height: inner.height.min(1), ..inner }, buf);

        if let Some(link_area) = self.link_area(area) {
            Paragraph::new(LINK_LABEL)
                .style(Style::default().fg(Color::White).bg(Color::Red))
                .render(link_area, buf);
        }
    }
}

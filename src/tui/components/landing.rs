//! # Landing Page Component
//!
//! The one-time splash shown before the main screens: banner, tagline and
//! a "Let's Go" button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::catalog::{Catalog, ResourceProvider};
use crate::tui::component::Component;
use crate::tui::resources::GlyphResources;
use crate::tui::ui::HitAreas;

const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

pub struct LandingPage<'a> {
    pub catalog: &'a Catalog,
    pub hits: &'a mut HitAreas,
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let waves = GlyphResources.resolve(&self.catalog.background);

        let text_lines = vec![
            Line::from(Span::styled(
                self.catalog.banner.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}  Set sail for the Grand Line  {}", waves.symbol, waves.symbol),
                Style::default().fg(waves.color),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let text_height = text_lines.len() as u16;

        let [text_area, _, button_row] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(2), // Spacer
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );

        let [button_area] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(button_row);

        let button = Paragraph::new("Let's Go")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(button, button_area);
        self.hits.landing_button = Some(button_area);
    }
}

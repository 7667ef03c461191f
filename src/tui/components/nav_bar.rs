//! # Navigation Bar Component
//!
//! Bottom tab bar with one item per main screen. Purely presentational:
//! selection comes in as a prop and clicks are resolved through the
//! recorded hit areas.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::router::ScreenId;
use crate::tui::component::Component;
use crate::tui::ui::HitAreas;

pub const NAV_BAR_HEIGHT: u16 = 3;

pub struct NavBar<'a> {
    pub selected: ScreenId,
    pub hits: &'a mut HitAreas,
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, ScreenId::ALL.len() as u32);
            ScreenId::ALL.len()
        ])
        .split(inner);

        for (id, cell) in ScreenId::ALL.into_iter().zip(cells.iter()) {
            let style = if id == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightRed)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = Paragraph::new(format!("{} {}", id.icon(), id.label()))
                .alignment(Alignment::Center)
                .style(style);
            frame.render_widget(label, *cell);
            self.hits.nav.push((id, *cell));
        }
    }
}

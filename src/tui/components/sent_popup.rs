//! "Sent ✔" confirmation overlay. Visibility is decided by the core's
//! popup controller; this only draws it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::Component;

const POPUP_WIDTH: u16 = 20;
const POPUP_HEIGHT: u16 = 3;

pub struct SentPopup;

impl SentPopup {
    pub fn area(outer: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(POPUP_HEIGHT)])
            .flex(Flex::Center)
            .areas(outer);
        let [area] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
            .flex(Flex::Center)
            .areas(row);
        area
    }
}

impl Component for SentPopup {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::area(area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new("Sent ✔")
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Green)),
                ),
            overlay,
        );
    }
}

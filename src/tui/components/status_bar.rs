//! # StatusBar Component
//!
//! Top line of the main view: the banner on the left, the latest status
//! message (link opened, message sent) after it, and key hints for the
//! current screen on the right.
//!
//! Stateless: everything arrives as props.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::router::ScreenId;
use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub banner: &'a str,
    pub status_message: &'a str,
    pub screen: ScreenId,
}

impl StatusBar<'_> {
    pub fn hints(screen: ScreenId) -> &'static str {
        match screen {
            ScreenId::Home | ScreenId::Movies | ScreenId::Episodes => {
                "↑↓ Select  Enter Open  o Link  Tab Screens  q Quit"
            }
            ScreenId::About => "↑↓ Scroll  Tab Screens  q Quit",
            ScreenId::Contact => "↑↓ Field  Ctrl+S Send  Tab Screens  Esc Quit",
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = Self::hints(self.screen);
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.width() as u16),
        ])
        .areas(area);

        let mut spans = vec![Span::styled(
            self.banner,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), left);
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            right,
        );
    }
}

//! # About Page Component
//!
//! Heading, creator portrait and the long biography, inside a scroll view
//! since the text rarely fits a terminal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{AboutContent, ResourceProvider};
use crate::tui::component::Component;
use crate::tui::resources::GlyphResources;

/// Rows above the body: heading, blank, portrait, blank.
const HEADER_ROWS: u16 = 4;
const SIDE_PADDING: u16 = 2;

pub struct AboutPage<'a> {
    pub content: &'a AboutContent,
    pub scroll: &'a mut ScrollViewState,
}

impl AboutPage<'_> {
    fn body_lines(&self, width: u16) -> Vec<String> {
        let wrap_width = width.saturating_sub(SIDE_PADDING * 2).max(1) as usize;
        textwrap::wrap(&self.content.body, wrap_width)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl Component for AboutPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let body = self.body_lines(content_width);
        let total_height = HEADER_ROWS + body.len() as u16;

        let portrait = GlyphResources.resolve(&self.content.portrait);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                self.content.heading.as_str(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}  Eiichiro Oda", portrait.symbol),
                Style::default().fg(portrait.color),
            )),
        ])
        .alignment(Alignment::Center);
        scroll_view.render_widget(header, Rect::new(0, 0, content_width, HEADER_ROWS));

        let body_area = Rect::new(
            SIDE_PADDING,
            HEADER_ROWS,
            content_width.saturating_sub(SIDE_PADDING * 2),
            body.len() as u16,
        );
        let text: Vec<Line> = body.into_iter().map(Line::from).collect();
        scroll_view.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            body_area,
        );

        frame.render_stateful_widget(scroll_view, area, self.scroll);
    }
}

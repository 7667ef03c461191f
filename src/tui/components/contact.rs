//! # Contact Page Component
//!
//! Three text fields, a Submit button and the thank-you footer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ContactFocus` lives in `TuiState` (which field has the cursor)
//! - `ContactPage` is created each frame with borrowed form state
//!
//! The page sits in a scroll view that keeps the focused part on screen.
//! Field text is wrapped with textwrap so the drawn lines and the cursor
//! agree on where each character lands.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::form::{FieldName, FormState};
use crate::tui::component::Component;
use crate::tui::ui::{HitAreas, scroll_into_view, scrolled_rect};

const TITLE_HEIGHT: u16 = 2;
const SINGLE_LINE_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 7;
const SUBMIT_HEIGHT: u16 = 3;
const SUBMIT_WIDTH: u16 = 14;

/// Which part of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(FieldName),
    Submit,
}

impl Default for ContactFocus {
    fn default() -> Self {
        ContactFocus::Field(FieldName::Name)
    }
}

impl ContactFocus {
    pub fn next(self) -> Self {
        match self {
            ContactFocus::Field(FieldName::Message) => ContactFocus::Submit,
            ContactFocus::Field(field) => ContactFocus::Field(field.next()),
            ContactFocus::Submit => ContactFocus::Field(FieldName::Name),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactFocus::Field(FieldName::Name) => ContactFocus::Submit,
            ContactFocus::Field(FieldName::Email) => ContactFocus::Field(FieldName::Name),
            ContactFocus::Field(FieldName::Message) => ContactFocus::Field(FieldName::Email),
            ContactFocus::Submit => ContactFocus::Field(FieldName::Message),
        }
    }
}

/// Page rectangles in scroll-content coordinates.
struct FormLayout {
    title: Rect,
    fields: [(FieldName, Rect); 3],
    submit: Rect,
    footer: Rect,
    height: u16,
}

impl FormLayout {
    fn new(width: u16, footer_height: u16) -> Self {
        let mut y = 0;
        let mut next = |height: u16| {
            let rect = Rect::new(0, y, width, height);
            y += height;
            rect
        };
        let title = next(TITLE_HEIGHT);
        let name = next(SINGLE_LINE_HEIGHT);
        let email = next(SINGLE_LINE_HEIGHT);
        let message = next(MESSAGE_HEIGHT);
        let submit_row = next(SUBMIT_HEIGHT);
        next(1);
        let footer = next(footer_height);

        let [submit] = Layout::horizontal([Constraint::Length(SUBMIT_WIDTH)])
            .flex(Flex::Center)
            .areas(submit_row);

        Self {
            title,
            fields: [
                (FieldName::Name, name),
                (FieldName::Email, email),
                (FieldName::Message, message),
            ],
            submit,
            footer,
            height: footer.bottom(),
        }
    }

    fn focused(&self, focus: ContactFocus) -> Rect {
        match focus {
            ContactFocus::Submit => self.submit,
            ContactFocus::Field(field) => self
                .fields
                .iter()
                .find(|(name, _)| *name == field)
                .map_or(self.submit, |(_, rect)| *rect),
        }
    }
}

pub struct ContactPage<'a> {
    pub form: &'a FormState,
    pub footer: &'a [String],
    pub focus: ContactFocus,
    pub hits: &'a mut HitAreas,
    pub scroll: &'a mut ScrollViewState,
}

impl ContactPage<'_> {
    /// Draws one field and returns the cursor position when it has focus.
    fn render_field(&self, view: &mut ScrollView, field: FieldName, area: Rect) -> Option<Position> {
        let focused = self.focus == ContactFocus::Field(field);
        let border_style = if focused {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);

        let value = self.form.field(field);
        let (lines, cursor) = field_view(value, inner);
        let paragraph = if value.is_empty() {
            Paragraph::new(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        };
        view.render_widget(paragraph.block(block), area);

        focused.then_some(cursor)
    }
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrapped lines of `value`, with an empty last line after a trailing newline.
fn wrapped_lines(value: &str, width: u16) -> Vec<String> {
    let mut lines: Vec<String> = textwrap::wrap(value, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() || (value.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty())) {
        lines.push(String::new());
    }
    lines
}

/// The wrapped lines visible in `inner` and the cursor just after the
/// last character. Older lines scroll off the top as the text grows.
fn field_view(value: &str, inner: Rect) -> (Vec<String>, Position) {
    if inner.width == 0 || inner.height == 0 {
        return (Vec::new(), inner.as_position());
    }

    let lines = wrapped_lines(value, inner.width);
    let mut row = lines.len() - 1;

    // textwrap drops trailing spaces, but the cursor sits after them.
    let last_logical = value.rsplit('\n').next().unwrap_or("");
    let trailing = last_logical.len() - last_logical.trim_end_matches(' ').len();
    let mut col = lines[row].width() + trailing;
    if col >= inner.width as usize {
        row += 1;
        col = 0;
    }

    let first = row.saturating_sub(inner.height as usize - 1);
    let visible = lines
        .into_iter()
        .skip(first)
        .take(inner.height as usize)
        .collect();
    let cursor = Position::new(inner.x + col as u16, inner.y + (row - first) as u16);
    (visible, cursor)
}

impl Component for ContactPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let viewport = Rect {
            width: content_width,
            ..area
        };
        let layout = FormLayout::new(content_width, self.footer.len() as u16);
        scroll_into_view(
            self.scroll,
            Some(layout.focused(self.focus)),
            layout.height,
            area.height,
        );
        let offset = self.scroll.offset();

        let mut view = ScrollView::new(Size::new(content_width, layout.height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        view.render_widget(
            Paragraph::new("CONTACT US").alignment(Alignment::Center).style(
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            layout.title,
        );

        let mut cursor = None;
        for (field, rect) in layout.fields {
            if let Some(position) = self.render_field(&mut view, field, rect) {
                cursor = Some(position);
            }
            if let Some(on_screen) = scrolled_rect(rect, viewport, offset) {
                self.hits.fields.push((field, on_screen));
            }
        }

        let submit_style = if self.focus == ContactFocus::Submit {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White).bg(Color::Red)
        };
        view.render_widget(
            Paragraph::new("Submit")
                .alignment(Alignment::Center)
                .style(submit_style)
                .block(Block::bordered().border_type(BorderType::Rounded)),
            layout.submit,
        );
        self.hits.submit = scrolled_rect(layout.submit, viewport, offset);

        let lines: Vec<Line> = self
            .footer
            .iter()
            .map(|text| Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Gray))))
            .collect();
        view.render_widget(Paragraph::new(lines), layout.footer);

        frame.render_stateful_widget(view, area, self.scroll);

        // Hidden while the focused field is scrolled out of sight
        if let Some(position) = cursor
            && let Some(cell) = scrolled_rect(Rect::new(position.x, position.y, 1, 1), viewport, offset)
        {
            frame.set_cursor_position(cell.as_position());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(form: &FormState, focus: ContactFocus, size: (u16, u16)) -> (HitAreas, Position) {
        let footer = vec!["Thanks for stopping by".to_string(); 3];
        let mut hits = HitAreas::default();
        let mut scroll = ScrollViewState::default();
        let mut terminal = Terminal::new(TestBackend::new(size.0, size.1)).unwrap();
        terminal
            .draw(|f| {
                ContactPage {
                    form,
                    footer: &footer,
                    focus,
                    hits: &mut hits,
                    scroll: &mut scroll,
                }
                .render(f, f.area());
            })
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (hits, cursor)
    }

    #[test]
    fn test_focus_cycles_through_submit() {
        let mut focus = ContactFocus::default();
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(seen[3], ContactFocus::Submit);
        assert_eq!(seen[4], ContactFocus::default());
        assert_eq!(ContactFocus::default().prev(), ContactFocus::Submit);
        assert_eq!(ContactFocus::Submit.prev().next(), ContactFocus::Submit);
    }

    #[test]
    fn test_cursor_follows_last_line() {
        let inner = Rect::new(5, 10, 20, 5);
        assert_eq!(field_view("", inner).1, Position::new(5, 10));
        assert_eq!(field_view("abc", inner).1, Position::new(8, 10));
        assert_eq!(field_view("abc\nde", inner).1, Position::new(7, 11));
        assert_eq!(field_view("abc\n", inner).1, Position::new(5, 11));
        assert_eq!(field_view("ab ", inner).1, Position::new(8, 10));
    }

    #[test]
    fn test_long_value_wraps_and_scrolls() {
        let inner = Rect::new(0, 0, 4, 1);
        let (lines, cursor) = field_view("abcdefghij", inner);
        assert_eq!(lines, vec!["ij".to_string()]);
        assert_eq!(cursor, Position::new(2, 0));

        // A full line puts the cursor at the start of the next one
        let (lines, cursor) = field_view("abcd", inner);
        assert!(lines.is_empty());
        assert_eq!(cursor, Position::new(0, 0));
    }

    #[test]
    fn test_wrapped_message_cursor_row() {
        let inner = Rect::new(1, 1, 10, 5);
        let (lines, cursor) = field_view("one two three four", inner);
        assert_eq!(lines, vec!["one two", "three four"]);
        assert_eq!(cursor, Position::new(1, 3));
    }

    #[test]
    fn test_focused_submit_scrolls_into_view() {
        let form = FormState::new();
        let (hits, _) = draw(&form, ContactFocus::Submit, (40, 10));

        let submit = hits.submit.unwrap();
        assert_eq!(submit.height, SUBMIT_HEIGHT);
        assert!(submit.bottom() <= 10);
        assert!(!hits.fields.iter().any(|(field, _)| *field == FieldName::Name));
    }

    #[test]
    fn test_cursor_drawn_in_focused_field() {
        let mut form = FormState::new();
        form.set_field(FieldName::Name, "Luffy");
        let (hits, cursor) = draw(&form, ContactFocus::Field(FieldName::Name), (40, 30));

        let (_, name) = hits
            .fields
            .iter()
            .find(|(field, _)| *field == FieldName::Name)
            .copied()
            .unwrap();
        // Inside the border, just after "Luffy"
        assert_eq!(cursor, Position::new(name.x + 1 + 5, name.y + 1));
    }
}

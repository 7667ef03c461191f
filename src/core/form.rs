//! # Contact Form
//!
//! Free-text values for the three contact fields. No validation happens
//! here; `submit()` always succeeds, hands back what was typed and leaves
//! every field empty.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// Tab order on the contact screen.
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Name => "Your Name",
            FieldName::Email => "Your Mail",
            FieldName::Message => "Your Message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldName::Message)
    }

    pub fn next(self) -> Self {
        match self {
            FieldName::Name => FieldName::Email,
            FieldName::Email => FieldName::Message,
            FieldName::Message => FieldName::Name,
        }
    }
}

/// What the form held at the moment of submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct FormState {
    name: String,
    email: String,
    message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: FieldName) -> &str {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        *self.field_mut(name) = value.into();
    }

    /// Appends one typed character. Newlines only go into multi-line fields.
    pub fn insert_char(&mut self, name: FieldName, c: char) {
        if c == '\n' && !name.is_multiline() {
            return;
        }
        self.field_mut(name).push(c);
    }

    pub fn delete_char(&mut self, name: FieldName) {
        self.field_mut(name).pop();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|&f| self.field(f).is_empty())
    }

    /// Takes the current values and clears every field.
    pub fn submit(&mut self) -> FormSnapshot {
        FormSnapshot {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        }
    }
}

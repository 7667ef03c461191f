//! # Screen Router
//!
//! Picks which of the fixed main screens is on display. The set is closed:
//! there is no registration, and every movement between screens, including
//! Home's "latest movies" shortcut, goes through [`ScreenRouter::select`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    #[default]
    Home,
    Movies,
    Episodes,
    About,
    Contact,
}

impl ScreenId {
    /// Navigation bar order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Home,
        ScreenId::Movies,
        ScreenId::Episodes,
        ScreenId::About,
        ScreenId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScreenId::Home => "Home",
            ScreenId::Movies => "Movies",
            ScreenId::Episodes => "Episodes",
            ScreenId::About => "About",
            ScreenId::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScreenId::Home => "⌂",
            ScreenId::Movies => "🍿",
            ScreenId::Episodes => "📺",
            ScreenId::About => "ⓘ",
            ScreenId::Contact => "☎",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ScreenId::Home => 0,
            ScreenId::Movies => 1,
            ScreenId::Episodes => 2,
            ScreenId::About => 3,
            ScreenId::Contact => 4,
        }
    }

    /// Next tab in bar order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab in bar order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScreenError(pub String);

impl fmt::Display for ParseScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown screen '{}' (expected home, movies, episodes, about or contact)",
            self.0
        )
    }
}

impl std::error::Error for ParseScreenError {}

impl FromStr for ScreenId {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseScreenError(s.to_string()))
    }
}

/// Holds the current screen. Starts on `Home` unless told otherwise.
#[derive(Debug, Default)]
pub struct ScreenRouter {
    current: ScreenId,
    transitions: usize,
}

impl ScreenRouter {
    pub fn new(start: ScreenId) -> Self {
        Self {
            current: start,
            transitions: 0,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Makes `id` current. Returns false when `id` was already current.
    pub fn select(&mut self, id: ScreenId) -> bool {
        if self.current == id {
            return false;
        }
        debug!("Screen {} -> {}", self.current, id);
        self.current = id;
        self.transitions += 1;
        true
    }

    /// Number of selections that actually changed the screen.
    pub fn transitions(&self) -> usize {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_defaults_to_home() {
        let router = ScreenRouter::default();
        assert_eq!(router.current(), ScreenId::Home);
        assert_eq!(router.transitions(), 0);
    }

    #[test]
    fn test_last_selection_wins() {
        let mut router = ScreenRouter::default();
        for id in [ScreenId::About, ScreenId::Contact, ScreenId::Episodes] {
            router.select(id);
        }
        assert_eq!(router.current(), ScreenId::Episodes);
    }

    #[test]
    fn test_reselect_is_not_a_transition() {
        let mut router = ScreenRouter::default();
        assert!(router.select(ScreenId::Movies));
        assert!(!router.select(ScreenId::Movies));
        assert!(!router.select(ScreenId::Movies));
        assert_eq!(router.transitions(), 1);

        assert!(!ScreenRouter::default().select(ScreenId::Home));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(ScreenId::Home.next(), ScreenId::Movies);
        assert_eq!(ScreenId::Contact.next(), ScreenId::Home);
        assert_eq!(ScreenId::Home.prev(), ScreenId::Contact);
        for id in ScreenId::ALL {
            assert_eq!(id.next().prev(), id);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("movies".parse::<ScreenId>(), Ok(ScreenId::Movies));
        assert_eq!(" CONTACT ".parse::<ScreenId>(), Ok(ScreenId::Contact));
        assert!("settings".parse::<ScreenId>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            screen: ScreenId,
        }
        let parsed: Wrapper = toml::from_str("screen = \"episodes\"").unwrap();
        assert_eq!(parsed.screen, ScreenId::Episodes);
    }
}

//! # Content Catalog
//!
//! Everything the screens show is plain data: titles, symbolic image ids,
//! and what a card does when it is used. The controller never looks inside
//! an `AssetId`; turning one into something drawable is the job of a
//! [`ResourceProvider`] supplied by the presentation layer.
//!
//! ```text
//! Catalog
//! ├── banner: String
//! ├── featured: CardSpec            // Home, big card
//! ├── popular: Vec<CardSpec>        // Home, episode shortcuts
//! ├── movies_teaser: CardSpec       // Home, jumps to Movies
//! ├── movies: Vec<CardSpec>         // Movies screen
//! ├── episodes: Vec<CardSpec>       // Episodes screen (press feedback)
//! ├── about: AboutContent
//! └── contact_footer: Vec<String>
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::interaction::Feedback;
use crate::core::router::ScreenId;

/// Symbolic name of an image or font asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns asset ids into something the renderer can draw.
pub trait ResourceProvider {
    type Handle;

    fn resolve(&self, id: &AssetId) -> Self::Handle;
}

/// What using a card does besides the pop animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    OpenLink(String),
    Navigate(ScreenId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub title: String,
    pub image: AssetId,
    pub feedback: Feedback,
    /// Runs when the card itself is activated (click) or released (press).
    pub action: Option<CardAction>,
    /// The separate "click to view" button, if the card has one.
    pub link: Option<String>,
}

impl CardSpec {
    fn new(title: &str, image: &str, feedback: Feedback) -> Self {
        Self {
            title: title.to_string(),
            image: AssetId::new(image),
            feedback,
            action: None,
            link: None,
        }
    }

    fn with_action(mut self, action: CardAction) -> Self {
        self.action = Some(action);
        self
    }

    fn with_link(mut self, url: &str) -> Self {
        self.link = Some(url.to_string());
        self
    }

    /// Popular-episode shortcut on Home: click opens the episode.
    pub fn popular(title: &str, image: &str, url: &str) -> Self {
        Self::new(title, image, Feedback::Click).with_action(CardAction::OpenLink(url.to_string()))
    }

    /// Movie entry: clicking pops, the button opens the stream.
    pub fn movie(title: &str, image: &str, url: &str) -> Self {
        Self::new(title, image, Feedback::Click).with_link(url)
    }

    /// Episode range: releasing a press opens it, and so does the button.
    pub fn episode_range(title: &str, image: &str, url: &str) -> Self {
        Self::new(title, image, Feedback::Press)
            .with_action(CardAction::OpenLink(url.to_string()))
            .with_link(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub heading: String,
    pub portrait: AssetId,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub banner: String,
    pub background: AssetId,
    pub featured: CardSpec,
    pub popular: Vec<CardSpec>,
    pub movies_teaser: CardSpec,
    pub movies: Vec<CardSpec>,
    pub episodes: Vec<CardSpec>,
    pub about: AboutContent,
    pub contact_footer: Vec<String>,
}

impl Catalog {
    /// Cards of a screen in display (and focus) order.
    pub fn cards(&self, screen: ScreenId) -> Vec<&CardSpec> {
        match screen {
            ScreenId::Home => std::iter::once(&self.featured)
                .chain(self.popular.iter())
                .chain(std::iter::once(&self.movies_teaser))
                .collect(),
            ScreenId::Movies => self.movies.iter().collect(),
            ScreenId::Episodes => self.episodes.iter().collect(),
            ScreenId::About | ScreenId::Contact => Vec::new(),
        }
    }

    pub fn card(&self, screen: ScreenId, index: usize) -> Option<&CardSpec> {
        self.cards(screen).get(index).copied()
    }
}

const ABOUT_BODY: &str = "Eiichiro Oda, the creative genius behind One Piece, revolutionized the world of manga \
with his epic tale of pirates, dreams, and freedom. Since its debut in 1997, One Piece has become one of the \
best-selling manga series of all time, captivating millions with its rich world-building and unforgettable \
characters. The anime adaptation boasts over 1,000 episodes, each packed with adventure, emotion, and \
jaw-dropping twists. Oda's storytelling has also expanded into blockbuster movies, each adding new layers to \
the One Piece universe. With its blend of humor, heart, and high-seas action, One Piece is more than a story. \
It's a global phenomenon. Ready to set sail with the Straw Hat crew?";

impl Default for Catalog {
    fn default() -> Self {
        Self {
            banner: "🏴‍☠️ ONE PIECE WORLD 🏴‍☠️".to_string(),
            background: AssetId::new("onepiecebg"),
            featured: CardSpec::new("LUFFY: KING OF PIRATES", "luffy", Feedback::Click),
            popular: vec![
                CardSpec::popular("EP 851", "ep851", "https://aniwatch.com.ro/one-piece-episode-851/"),
                CardSpec::popular("EP 854", "ep854", "https://aniwatch.com.ro/one-piece-episode-854/"),
                CardSpec::popular("EP 1046", "ep1046", "https://aniwatch.com.ro/one-piece-episode-1046/"),
                CardSpec::popular("EP 1049", "ep1049", "https://aniwatch.com.ro/one-piece-episode-1049/"),
            ],
            movies_teaser: CardSpec::new("CLICK TO LATEST MOVIES", "movies", Feedback::Click)
                .with_action(CardAction::Navigate(ScreenId::Movies)),
            movies: vec![
                CardSpec::movie(
                    "One Piece: Stampede (2020)",
                    "onepiece_stampede",
                    "https://kwik.bunniescdn.online/f/2VNvcBQU1FAE",
                ),
                CardSpec::movie(
                    "One Piece Film: Red (2022)",
                    "onepiece_red",
                    "https://kwik.bunniescdn.online/f/nEp583IeM1ZN",
                ),
            ],
            episodes: vec![
                CardSpec::episode_range(
                    "One Piece: Episodes 0–500",
                    "episodes_0_500",
                    "https://example.com/episodes0to500",
                ),
                CardSpec::episode_range(
                    "One Piece: Episodes 501–1000",
                    "episodes_501_1000",
                    "https://example.com/episodes501to1000",
                ),
                CardSpec::episode_range(
                    "One Piece: Episodes 1001–1142",
                    "episodes_1001_1142",
                    "https://example.com/episodes1001to1142",
                ),
            ],
            about: AboutContent {
                heading: "About the Creator".to_string(),
                portrait: AssetId::new("eiichiro_oda"),
                body: ABOUT_BODY.to_string(),
            },
            contact_footer: vec![
                "🙏 Thank you for your support".to_string(),
                "💖 Your encouragement means the world to us.".to_string(),
                "💫 Together, we'll keep building something amazing.".to_string(),
                "⭐ We're grateful to have you with us on this journey.".to_string(),
                "📖 Feel free to reach out anytime, we're always here for you.".to_string(),
            ],
        }
    }
}

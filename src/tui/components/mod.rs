//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `StatusBar`: banner, status message, key hints
//! - `NavBar`: bottom tab bar
//! - `CardView`: a single content card (a `Widget`)
//! - `SentPopup`: the "Sent ✔" overlay
//!
//! ### Components With Borrowed State
//!
//! Created every frame around state that outlives the frame:
//! - `CardDeck`: card layout for Home, Movies and Episodes
//! - `AboutPage`: scrollable biography (`ScrollViewState` in `TuiState`)
//! - `ContactPage`: form fields and Submit (`ContactFocus` in `TuiState`)
//! - `LandingPage`: splash with the "Let's Go" button
//!
//! Components that can be clicked record their rectangles in `HitAreas`
//! while rendering; the event loop resolves mouse input against them.
//!
//! None of these decide anything. Whether a card is popped or the popup
//! is showing comes from the core; components only draw it.

pub mod about;
pub mod card;
pub mod card_deck;
pub mod contact;
pub mod landing;
pub mod nav_bar;
pub mod sent_popup;
pub mod status_bar;

pub use about::AboutPage;
pub use card_deck::CardDeck;
pub use contact::{ContactFocus, ContactPage};
pub use landing::LandingPage;
pub use nav_bar::{NAV_BAR_HEIGHT, NavBar};
pub use sent_popup::SentPopup;
pub use status_bar::StatusBar;

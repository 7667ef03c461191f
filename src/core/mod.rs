//! # Core Application Logic
//!
//! The view-state and interaction controller. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Timers (delays)      │
//!                    │                         │
//!                    │  No UI. No threads.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Link    │      │  Resource  │
//!     │  Adapter   │      │   Opener   │      │  Provider  │
//!     │ (ratatui)  │      │  (port)    │      │  (port)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`timer`]: single-threaded timer queue with cancel-on-drop guards
//! - [`navigator`]: landing → main gate
//! - [`router`]: which main screen is on display
//! - [`interaction`]: per-card "pop" state
//! - [`form`]: contact form fields
//! - [`popup`]: auto-hiding confirmation
//! - [`catalog`]: static screen content
//! - [`state`]: the `App` struct, all session state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and override resolution
//! - [`links`]: the link opener port

pub mod action;
pub mod catalog;
pub mod config;
pub mod form;
pub mod interaction;
pub mod links;
pub mod navigator;
pub mod popup;
pub mod router;
pub mod state;
pub mod timer;

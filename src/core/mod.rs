//! # Core Presentation Logic
//!
//! Slide navigation and deck content. Knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationState      │
//!                    │  • Deck / MenuEntry     │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. No timers.│
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`]: `NavigationState`, the bounded position state machine
//! - [`deck`]: Markdown deck loading and slide titles
//! - [`menu`]: jump menu entries and position parsing
//! - [`state`]: the `App` struct, all domain state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod deck;
pub mod menu;
pub mod navigation;
pub mod state;

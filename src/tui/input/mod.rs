//! # Input Adapters
//!
//! Translate raw terminal input into core actions.
//!
//! - [`keyboard`]: declarative key binding table, scoped by menu/text-entry state
//! - [`pointer`]: hit testing for buttons, the menu toggle and the menu panel
//! - [`swipe`]: press/release pairs classified as horizontal swipes
//! - [`focus`]: Tab focus between controls
//! - [`auto_hide`]: control dimming after inactivity
//!
//! None of these touch `NavigationState` directly. They produce `Action`s
//! (or local UI changes like focus) and the event loop feeds actions to
//! `core::action::update`.

pub mod auto_hide;
pub mod focus;
pub mod keyboard;
pub mod pointer;
pub mod swipe;

//! An accessible menu button.
//!
//! A [`MenuButton`] binds a trigger element to a menu element, keeps the
//! ARIA attributes of both in sync with the open state, and moves focus
//! between the menu items from the keyboard. It talks to the page only
//! through the [`Host`] and [`MenuElement`] capabilities, so the same widget
//! drives a browser DOM or the in-memory [`dry`] document.

pub mod config;
pub mod dry;
pub mod element;
pub mod error;
pub mod event;
pub mod menu_button;
pub mod navigation;

pub use config::{Checkable, Config, Role};
pub use element::{Host, Key, MenuElement, Propagation};
pub use error::{ConfigurationError, InvalidArgumentError};
pub use event::{Event, EventKind, Handler};
pub use menu_button::{MenuButton, MenuRef};

/// Trigger attribute naming the id of the menu it opens.
pub const MENU_ATTRIBUTE: &str = "data-inclusive-menu-opens";

/// Trigger attribute selecting the [`Checkable`] mode.
pub const CHECKABLE_ATTRIBUTE: &str = "data-inclusive-menu-checkable";

//! Core logic for the portfolio site.
//!
//! Everything here is host-agnostic: the browser build reaches the DOM through
//! the [`Layout`] and [`Viewport`] traits, and the CLI drives the same code
//! against a [`StaticLayout`] table.

pub mod content;
pub mod menu;
pub mod navigation;
pub mod navigator;
pub mod section;
pub mod site;
pub mod throttle;
pub mod tracker;

pub use menu::MenuState;
pub use navigation::NavigationState;
pub use navigator::{ScrollNavigator, Viewport};
pub use section::{Section, SectionRegistry};
pub use site::{Site, SiteError};
pub use throttle::{Throttle, ThrottleDecision};
pub use tracker::{ActiveSectionTracker, Layout, SectionBounds, StaticLayout, NAV_OFFSET};

//! Per-instance navigation state: the active section and the mobile menu.
//!
//! Two writers update the active section. Scroll events go through the
//! tracker and only ever move the highlight to a section that is actually
//! under the adjusted scroll position; when nothing matches the previous
//! value is kept. Clicks go through [`NavigationState::navigate_to`], which
//! writes the target immediately instead of waiting for the smooth scroll to
//! settle. Scroll events raised by that animation are handled afterwards and
//! may legitimately move the highlight again.

use std::sync::Arc;
use tracing::debug;

use crate::menu::MenuState;
use crate::navigator::Viewport;
use crate::section::SectionRegistry;
use crate::tracker::{ActiveSectionTracker, Layout};

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    registry: Arc<SectionRegistry>,
    tracker: ActiveSectionTracker,
    active: String,
    menu: MenuState,
}

impl NavigationState {
    pub fn new(registry: Arc<SectionRegistry>, tracker: ActiveSectionTracker) -> Self {
        let active = registry.first().id.clone();
        Self {
            registry,
            tracker,
            active,
            menu: MenuState::default(),
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &ActiveSectionTracker {
        &self.tracker
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Recompute the active section for a new scroll offset.
    ///
    /// Returns `true` when the active section changed.
    pub fn on_scroll<L>(&mut self, scroll_y: f64, layout: &L) -> bool
    where
        L: Layout + ?Sized,
    {
        let Some(section) = self.tracker.locate(&self.registry, scroll_y, layout) else {
            return false;
        };
        if section.id == self.active {
            return false;
        }
        debug!(from = %self.active, to = %section.id, scroll_y, "active section changed");
        self.active = section.id.clone();
        true
    }

    /// Jump to `id` and mark it active right away.
    ///
    /// Unknown ids and anchors missing from the viewport leave all state
    /// untouched and return `false`. On success the mobile menu is closed.
    pub fn navigate_to<V>(&mut self, id: &str, viewport: &V) -> bool
    where
        V: Viewport + ?Sized,
    {
        if !self.registry.contains(id) {
            debug!(section = id, "not a navigable section, ignoring");
            return false;
        }
        if !viewport.scroll_into_view(id) {
            debug!(section = id, "anchor not rendered, ignoring navigation");
            return false;
        }
        if self.active != id {
            debug!(from = %self.active, to = id, "navigated");
            self.active = id.to_string();
        }
        self.menu.close();
        true
    }
}

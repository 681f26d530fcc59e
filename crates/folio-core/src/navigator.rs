use tracing::debug;

use crate::tracker::Layout;

/// The scrollable host that renders the sections.
pub trait Viewport: Layout {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Start a smooth scroll that brings `id` into view.
    ///
    /// Returns `false` without side effects when no element has that id.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Stateless jumps to page anchors.
pub struct ScrollNavigator;

impl ScrollNavigator {
    /// Scroll to `id` without touching any navigation state.
    ///
    /// Used by in-page call-to-action buttons; the next scroll event lets the
    /// tracker catch up.
    pub fn scroll_to<V>(viewport: &V, id: &str) -> bool
    where
        V: Viewport + ?Sized,
    {
        let found = viewport.scroll_into_view(id);
        if !found {
            debug!(section = id, "anchor not rendered, ignoring jump");
        }
        found
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeViewport;
    use super::*;
    use crate::tracker::StaticLayout;

    #[test]
    fn test_scroll_to_existing_anchor() {
        let viewport = FakeViewport::new(StaticLayout::new().with("about", 500.0, 400.0));
        assert!(ScrollNavigator::scroll_to(&viewport, "about"));
        assert_eq!(*viewport.jumps.borrow(), vec!["about".to_string()]);
    }

    #[test]
    fn test_scroll_to_missing_anchor_is_noop() {
        let viewport = FakeViewport::new(StaticLayout::new());
        assert!(!ScrollNavigator::scroll_to(&viewport, "payments"));
        assert!(viewport.jumps.borrow().is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::section::{Section, SectionRegistry};

/// Height of the fixed navigation bar that overlaps the top of the viewport.
pub const NAV_OFFSET: f64 = 100.0;

/// Vertical extent of a rendered section, in CSS pixels from the document top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= position < top + height`.
    ///
    /// Negative or NaN heights describe an empty range and never match.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Source of rendered section geometry.
pub trait Layout {
    /// `None` when no element with this id is rendered.
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

/// Derives the section under the adjusted scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionTracker {
    offset: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(NAV_OFFSET)
    }
}

impl ActiveSectionTracker {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn adjusted(&self, scroll_y: f64) -> f64 {
        scroll_y + self.offset
    }

    /// First section, in registry order, whose bounds contain the adjusted
    /// position. Sections missing from the layout are skipped.
    pub fn locate<'r, L>(
        &self,
        registry: &'r SectionRegistry,
        scroll_y: f64,
        layout: &L,
    ) -> Option<&'r Section>
    where
        L: Layout + ?Sized,
    {
        let position = self.adjusted(scroll_y);
        registry.iter().find(|section| {
            layout
                .bounds(&section.id)
                .is_some_and(|bounds| bounds.contains(position))
        })
    }
}

/// Layout backed by a fixed table, used by the CLI simulator and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticLayout {
    #[serde(rename = "section", default)]
    entries: Vec<LayoutEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LayoutEntry {
    id: String,
    top: f64,
    height: f64,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the bounds for `id`.
    pub fn with(mut self, id: impl Into<String>, top: f64, height: f64) -> Self {
        self.insert(id, top, height);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, top: f64, height: f64) {
        let id = id.into();
        self.entries.retain(|e| e.id != id);
        self.entries.push(LayoutEntry { id, top, height });
    }

    /// Ids listed in the table, in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }
}

impl Layout for StaticLayout {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.id == id)
            .map(|e| SectionBounds::new(e.top, e.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use proptest::prelude::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new("home", "Home"),
            Section::new("about", "About me"),
            Section::new("experience", "Experience"),
        ])
        .unwrap()
    }

    fn layout() -> StaticLayout {
        StaticLayout::new()
            .with("home", 0.0, 500.0)
            .with("about", 500.0, 400.0)
            .with("experience", 900.0, 500.0)
    }

    #[test]
    fn test_bounds_half_open() {
        let bounds = SectionBounds::new(500.0, 400.0);
        assert!(bounds.contains(500.0));
        assert!(bounds.contains(899.9));
        assert!(!bounds.contains(900.0));
        assert!(!bounds.contains(499.9));
    }

    #[test]
    fn test_bounds_negative_height_never_matches() {
        let bounds = SectionBounds::new(100.0, -50.0);
        assert!(!bounds.contains(100.0));
        assert!(!bounds.contains(75.0));
        assert!(!SectionBounds::new(0.0, f64::NAN).contains(0.0));
    }

    #[test]
    fn test_locate_applies_offset() {
        let tracker = ActiveSectionTracker::default();
        let registry = registry();
        // 450 + 100 = 550 falls in about
        let found = tracker.locate(&registry, 450.0, &layout());
        assert_eq!(found.map(|s| s.id.as_str()), Some("about"));
        // 350 + 100 = 450 is still home
        let found = tracker.locate(&registry, 350.0, &layout());
        assert_eq!(found.map(|s| s.id.as_str()), Some("home"));
    }

    #[test]
    fn test_locate_past_end_is_none() {
        let tracker = ActiveSectionTracker::default();
        assert!(tracker.locate(&registry(), 1400.0, &layout()).is_none());
    }

    #[test]
    fn test_locate_skips_missing_sections() {
        let tracker = ActiveSectionTracker::new(0.0);
        let layout = StaticLayout::new()
            .with("home", 0.0, 500.0)
            .with("experience", 900.0, 500.0);
        let registry = registry();
        assert!(tracker.locate(&registry, 600.0, &layout).is_none());
        let found = tracker.locate(&registry, 950.0, &layout);
        assert_eq!(found.map(|s| s.id.as_str()), Some("experience"));
    }

    #[test]
    fn test_locate_first_match_wins_on_overlap() {
        let tracker = ActiveSectionTracker::new(0.0);
        let layout = StaticLayout::new()
            .with("home", 0.0, 1000.0)
            .with("about", 500.0, 400.0)
            .with("experience", 900.0, 500.0);
        let registry = registry();
        let found = tracker.locate(&registry, 600.0, &layout);
        assert_eq!(found.map(|s| s.id.as_str()), Some("home"));
    }

    #[test]
    fn test_locate_out_of_order_layout() {
        // Bad geometry is skipped, the scan still completes
        let tracker = ActiveSectionTracker::new(0.0);
        let layout = StaticLayout::new()
            .with("home", 900.0, -10.0)
            .with("about", 0.0, 300.0)
            .with("experience", 300.0, 300.0);
        let registry = registry();
        let found = tracker.locate(&registry, 350.0, &layout);
        assert_eq!(found.map(|s| s.id.as_str()), Some("experience"));
    }

    #[test]
    fn test_static_layout_insert_replaces() {
        let mut layout = StaticLayout::new().with("home", 0.0, 10.0);
        layout.insert("home", 5.0, 20.0);
        assert_eq!(layout.bounds("home"), Some(SectionBounds::new(5.0, 20.0)));
        assert_eq!(layout.ids().count(), 1);
        assert_eq!(layout.bounds("about"), None);
    }

    #[test]
    fn test_static_layout_from_toml() {
        let layout: StaticLayout = toml::from_str(
            r#"
            [[section]]
            id = "home"
            top = 0
            height = 500

            [[section]]
            id = "about"
            top = 500.0
            height = 400.0
            "#,
        )
        .unwrap();
        assert_eq!(layout.bounds("about"), Some(SectionBounds::new(500.0, 400.0)));
        assert_eq!(layout.ids().collect::<Vec<_>>(), vec!["home", "about"]);
    }

    proptest! {
        #[test]
        fn prop_position_inside_span_is_reported(offset in 0.0f64..400.0, raw in 0.0f64..1400.0) {
            let tracker = ActiveSectionTracker::new(offset);
            let registry = registry();
            let layout = layout();
            let position = raw + offset;
            let expected = if position < 500.0 {
                Some("home")
            } else if position < 900.0 {
                Some("about")
            } else if position < 1400.0 {
                Some("experience")
            } else {
                None
            };
            let found = tracker.locate(&registry, raw, &layout).map(|s| s.id.as_str());
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn prop_above_first_section_matches_nothing(scroll in -10_000.0f64..-100.0) {
            let tracker = ActiveSectionTracker::default();
            prop_assert!(tracker.locate(&registry(), scroll, &layout()).is_none());
        }
    }
}

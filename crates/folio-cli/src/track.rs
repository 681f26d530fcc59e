//! Replays scroll offsets through the navigation state over a layout table.

use anyhow::{bail, Context, Result};
use folio_core::{Layout, SectionBounds, Site, StaticLayout, Viewport};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Outcome of one simulated scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub scroll_y: f64,
    pub adjusted: f64,
    pub active: String,
    pub changed: bool,
}

/// A [`Viewport`] whose jumps always land, as long as the anchor exists.
struct SimulatedViewport<'a> {
    layout: &'a StaticLayout,
}

impl Layout for SimulatedViewport<'_> {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.layout.bounds(id)
    }
}

impl Viewport for SimulatedViewport<'_> {
    fn scroll_y(&self) -> f64 {
        0.0
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        self.layout.bounds(id).is_some()
    }
}

/// Load a layout table (`[[section]]` entries with `id`, `top`, `height`).
pub fn load_layout(path: &Path) -> Result<StaticLayout> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

pub fn replay(
    site: &Site,
    layout: &StaticLayout,
    from: Option<&str>,
    scrolls: &[f64],
) -> Result<Vec<Step>> {
    let registry = site.registry();
    for id in layout.ids() {
        if !registry.contains(id) {
            warn!(section = id, "layout entry is not a navigable section");
        }
    }

    let viewport = SimulatedViewport { layout };
    let mut nav = site.navigation();

    if let Some(id) = from {
        if !nav.navigate_to(id, &viewport) {
            bail!(
                "Cannot start from '{}': not a navigable section present in the layout",
                id
            );
        }
    }

    let steps = scrolls
        .iter()
        .map(|&scroll_y| {
            let changed = nav.on_scroll(scroll_y, layout);
            Step {
                scroll_y,
                adjusted: nav.tracker().adjusted(scroll_y),
                active: nav.active().to_string(),
                changed,
            }
        })
        .collect();

    Ok(steps)
}

//! Reveal-on-enter tracking for page sections.
//!
//! Every section plays its entrance animation once, the first time enough
//! of it scrolls into view. One [`RevealTracker`] per section carries that
//! fire-once policy; [`RevealBoard`] holds the trackers for the whole page.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page sections that reveal on enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Categories,
    Products,
    Features,
    Reviews,
    Blog,
    Newsletter,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Categories,
        Section::Products,
        Section::Features,
        Section::Reviews,
        Section::Blog,
        Section::Newsletter,
    ];

    /// Element id / anchor name.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Categories => "categories",
            Section::Products => "products",
            Section::Features => "features",
            Section::Reviews => "reviews",
            Section::Blog => "blog",
            Section::Newsletter => "newsletter",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// One-shot visibility trigger.
///
/// Flips from hidden to revealed the first time the observed element is
/// intersecting with at least `threshold` of its area visible, then stops
/// observing. It never goes back to hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    threshold: f32,
    revealed: bool,
}

impl RevealTracker {
    /// Create a tracker. The threshold is clamped to `0.0..=1.0`.
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Feed an intersection sample. Returns `true` only on the call that
    /// reveals.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if self.revealed {
            return false;
        }
        let intersecting = visible_fraction > 0.0;
        if intersecting && visible_fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Reveal without an intersection sample (e.g., on page mount).
    pub fn reveal_now(&mut self) -> bool {
        let fired = !self.revealed;
        self.revealed = true;
        fired
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Visible fraction each section needs before it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealThresholds {
    pub categories: f32,
    pub products: f32,
    pub features: f32,
    pub reviews: f32,
    pub blog: f32,
    pub newsletter: f32,
}

impl Default for RevealThresholds {
    fn default() -> Self {
        Self {
            categories: 0.2,
            products: 0.1,
            features: 0.2,
            reviews: 0.2,
            blog: 0.2,
            newsletter: 0.3,
        }
    }
}

impl RevealThresholds {
    /// Threshold for a section. The hero reveals on mount, so it has none.
    pub fn for_section(&self, section: Section) -> f32 {
        match section {
            Section::Hero => 0.0,
            Section::Categories => self.categories,
            Section::Products => self.products,
            Section::Features => self.features,
            Section::Reviews => self.reviews,
            Section::Blog => self.blog,
            Section::Newsletter => self.newsletter,
        }
    }

    /// Sections whose threshold lies outside `0.0..=1.0`.
    pub fn out_of_range(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|&s| !(0.0..=1.0).contains(&self.for_section(s)))
            .collect()
    }
}

/// Reveal trackers for every section on the page.
#[derive(Debug, Clone)]
pub struct RevealBoard {
    trackers: BTreeMap<Section, RevealTracker>,
}

impl RevealBoard {
    pub fn new(thresholds: &RevealThresholds) -> Self {
        let trackers = Section::ALL
            .into_iter()
            .map(|s| (s, RevealTracker::new(thresholds.for_section(s))))
            .collect();
        Self { trackers }
    }

    /// Feed an intersection sample for a section. Returns whether it revealed.
    pub fn observe(&mut self, section: Section, visible_fraction: f32) -> bool {
        let fired = self
            .trackers
            .get_mut(&section)
            .is_some_and(|t| t.observe(visible_fraction));
        if fired {
            debug!(%section, visible_fraction, "section revealed");
        }
        fired
    }

    /// Page mounted: the hero plays its entrance immediately.
    pub fn mount(&mut self) -> bool {
        self.trackers
            .get_mut(&Section::Hero)
            .is_some_and(RevealTracker::reveal_now)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.trackers
            .get(&section)
            .is_some_and(RevealTracker::is_revealed)
    }

    /// Revealed sections in page order.
    pub fn revealed(&self) -> Vec<Section> {
        self.trackers
            .iter()
            .filter(|(_, t)| t.is_revealed())
            .map(|(&s, _)| s)
            .collect()
    }
}

impl Default for RevealBoard {
    fn default() -> Self {
        Self::new(&RevealThresholds::default())
    }
}

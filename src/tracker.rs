use thiserror::Error;

use crate::config::PageConfig;
use crate::sections::Section;

/// Vertical extent of a section within the scrollable document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("no sections to track")]
    NoSections,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub active: Section,
    pub is_scrolled: bool,
    /// Whether `active` differs from the previous update.
    pub changed: bool,
}

/// Decides which configured section is on screen for navigation highlighting.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: Vec<Section>,
    lookahead_offset: f64,
    scrolled_threshold: f64,
    active: usize,
    is_scrolled: bool,
}

impl ActiveSectionTracker {
    /// `sections` must be in document order. The first one is active until
    /// the first measurement says otherwise.
    pub fn new(sections: Vec<Section>, config: &PageConfig) -> Result<Self, TrackerError> {
        if sections.is_empty() {
            return Err(TrackerError::NoSections);
        }
        Ok(Self {
            sections,
            lookahead_offset: config.lookahead_offset,
            scrolled_threshold: config.scrolled_threshold,
            active: 0,
            is_scrolled: false,
        })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> Section {
        self.sections[self.active]
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Recomputes state for a raw scroll offset.
    ///
    /// `measure` returns the current bounds of a section, or `None` if it is
    /// not in the document; such sections are skipped. When no section
    /// contains the look-ahead position the previous active section is kept.
    pub fn update<F>(&mut self, scroll_offset: f64, mut measure: F) -> ScrollUpdate
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        self.is_scrolled = scroll_offset > self.scrolled_threshold;

        let lookahead = scroll_offset + self.lookahead_offset;
        let hit = self.sections.iter().position(|section| {
            measure(section.id).is_some_and(|bounds| bounds.contains(lookahead))
        });

        let previous = self.active;
        if let Some(index) = hit {
            self.active = index;
        }
        let changed = previous != self.active;
        if changed {
            log::debug!(
                "active section {} -> {}",
                self.sections[previous].id,
                self.sections[self.active].id
            );
        }

        ScrollUpdate {
            active: self.active(),
            is_scrolled: self.is_scrolled,
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{ABOUT, CONTACT, EXPERIENCE, HOME, PROJECTS, SECTIONS, SKILLS};

    /// Page laid out as consecutive blocks, with a gap before `home`.
    fn layout(id: &str) -> Option<SectionBounds> {
        let (top, height) = match id {
            "home" => (80.0, 900.0),
            "about" => (980.0, 700.0),
            "skills" => (1680.0, 1200.0),
            "projects" => (2880.0, 1500.0),
            "experience" => (4380.0, 1400.0),
            "contact" => (5780.0, 1000.0),
            _ => return None,
        };
        Some(SectionBounds::new(top, height))
    }

    fn tracker() -> ActiveSectionTracker {
        ActiveSectionTracker::new(SECTIONS.to_vec(), &PageConfig::default())
            .expect("sections are configured")
    }

    #[test]
    fn test_empty_section_list_is_rejected() {
        let res = ActiveSectionTracker::new(Vec::new(), &PageConfig::default());
        assert_eq!(res.unwrap_err(), TrackerError::NoSections);
    }

    #[test]
    fn test_default_active_is_home() {
        let t = tracker();
        assert_eq!(t.active(), HOME);
        assert!(!t.is_scrolled());
    }

    #[test]
    fn test_position_uses_lookahead() {
        let mut t = tracker();
        // 880 + 100 lands exactly on the top of about
        assert_eq!(t.update(879.0, layout).active, HOME);
        let update = t.update(880.0, layout);
        assert_eq!(update.active, ABOUT);
        assert!(update.changed);
        assert_eq!(t.update(1579.0, layout).active, ABOUT);
        assert_eq!(t.update(1580.0, layout).active, SKILLS);
    }

    #[test]
    fn test_every_position_maps_to_containing_section() {
        let mut t = tracker();
        let mut y = 0.0;
        while y < 7000.0 {
            let update = t.update(y, layout);
            let lookahead = y + 100.0;
            let expected = SECTIONS
                .iter()
                .copied()
                .find(|s| layout(s.id).is_some_and(|b| b.contains(lookahead)));
            if let Some(expected) = expected {
                assert_eq!(update.active, expected, "scroll offset {y}");
            }
            assert!(SECTIONS.contains(&update.active));
            y += 37.0;
        }
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut t = tracker();
        // position 50, above home
        assert_eq!(t.update(-50.0, layout).active, HOME);

        assert_eq!(t.update(3000.0, layout).active, PROJECTS);
        let update = t.update(9000.0, layout);
        assert_eq!(update.active, PROJECTS);
        assert!(!update.changed);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut t = tracker();
        let without_skills = |id: &str| if id == "skills" { None } else { layout(id) };
        assert_eq!(t.update(1000.0, without_skills).active, ABOUT);
        assert_eq!(t.update(2000.0, without_skills).active, ABOUT);
        assert_eq!(t.update(2000.0, layout).active, SKILLS);
    }

    #[test]
    fn test_first_match_in_document_order_wins() {
        let mut t = tracker();
        let overlapping = |id: &str| match id {
            "about" | "skills" => Some(SectionBounds::new(0.0, 1000.0)),
            _ => None,
        };
        assert_eq!(t.update(200.0, overlapping).active, ABOUT);
    }

    #[test]
    fn test_is_scrolled_is_independent_of_sections() {
        let mut t = tracker();
        let nothing = |_: &str| None;
        assert!(!t.update(50.0, nothing).is_scrolled);
        assert!(t.update(50.5, nothing).is_scrolled);
        assert_eq!(t.active(), HOME);
        assert!(!t.update(0.0, layout).is_scrolled);
    }

    #[test]
    fn test_navigating_to_section_settles_on_it() {
        // a smooth scroll passes through intermediate offsets and ends with
        // the target's top at the viewport top
        for target in [CONTACT, ABOUT, EXPERIENCE, HOME, SKILLS, PROJECTS] {
            let mut t = tracker();
            t.update(2500.0, layout);
            let top = layout(target.id).map(|b| b.top).unwrap_or_default();
            let start = 2500.0;
            for step in 0..=10 {
                let y = start + (top - start) * f64::from(step) / 10.0;
                t.update(y, layout);
            }
            assert_eq!(t.active(), target);
        }
    }
}

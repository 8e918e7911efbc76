use crate::nav::SectionId;

/// Distance below the top of the viewport at which a section counts as reached.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;
/// Vertical offset past which the navbar switches to its scrolled style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }
}

/// Last section in document order containing `scroll_y + SCROLL_LOOKAHEAD`.
/// Sections with no span (not in the document) are skipped.
pub fn active_section<I>(sections: I, scroll_y: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, Option<SectionSpan>)>,
{
    let threshold = scroll_y + SCROLL_LOOKAHEAD;
    sections
        .into_iter()
        .filter_map(|(id, span)| span.filter(|s| s.contains(threshold)).map(|_| id))
        .last()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    active: SectionId,
    scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            scrolled: false,
        }
    }
}

impl ScrollTracker {
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recomputes both flags for a new scroll offset. `layout` reports where
    /// each section currently sits. Returns true if anything changed.
    pub fn observe<F>(&mut self, scroll_y: f64, layout: F) -> bool
    where
        F: Fn(SectionId) -> Option<SectionSpan>,
    {
        let before = *self;
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        let sections = SectionId::ALL.into_iter().map(|id| (id, layout(id)));
        if let Some(active) = active_section(sections, scroll_y) {
            self.active = active;
        }
        before != *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: SectionId) -> Option<SectionSpan> {
        match id {
            SectionId::Home => Some(SectionSpan::new(0.0, 800.0)),
            SectionId::Expertise => Some(SectionSpan::new(800.0, 800.0)),
            SectionId::Experience => Some(SectionSpan::new(1600.0, 600.0)),
            SectionId::Projects => Some(SectionSpan::new(2200.0, 900.0)),
            SectionId::Contact => Some(SectionSpan::new(3100.0, 700.0)),
        }
    }

    #[test]
    fn test_lookahead_reaches_next_section() {
        let mut tracker = ScrollTracker::default();
        assert!(tracker.observe(750.0, page));
        assert_eq!(tracker.active(), SectionId::Expertise);
    }

    #[test]
    fn test_two_section_page() {
        let sections = [
            (SectionId::Home, Some(SectionSpan::new(0.0, 800.0))),
            (SectionId::Expertise, Some(SectionSpan::new(800.0, 800.0))),
        ];
        assert_eq!(active_section(sections, 750.0), Some(SectionId::Expertise));
        assert_eq!(active_section(sections, 699.0), Some(SectionId::Home));
        assert_eq!(active_section(sections, 700.0), Some(SectionId::Expertise));
        assert_eq!(active_section(sections, 1500.0), None);
    }

    #[test]
    fn test_last_matching_section_wins() {
        // overlapping spans: later one in document order takes precedence
        let sections = [
            (SectionId::Home, Some(SectionSpan::new(0.0, 1000.0))),
            (SectionId::Expertise, Some(SectionSpan::new(500.0, 1000.0))),
        ];
        assert_eq!(active_section(sections, 600.0), Some(SectionId::Expertise));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let layout = |id: SectionId| match id {
            SectionId::Projects => None,
            other => page(other),
        };
        let mut tracker = ScrollTracker::default();
        tracker.observe(2500.0, layout);
        // no section contains 2600 so the previous value sticks
        assert_eq!(tracker.active(), SectionId::Home);

        tracker.observe(3200.0, layout);
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(1700.0, page);
        assert_eq!(tracker.active(), SectionId::Experience);

        let changed = tracker.observe(1700.0, |_| None);
        assert!(!changed);
        assert_eq!(tracker.active(), SectionId::Experience);

        tracker.observe(10_000.0, page);
        assert_eq!(tracker.active(), SectionId::Experience);
    }

    #[test]
    fn test_scrolled_flag() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(0.0, page);
        assert!(!tracker.scrolled());
        tracker.observe(50.0, page);
        assert!(!tracker.scrolled());
        tracker.observe(50.5, page);
        assert!(tracker.scrolled());
        tracker.observe(10.0, page);
        assert!(!tracker.scrolled());
    }
}

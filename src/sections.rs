/// Distance below the top of the viewport used as the probe point for tracking.
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Page order, which is also tracking and navigation order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Vertical extent of a section element, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the top edge belongs to the section, the bottom edge to the next one.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Derives the highlighted navigation entry from the scroll position.
#[derive(Debug, Clone, Default)]
pub struct ActiveSectionTracker {
    active: Section,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the active section for `scroll_y`.
    ///
    /// `measure` returns `None` for sections with no element on the page; those are
    /// skipped. The first section in page order containing the probe point wins, and
    /// when none does the previous value is kept.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, mut measure: F) -> Section
    where
        F: FnMut(Section) -> Option<SectionExtent>,
    {
        let probe = scroll_y + SCROLL_PROBE_OFFSET;
        if let Some(section) = Section::ALL
            .into_iter()
            .find(|s| measure(*s).is_some_and(|extent| extent.contains(probe)))
        {
            self.active = section;
        }
        self.active
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav entry was clicked: the menu closes and the caller scrolls to the returned section.
    pub fn select(&mut self, section: Section) -> Section {
        self.open = false;
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(section: Section) -> Option<SectionExtent> {
        // hero is a full viewport, the rest are content-sized
        match section {
            Section::Hero => Some(SectionExtent::new(0.0, 900.0)),
            Section::About => Some(SectionExtent::new(900.0, 700.0)),
            Section::Projects => Some(SectionExtent::new(1600.0, 800.0)),
            Section::Skills => Some(SectionExtent::new(2400.0, 600.0)),
            Section::Contact => Some(SectionExtent::new(3000.0, 900.0)),
        }
    }

    #[test]
    fn test_section_ids_and_labels() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["hero", "about", "projects", "skills", "contact"]);
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "About", "Projects", "Skills", "Contact"]);
    }

    #[test]
    fn test_initial_section_is_hero() {
        // nothing measured yet, so the initial value is what gets reported
        assert_eq!(ActiveSectionTracker::new().on_scroll(0.0, |_| None), Section::Hero);
    }

    #[test]
    fn test_every_offset_within_extent_marks_section() {
        let mut tracker = ActiveSectionTracker::new();
        for section in Section::ALL {
            let extent = layout(section).unwrap();
            let mut y = extent.top;
            while y < extent.top + extent.height {
                let scroll_y = y - SCROLL_PROBE_OFFSET;
                assert_eq!(tracker.on_scroll(scroll_y, layout), section, "probe {y}");
                y += 50.0;
            }
        }
    }

    #[test]
    fn test_probe_offset_boundaries() {
        let mut tracker = ActiveSectionTracker::new();
        // probe at 899 is still hero, 900 belongs to about
        assert_eq!(tracker.on_scroll(799.0, layout), Section::Hero);
        assert_eq!(tracker.on_scroll(800.0, layout), Section::About);
        assert_eq!(tracker.on_scroll(799.5, layout), Section::Hero);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.on_scroll(2500.0, layout), Section::Skills);
        // past the end of the page
        assert_eq!(tracker.on_scroll(10_000.0, layout), Section::Skills);
        // nothing on the page at all
        assert_eq!(tracker.on_scroll(0.0, |_| None), Section::Skills);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut tracker = ActiveSectionTracker::new();
        let without_projects = |s: Section| {
            if s == Section::Projects {
                None
            } else {
                layout(s)
            }
        };
        assert_eq!(tracker.on_scroll(1000.0, without_projects), Section::About);
        // projects' range matches nothing now, so about is retained
        assert_eq!(tracker.on_scroll(1700.0, without_projects), Section::About);
        assert_eq!(tracker.on_scroll(2500.0, without_projects), Section::Skills);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let mut tracker = ActiveSectionTracker::new();
        let overlapping = |s: Section| match s {
            Section::About => Some(SectionExtent::new(0.0, 500.0)),
            Section::Skills => Some(SectionExtent::new(0.0, 500.0)),
            _ => None,
        };
        assert_eq!(tracker.on_scroll(0.0, overlapping), Section::About);
    }

    #[test]
    fn test_nav_select_closes_menu() {
        for section in Section::ALL {
            let mut menu = NavMenu::default();
            menu.toggle();
            assert!(menu.is_open());
            assert_eq!(menu.select(section), section);
            assert!(!menu.is_open());

            // selecting from the desktop bar leaves a closed menu closed
            assert_eq!(menu.select(section), section);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn test_nav_toggle() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}

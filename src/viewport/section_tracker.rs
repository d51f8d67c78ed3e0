//! Scroll-spy for long documents: which registered section is in view, and
//! smooth scrolling to a section on request.

use log::{debug, warn};
use yew::prelude::*;

use super::dom::DomLayout;
use super::subscription::listen_window_scroll;

/// Document-relative vertical extent of a section, `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub bottom: f64,
}

impl SectionExtent {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.bottom
    }
}

/// Read access to the page the sections live on.
pub trait SectionLayout {
    fn scroll_y(&self) -> f64;

    /// Current extent of the element with this id, if it is rendered.
    fn extent_of(&self, id: &str) -> Option<SectionExtent>;

    /// Smooth-scrolls so the element's top edge meets the viewport top.
    /// Returns `false` when there is no such element.
    fn scroll_to_top_of(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<String>,
    offset: f64,
    active_index: usize,
}

impl ActiveSectionTracker {
    pub fn new(offset: f64) -> Self {
        Self {
            sections: Vec::new(),
            offset,
            active_index: 0,
        }
    }

    /// Sets the ordered section ids. Evaluation follows this order, not the
    /// order the sections appear in the document. Repeated ids are dropped.
    pub fn register<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.clear();
        self.active_index = 0;
        for id in ids {
            let id = id.into();
            if self.sections.contains(&id) {
                warn!("section id `{}` registered twice, ignoring the repeat", id);
                continue;
            }
            self.sections.push(id);
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_section(&self) -> Option<&str> {
        self.sections.get(self.active_index).map(String::as_str)
    }

    /// The point below the viewport top that decides which section is active.
    pub fn position_for(&self, scroll_y: f64) -> f64 {
        scroll_y + self.offset
    }

    /// Re-evaluates the active section. The first section (in registration
    /// order) whose extent holds the probe position wins; with no match the
    /// previous index stays. Returns whether the index changed.
    pub fn on_scroll(&mut self, layout: &impl SectionLayout) -> bool {
        let position = self.position_for(layout.scroll_y());
        let matched = self.sections.iter().position(|id| {
            layout
                .extent_of(id)
                .map_or(false, |extent| extent.contains(position))
        });

        match matched {
            Some(index) if index != self.active_index => {
                self.active_index = index;
                debug!("active section {:?} at {}", self.active_section(), position);
                true
            }
            _ => false,
        }
    }

    /// Scrolls to the section with this id. Unknown ids are ignored, and the
    /// active index is left for the resulting scroll events to update.
    pub fn scroll_to(&self, layout: &impl SectionLayout, id: &str) -> bool {
        let found = layout.scroll_to_top_of(id);
        if !found {
            debug!("no section `{}` to scroll to", id);
        }
        found
    }
}

#[derive(Clone, PartialEq)]
pub struct ActiveSection {
    pub index: usize,
    pub scroll_to: Callback<String>,
}

/// Tracks which of `section_ids` is in view while the component is mounted.
#[hook]
pub fn use_active_section(section_ids: Vec<String>, offset: f64) -> ActiveSection {
    let active_index = use_state_eq(|| 0usize);
    let tracker = use_mut_ref(|| ActiveSectionTracker::new(offset));

    {
        let active_index = active_index.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |(section_ids, offset)| {
                {
                    let mut tracker = tracker.borrow_mut();
                    *tracker = ActiveSectionTracker::new(*offset);
                    tracker.register(section_ids.iter().cloned());
                    debug!("tracking {} sections", tracker.sections().len());
                }
                active_index.set(0);

                let subscription = match DomLayout::from_window() {
                    Ok(layout) => {
                        if tracker.borrow_mut().on_scroll(&layout) {
                            active_index.set(tracker.borrow().active_index());
                        }
                        listen_window_scroll(move || {
                            let mut tracker = tracker.borrow_mut();
                            if tracker.on_scroll(&layout) {
                                active_index.set(tracker.active_index());
                            }
                        })
                        .map_err(|err| warn!("section highlighting disabled: {}", err))
                        .ok()
                    }
                    Err(err) => {
                        warn!("section highlighting disabled: {}", err);
                        None
                    }
                };

                move || drop(subscription)
            },
            (section_ids, offset),
        );
    }

    let scroll_to = use_callback(
        move |id: String, _| match DomLayout::from_window() {
            Ok(layout) => {
                tracker.borrow().scroll_to(&layout, &id);
            }
            Err(err) => warn!("cannot scroll to `{}`: {}", id, err),
        },
        (),
    );

    ActiveSection {
        index: *active_index,
        scroll_to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeLayout {
        scroll_y: Cell<f64>,
        extents: HashMap<String, SectionExtent>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeLayout {
        fn with_sections(sections: &[(&str, f64, f64)]) -> Self {
            Self {
                extents: sections
                    .iter()
                    .map(|(id, top, bottom)| (id.to_string(), SectionExtent::new(*top, *bottom)))
                    .collect(),
                ..Default::default()
            }
        }

        fn scroll(&self, y: f64) {
            self.scroll_y.set(y);
        }
    }

    impl SectionLayout for FakeLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn extent_of(&self, id: &str) -> Option<SectionExtent> {
            self.extents.get(id).copied()
        }

        fn scroll_to_top_of(&self, id: &str) -> bool {
            if !self.extents.contains_key(id) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        }
    }

    // Offset of zero so scroll_y is the probe position.
    fn abc() -> (ActiveSectionTracker, FakeLayout) {
        let mut tracker = ActiveSectionTracker::new(0.0);
        tracker.register(["a", "b", "c"]);
        let layout = FakeLayout::with_sections(&[
            ("a", 0.0, 100.0),
            ("b", 100.0, 250.0),
            ("c", 250.0, 400.0),
        ]);
        (tracker, layout)
    }

    #[test]
    fn starts_at_first_section() {
        let (tracker, _) = abc();
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.active_section(), Some("a"));
    }

    #[test]
    fn picks_section_containing_position() {
        let (mut tracker, layout) = abc();
        layout.scroll(150.0);
        assert!(tracker.on_scroll(&layout));
        assert_eq!(tracker.active_index(), 1);
    }

    #[test]
    fn lower_bound_is_inclusive() {
        let (mut tracker, layout) = abc();
        layout.scroll(100.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Some("b"));

        layout.scroll(250.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Some("c"));
    }

    #[test]
    fn keeps_previous_index_without_match() {
        let (mut tracker, layout) = abc();
        layout.scroll(300.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_index(), 2);

        layout.scroll(500.0);
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active_index(), 2);
    }

    #[test]
    fn moves_backwards() {
        let (mut tracker, layout) = abc();
        for (y, expected) in [(300.0, 2), (120.0, 1), (10.0, 0)] {
            layout.scroll(y);
            tracker.on_scroll(&layout);
            assert_eq!(tracker.active_index(), expected);
        }
    }

    #[test]
    fn applies_offset() {
        let mut tracker = ActiveSectionTracker::new(200.0);
        tracker.register(["a", "b", "c"]);
        let layout = FakeLayout::with_sections(&[
            ("a", 0.0, 100.0),
            ("b", 100.0, 250.0),
            ("c", 250.0, 400.0),
        ]);

        layout.scroll(0.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Some("b"));

        layout.scroll(60.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Some("c"));
    }

    #[test]
    fn overlap_resolves_in_registration_order() {
        let mut tracker = ActiveSectionTracker::new(0.0);
        tracker.register(["late", "early"]);
        let layout = FakeLayout::with_sections(&[("early", 0.0, 300.0), ("late", 100.0, 200.0)]);

        layout.scroll(150.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Some("late"));
    }

    #[test]
    fn unrendered_sections_are_skipped() {
        let mut tracker = ActiveSectionTracker::new(0.0);
        tracker.register(["missing", "b"]);
        let layout = FakeLayout::with_sections(&[("b", 0.0, 100.0)]);

        layout.scroll(50.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active_section(), Some("b"));
    }

    #[test]
    fn scroll_to_unknown_id_is_noop() {
        let (mut tracker, layout) = abc();
        layout.scroll(150.0);
        tracker.on_scroll(&layout);

        assert!(!tracker.scroll_to(&layout, "nonexistent"));
        assert_eq!(tracker.active_index(), 1);
        assert!(layout.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn scroll_to_known_id() {
        let (tracker, layout) = abc();
        assert!(tracker.scroll_to(&layout, "c"));
        assert_eq!(*layout.scrolled_to.borrow(), vec!["c".to_string()]);
        assert_eq!(tracker.active_index(), 0);
    }

    #[test]
    fn register_drops_duplicates() {
        let mut tracker = ActiveSectionTracker::new(0.0);
        tracker.register(["a", "b", "a"]);
        assert_eq!(tracker.sections(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn register_again_resets_index() {
        let (mut tracker, layout) = abc();
        layout.scroll(300.0);
        tracker.on_scroll(&layout);

        tracker.register(["c", "b"]);
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.active_section(), Some("c"));
    }

    #[test]
    fn no_sections_has_no_active_section() {
        let mut tracker = ActiveSectionTracker::new(0.0);
        let layout = FakeLayout::default();
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.active_section(), None);
    }
}

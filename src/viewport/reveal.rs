//! One-shot "reveal on first appearance" for landing sections.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use super::subscription::{observe_visibility, Observation, Visibility};

// Browsers can report the crossing entry a rounding step under the
// registered threshold.
const CROSSING_TOLERANCE: f64 = 1e-4;

/// Reveal bookkeeping for one section.
///
/// `revealed` only ever goes from `false` to `true`. Once revealed, or once
/// released, further measurements are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
    observing: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
            observing: false,
        }
    }

    /// Picks up where an earlier instance left off; an already revealed
    /// section is never observed again.
    pub fn resume(threshold: f64, revealed: bool) -> Self {
        Self {
            revealed,
            ..Self::new(threshold)
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Starts watching if there is something to watch. Without a target the
    /// section stays hidden for good.
    pub fn begin(&mut self, target_present: bool) -> bool {
        self.observing = target_present && !self.is_revealed();
        self.observing
    }

    /// Feeds one visible-fraction measurement. Returns `true` only for the
    /// measurement that flips the section to revealed.
    ///
    /// An intersecting entry within a rounding step of the threshold counts
    /// as having reached it.
    pub fn on_intersection(&mut self, visibility: Visibility) -> bool {
        if !self.observing || self.revealed {
            return false;
        }
        let reached = visibility.ratio >= self.threshold
            || (visibility.intersecting && visibility.ratio + CROSSING_TOLERANCE >= self.threshold);
        if reached {
            self.revealed = true;
            self.observing = false;
            return true;
        }
        false
    }

    pub fn release(&mut self) {
        self.observing = false;
    }
}

/// Returns `true` from the first time `target` is at least `threshold`
/// visible, and for the rest of the component's life.
#[hook]
pub fn use_reveal_on_visible(target: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(target, threshold)| {
                let state = Rc::new(RefCell::new(RevealState::resume(*threshold, *revealed)));
                let element = target.cast::<Element>();
                let observing = state.borrow_mut().begin(element.is_some());

                let subscription = match element {
                    Some(element) if observing => {
                        let handler_state = state.clone();
                        let threshold = state.borrow().threshold();
                        let observed = observe_visibility(&element, threshold, move |visibility| {
                            if handler_state.borrow_mut().on_intersection(visibility) {
                                revealed.set(true);
                                Observation::Stop
                            } else {
                                Observation::Continue
                            }
                        });
                        match observed {
                            Ok(subscription) => Some(subscription),
                            Err(err) => {
                                warn!("section stays hidden: {}", err);
                                state.borrow_mut().release();
                                None
                            }
                        }
                    }
                    _ if state.borrow().is_revealed() => None,
                    _ => {
                        debug!("no element to observe, section stays hidden");
                        None
                    }
                };

                move || {
                    let mut state = state.borrow_mut();
                    if state.is_observing() {
                        debug!("section unmounted before it was revealed");
                    }
                    state.release();
                    drop(subscription);
                }
            },
            (target, threshold),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub threshold: f64,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A `<section>` that fades in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_on_visible(node.clone(), props.threshold);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(
                props.class.clone(),
                if revealed { "revealed" } else { "reveal-hidden" }
            )}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seen(ratio: f64) -> Visibility {
        Visibility { ratio, intersecting: ratio > 0.0 }
    }

    fn observing(threshold: f64) -> RevealState {
        let mut state = RevealState::new(threshold);
        assert!(state.begin(true));
        state
    }

    #[test]
    fn reveals_at_exact_threshold() {
        let mut state = observing(0.3);
        assert!(state.on_intersection(seen(0.3)));
        assert!(state.is_revealed());
        assert!(!state.is_observing());
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = observing(0.2);
        assert!(!state.on_intersection(seen(0.0)));
        assert!(!state.on_intersection(seen(0.199)));
        assert!(!state.is_revealed());
        assert!(state.is_observing());
    }

    #[test]
    fn revealed_never_reverts() {
        let mut state = observing(0.2);
        assert!(state.on_intersection(seen(0.5)));
        for fraction in [0.0, 0.1, 1.0, 0.0] {
            assert!(!state.on_intersection(seen(fraction)));
            assert!(state.is_revealed());
        }
    }

    #[test]
    fn reveal_fires_once() {
        let mut state = observing(0.2);
        let fired: Vec<bool> = [0.1, 0.25, 0.9, 0.3]
            .into_iter()
            .map(|fraction| state.on_intersection(seen(fraction)))
            .collect();
        assert_eq!(fired, vec![false, true, false, false]);
    }

    #[test]
    fn missing_target_stays_hidden() {
        let mut state = RevealState::new(0.2);
        assert!(!state.begin(false));
        assert!(!state.on_intersection(seen(1.0)));
        assert!(!state.is_revealed());
    }

    #[test]
    fn measurements_after_release_are_ignored() {
        let mut state = observing(0.2);
        state.release();
        state.release();
        assert!(!state.on_intersection(seen(1.0)));
        assert!(!state.is_revealed());
        assert!(!state.is_observing());
    }

    #[test]
    fn release_keeps_revealed() {
        let mut state = observing(0.2);
        state.on_intersection(seen(0.4));
        state.release();
        assert!(state.is_revealed());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealState::new(1.5).threshold(), 1.0);
        assert_eq!(RevealState::new(-0.1).threshold(), 0.0);
    }

    #[test]
    fn intersecting_crossing_just_under_threshold_reveals() {
        let mut state = observing(0.3);
        assert!(state.on_intersection(Visibility { ratio: 0.299_999_99, intersecting: true }));
        assert!(state.is_revealed());
    }

    #[test]
    fn near_threshold_needs_intersection() {
        let mut state = observing(0.3);
        assert!(!state.on_intersection(Visibility { ratio: 0.299_999_99, intersecting: false }));
        assert!(!state.is_revealed());
    }

    #[test]
    fn intersecting_well_below_threshold_stays_hidden() {
        let mut state = observing(0.3);
        assert!(!state.on_intersection(Visibility { ratio: 0.05, intersecting: true }));
        assert!(!state.on_intersection(Visibility { ratio: 0.29, intersecting: true }));
        assert!(!state.is_revealed());
    }

    #[test]
    fn resumed_revealed_state_is_not_observed() {
        let mut state = RevealState::resume(0.3, true);
        assert!(!state.begin(true));
        assert!(!state.on_intersection(seen(0.0)));
        assert!(state.is_revealed());
    }

    #[test]
    fn resumed_hidden_state_observes_again() {
        let mut state = RevealState::resume(0.2, false);
        assert!(state.begin(true));
        assert!(state.on_intersection(seen(0.2)));
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::viewport_height;

/// How much of an element has to be on screen before it counts as seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Pixels trimmed from the top and bottom of the viewport.
    pub margin: f64,
    /// Fraction of the element's height that must be inside the trimmed
    /// viewport. Zero means any overlap at all.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            margin: 80.0,
            threshold: 0.0,
        }
    }
}

impl RevealOptions {
    pub fn new(margin: f64, threshold: f64) -> Self {
        Self {
            margin,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn is_intersecting(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let fraction = visible_fraction(top, bottom, viewport_height, self.margin);
        if self.threshold <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        }
    }
}

/// Share of the box `[top, bottom]` (viewport coordinates) that lies inside
/// the viewport once `margin` is trimmed from both of its edges.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> f64 {
    let lower = margin.max(0.0);
    let upper = (viewport_height - margin).max(lower);
    let height = bottom - top;

    if height <= 0.0 {
        return if top >= lower && top <= upper { 1.0 } else { 0.0 };
    }

    let overlap = (bottom.min(upper) - top.max(lower)).max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Fire-once switch behind every reveal.
#[derive(Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one observation. Returns `true` only for the first intersecting
    /// observation; later enters and exits are ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// `true` once the referenced element has been on screen, forever after.
///
/// Listeners are attached to the window until the element is first seen and
/// removed right after, or when the component unmounts.
#[hook]
pub fn use_in_view(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);
    let latch = use_mut_ref(RevealLatch::default);
    let revealed = *visible;

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options, revealed)| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !*revealed => {
                        let check = check_visibility(node.clone(), *options, latch, visible);
                        check();
                        let callback = Closure::<dyn Fn()>::new(check);
                        for event in ["scroll", "resize"] {
                            if window
                                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                                .is_err()
                            {
                                log::warn!("could not watch {} for reveal", event);
                            }
                        }
                        Box::new(move || {
                            for event in ["scroll", "resize"] {
                                let _ = window.remove_event_listener_with_callback(
                                    event,
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            (node, options, revealed),
        );
    }

    *visible
}

fn check_visibility(
    node: NodeRef,
    options: RevealOptions,
    latch: Rc<RefCell<RevealLatch>>,
    visible: UseStateHandle<bool>,
) -> impl Fn() {
    move || {
        // Listeners can still fire between the reveal and the effect teardown.
        if latch.borrow().is_revealed() {
            return;
        }
        let Some(element) = node.cast::<Element>() else {
            return;
        };
        let Some(viewport) = viewport_height() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let intersecting = options.is_intersecting(rect.top(), rect.bottom(), viewport);
        if latch.borrow_mut().observe(intersecting) {
            visible.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_the_fold_is_not_visible() {
        assert_eq!(visible_fraction(900.0, 1100.0, 800.0, 0.0), 0.0);
        assert!(!RevealOptions::new(0.0, 0.0).is_intersecting(900.0, 1100.0, 800.0));
    }

    #[test]
    fn margin_shrinks_the_viewport() {
        // 50px of the element pokes into the viewport but not past the margin.
        let options = RevealOptions::new(100.0, 0.0);
        assert!(!options.is_intersecting(750.0, 950.0, 800.0));
        assert!(options.is_intersecting(650.0, 850.0, 800.0));
    }

    #[test]
    fn threshold_needs_enough_of_the_element() {
        let options = RevealOptions::new(0.0, 0.5);
        // 25% visible.
        assert!(!options.is_intersecting(750.0, 950.0, 800.0));
        // 50% visible.
        assert!(options.is_intersecting(700.0, 900.0, 800.0));
    }

    #[test]
    fn fraction_is_bounded() {
        let tall = visible_fraction(-5000.0, 5000.0, 800.0, 0.0);
        assert!(tall > 0.0 && tall <= 1.0);
        assert_eq!(visible_fraction(100.0, 200.0, 800.0, 0.0), 1.0);
    }

    #[test]
    fn zero_height_element_counts_when_inside() {
        assert_eq!(visible_fraction(400.0, 400.0, 800.0, 0.0), 1.0);
        assert_eq!(visible_fraction(-10.0, -10.0, 800.0, 0.0), 0.0);
    }

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = RevealLatch::default();
        let observations = [false, false, true, false, true, true, false, true];
        let fired = observations
            .iter()
            .filter(|seen| latch.observe(**seen))
            .count();
        assert_eq!(fired, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn revealed_latch_ignores_later_exits() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        for seen in [false, true, false] {
            assert!(!latch.observe(seen));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn latch_stays_closed_without_intersection() {
        let mut latch = RevealLatch::default();
        for _ in 0..10 {
            assert!(!latch.observe(false));
        }
        assert!(!latch.is_revealed());
    }
}

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::viewport_height;

/// A point where an edge of the element lines up with an edge of the
/// viewport. Both fields are fractions: 0 is the top edge, 1 the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }
}

/// Scroll distance over which progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollRange {
    /// Element top enters at the viewport bottom, until its bottom leaves at the top.
    pub const ENTER_TO_EXIT: ScrollRange = ScrollRange {
        start: Anchor::new(0.0, 1.0),
        end: Anchor::new(1.0, 0.0),
    };

    /// Element top at the viewport top, until its bottom passes the viewport top.
    pub const PIN: ScrollRange = ScrollRange {
        start: Anchor::new(0.0, 0.0),
        end: Anchor::new(1.0, 0.0),
    };

    /// Progress for an element whose bounding box starts at `top` (viewport
    /// coordinates) and is `height` tall. Always within `[0, 1]`.
    pub fn progress(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let height = height.max(0.0);
        let traveled = -(top + height * self.start.element - viewport_height * self.start.viewport);
        let span = height * (self.end.element - self.start.element)
            - viewport_height * (self.end.viewport - self.start.viewport);

        if !traveled.is_finite() || !span.is_finite() {
            return 0.0;
        }
        if span <= f64::EPSILON {
            return if traveled >= 0.0 { 1.0 } else { 0.0 };
        }
        (traveled / span).clamp(0.0, 1.0)
    }
}

/// Linear interpolation between `from` and `to`, never leaving that range.
pub fn lerp(progress: f64, from: f64, to: f64) -> f64 {
    let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    if t >= 1.0 {
        return to;
    }
    let value = from + (to - from) * t;
    value.clamp(from.min(to), from.max(to))
}

/// Maps a slice of the progress range onto an output range.
///
/// Progress below `input.0` yields `output.0`, above `input.1` yields
/// `output.1`; nothing is extrapolated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolate {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Interpolate {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Full progress range onto `output`.
    pub const fn over(output: (f64, f64)) -> Self {
        Self::new((0.0, 1.0), output)
    }

    pub fn at(&self, progress: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (from, to) = self.output;
        let span = in_end - in_start;
        if span.abs() <= f64::EPSILON {
            return if progress >= in_start { to } else { from };
        }
        lerp((progress - in_start) / span, from, to)
    }
}

/// Scroll progress of the referenced element through `range`.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state(|| 0.0_f64);
    let last = use_mut_ref(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, range)| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let node = node.clone();
                    let range = *range;
                    let update = move || {
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let Some(viewport) = viewport_height() else {
                            return;
                        };
                        let rect = element.get_bounding_client_rect();
                        let next = range.progress(rect.top(), rect.height(), viewport);
                        let mut last = last.borrow_mut();
                        // Skip re-renders for sub-pixel changes, but always land on the ends.
                        let settled_at_end = next != *last && (next == 0.0 || next == 1.0);
                        if (next - *last).abs() > 0.001 || settled_at_end {
                            *last = next;
                            progress.set(next);
                        }
                    };
                    update();
                    let callback = Closure::<dyn Fn()>::new(update);
                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("could not watch {} for scroll progress", event);
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
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (node, range),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn enter_to_exit_runs_from_entry_to_exit() {
        let range = ScrollRange::ENTER_TO_EXIT;
        // Top edge sitting on the viewport bottom.
        assert_eq!(range.progress(VIEWPORT, 400.0, VIEWPORT), 0.0);
        // Bottom edge sitting on the viewport top.
        assert_eq!(range.progress(-400.0, 400.0, VIEWPORT), 1.0);
        // Halfway through the 1200px of travel.
        let mid = range.progress(200.0, 400.0, VIEWPORT);
        assert!((mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pin_runs_while_element_covers_viewport_top() {
        let range = ScrollRange::PIN;
        assert_eq!(range.progress(0.0, 1000.0, VIEWPORT), 0.0);
        assert!((range.progress(-250.0, 1000.0, VIEWPORT) - 0.25).abs() < 1e-9);
        assert_eq!(range.progress(-1000.0, 1000.0, VIEWPORT), 1.0);
    }

    #[test]
    fn progress_clamps_outside_the_range() {
        let range = ScrollRange::ENTER_TO_EXIT;
        assert_eq!(range.progress(5000.0, 400.0, VIEWPORT), 0.0);
        assert_eq!(range.progress(-5000.0, 400.0, VIEWPORT), 1.0);
    }

    #[test]
    fn degenerate_range_is_a_step() {
        let range = ScrollRange {
            start: Anchor::new(0.0, 0.0),
            end: Anchor::new(0.0, 0.0),
        };
        assert_eq!(range.progress(10.0, 400.0, VIEWPORT), 0.0);
        assert_eq!(range.progress(0.0, 400.0, VIEWPORT), 1.0);
        assert_eq!(range.progress(-10.0, 400.0, VIEWPORT), 1.0);
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        assert_eq!(lerp(0.0, 100.0, -100.0), 100.0);
        assert_eq!(lerp(1.0, 100.0, -100.0), -100.0);
        assert_eq!(lerp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(lerp(f64::NAN, 3.0, 9.0), 3.0);
    }

    #[test]
    fn interpolate_holds_outside_its_input_slice() {
        let fade = Interpolate::new((0.2, 0.6), (1.0, 0.0));
        assert_eq!(fade.at(0.0), 1.0);
        assert_eq!(fade.at(0.2), 1.0);
        assert!((fade.at(0.4) - 0.5).abs() < 1e-9);
        assert_eq!(fade.at(0.6), 0.0);
        assert_eq!(fade.at(1.0), 0.0);
    }

    proptest! {
        #[test]
        fn progress_is_always_normalised(
            top in -20_000.0f64..20_000.0,
            height in 0.0f64..5_000.0,
            viewport in 1.0f64..3_000.0,
        ) {
            for range in [ScrollRange::ENTER_TO_EXIT, ScrollRange::PIN] {
                let p = range.progress(top, height, viewport);
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }

        #[test]
        fn interpolated_values_stay_between_endpoints(
            top in -20_000.0f64..20_000.0,
            height in 0.0f64..5_000.0,
            from in -1_000.0f64..1_000.0,
            to in -1_000.0f64..1_000.0,
        ) {
            let p = ScrollRange::ENTER_TO_EXIT.progress(top, height, VIEWPORT);
            let value = Interpolate::over((from, to)).at(p);
            prop_assert!(value >= from.min(to) && value <= from.max(to));
        }
    }
}

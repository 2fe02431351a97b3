use yew::prelude::*;

use crate::motion::counter::{label, use_count_up, CountUp, Easing, DEFAULT_COUNT_DURATION_MS};
use crate::motion::visibility::{use_in_view, RevealOptions};
use crate::motion::MotionPhase;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub easing: Easing,
    #[prop_or(DEFAULT_COUNT_DURATION_MS)]
    pub duration: f64,
}

/// Counts up to `value` the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealOptions::new(40.0, 0.5));
    let count = CountUp::new(props.value)
        .with_duration(props.duration)
        .with_easing(props.easing);
    let shown = use_count_up(count, in_view);

    html! {
        <span
            ref={node}
            class={classes!("counter", (shown.phase == MotionPhase::Settled).then_some("counter-settled"))}
        >
            { label(shown.value, &props.suffix) }
        </span>
    }
}

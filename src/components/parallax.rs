use yew::prelude::*;

use crate::motion::scroll_progress::{use_scroll_progress, Interpolate, ScrollRange};

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Total vertical travel in px while the element crosses the viewport.
    /// Positive values drift up, negative values drift down.
    #[prop_or(80.0)]
    pub speed: f64,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::ENTER_TO_EXIT);
    let half = props.speed / 2.0;
    let offset = Interpolate::over((half, -half)).at(progress);

    html! {
        // Measure the untransformed wrapper so the offset doesn't feed back
        // into the progress.
        <div ref={node} class={classes!("parallax", props.class.clone())}>
            <div
                class="parallax-layer"
                style={format!("transform: translate3d(0, {:.2}px, 0); will-change: transform;", offset)}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

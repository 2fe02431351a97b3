use yew::prelude::*;

use crate::motion::visibility::{use_in_view, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger before the transition starts, in milliseconds.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub options: Option<RevealOptions>,
}

/// Fades and lifts its children into place the first time they scroll into
/// view. Scrolling away again leaves them revealed.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), props.options.unwrap_or_default());

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("revealed"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

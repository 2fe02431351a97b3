use stylist::Style;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: &'static [&'static str],
    /// Seconds for one full loop.
    #[prop_or(30.0)]
    pub duration: f64,
    #[prop_or_default]
    pub reverse: bool,
    #[prop_or("✦")]
    pub separator: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

fn track_css(duration: f64, reverse: bool) -> String {
    format!(
        r#"
            display: flex;
            width: max-content;
            animation: halcyon-marquee {duration:.2}s linear infinite;
            animation-direction: {direction};

            &:hover {{
                animation-play-state: paused;
            }}

            @keyframes halcyon-marquee {{
                from {{ transform: translateX(0); }}
                to {{ transform: translateX(-50%); }}
            }}
        "#,
        duration = duration.max(1.0),
        direction = if reverse { "reverse" } else { "normal" },
    )
}

/// Endless horizontal loop. The items are rendered twice and the track
/// slides by half its width, so the seam is never visible.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track_class = use_memo(
        |(duration, reverse)| match Style::new(track_css(*duration, *reverse)) {
            Ok(style) => style.get_class_name().to_string(),
            Err(e) => {
                log::warn!("marquee style rejected: {}", e);
                String::new()
            }
        },
        (props.duration, props.reverse),
    );

    let copy = |hidden: bool| {
        html! {
            <div class="marquee-group" aria-hidden={hidden.to_string()}>
                { for props.items.iter().map(|item| html! {
                    <span class="marquee-item" key={*item}>
                        {*item}
                        <span class="marquee-separator">{props.separator}</span>
                    </span>
                }) }
            </div>
        }
    };

    html! {
        <div class={classes!("marquee", props.class.clone())}>
            <div class={classes!("marquee-track", (*track_class).clone())}>
                { copy(false) }
                { copy(true) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::track_css;

    #[test]
    fn track_css_carries_duration_and_direction() {
        let css = track_css(24.0, true);
        assert!(css.contains("24.00s linear infinite"));
        assert!(css.contains("animation-direction: reverse;"));

        let css = track_css(0.0, false);
        assert!(css.contains("1.00s"));
        assert!(css.contains("animation-direction: normal;"));
    }
}

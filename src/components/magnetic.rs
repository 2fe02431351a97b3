use web_sys::Element;
use yew::prelude::*;

use crate::motion::frame::FrameLoop;
use crate::motion::spring::{Spring2D, SpringConfig};

/// Offset pulling an element from its resting `centre` towards `pointer`.
pub fn magnetic_target(centre: (f64, f64), pointer: (f64, f64), strength: f64) -> (f64, f64) {
    (
        (pointer.0 - centre.0) * strength,
        (pointer.1 - centre.1) * strength,
    )
}

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Share of the pointer's distance from the centre the element follows.
    #[prop_or(0.3)]
    pub strength: f64,
    #[prop_or_default]
    pub spring: Option<SpringConfig>,
}

/// Pulls its children towards the pointer while hovered and springs back to
/// rest when the pointer leaves. Each instance owns its spring and ticker.
#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0_f64, 0.0_f64));
    let spring = use_mut_ref({
        let config = props.spring.unwrap_or_default();
        move || Spring2D::new(config)
    });
    let last_tick = use_mut_ref(|| None::<f64>);
    let frame = use_state(FrameLoop::default);

    {
        let frame = (*frame).clone();
        use_effect_with_deps(move |_| move || frame.stop(), ());
    }

    let pull_to = {
        let spring = spring.clone();
        let offset = offset.clone();
        let frame = (*frame).clone();
        Callback::from(move |target: (f64, f64)| {
            spring.borrow_mut().set_target(target);
            let spring = spring.clone();
            let offset = offset.clone();
            let last_tick = last_tick.clone();
            frame.start(move |now| {
                let previous = last_tick.borrow_mut().replace(now);
                let dt = previous.map_or(0.0, |previous| (now - previous) / 1000.0);
                let mut spring = spring.borrow_mut();
                spring.step(dt);
                offset.set(spring.value());
                if spring.is_settled() {
                    *last_tick.borrow_mut() = None;
                    return false;
                }
                true
            });
        })
    };

    let onmousemove = {
        let node = node.clone();
        let spring = spring.clone();
        let pull_to = pull_to.clone();
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            // The rect already includes the current offset; measure from rest.
            let (dx, dy) = spring.borrow().value();
            let centre = (
                rect.left() + rect.width() / 2.0 - dx,
                rect.top() + rect.height() / 2.0 - dy,
            );
            let pointer = (f64::from(e.client_x()), f64::from(e.client_y()));
            pull_to.emit(magnetic_target(centre, pointer, strength));
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| pull_to.emit((0.0, 0.0)));

    let (x, y) = *offset;
    html! {
        <div
            ref={node}
            class={classes!("magnetic", props.class.clone())}
            style={format!("display: inline-block; transform: translate3d({:.2}px, {:.2}px, 0);", x, y)}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::magnetic_target;

    #[test]
    fn target_scales_distance_by_strength() {
        let target = magnetic_target((100.0, 50.0), (140.0, 30.0), 0.25);
        assert_eq!(target, (10.0, -5.0));
    }

    #[test]
    fn pointer_on_centre_has_no_pull() {
        assert_eq!(magnetic_target((12.0, 34.0), (12.0, 34.0), 0.4), (0.0, 0.0));
    }

    #[test]
    fn zero_strength_stays_put() {
        assert_eq!(magnetic_target((0.0, 0.0), (300.0, -200.0), 0.0), (0.0, 0.0));
    }
}

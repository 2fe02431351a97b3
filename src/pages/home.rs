use yew::prelude::*;

use crate::motion::scroll_to_top;
use crate::sections::{
    contact::Contact, hero::Hero, portfolio::Portfolio, process::Process, services::Services,
    stats::Stats, testimonials::Testimonials,
};

/// Section id named by a location hash such as `#work`.
pub fn anchor_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash).trim();
    (!id.is_empty()).then_some(id)
}

fn scroll_to_anchor_or_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    let target = anchor_from_hash(&hash)
        .and_then(|id| window.document().and_then(|document| document.get_element_by_id(id)));

    match target {
        Some(element) => element.scroll_into_view(),
        None => {
            if !hash.is_empty() {
                log::warn!("No section for anchor {}", hash);
            }
            scroll_to_top();
        }
    }
}

#[function_component]
pub fn Home() -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_anchor_or_top();
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero />
            <Stats />
            <Services />
            <Process />
            <Portfolio />
            <Testimonials />
            <Contact />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::anchor_from_hash;

    #[test]
    fn hash_names_the_section() {
        assert_eq!(anchor_from_hash("#work"), Some("work"));
        assert_eq!(anchor_from_hash("contact"), Some("contact"));
    }

    #[test]
    fn empty_hash_has_no_anchor() {
        assert_eq!(anchor_from_hash(""), None);
        assert_eq!(anchor_from_hash("#"), None);
    }
}

use yew::prelude::*;
use yew_router::components::Link;

use crate::motion::scroll_to_top;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(|_| { scroll_to_top(); || () }, ());

    html! {
        <section class="section not-found">
            <p class="eyebrow">{"404"}</p>
            <h1 class="section-title">{"This page wandered off"}</h1>
            <p>{"The link may be old or the project may have moved."}</p>
            <Link<Route> to={Route::Home} classes="button button-primary">{"Back to the studio"}</Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .not-found p:not(.eyebrow) { color: #999; }
                "#}
            </style>
        </section>
    }
}

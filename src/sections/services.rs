use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SERVICES;
use crate::motion::visibility::RevealOptions;

#[function_component(Services)]
pub fn services() -> Html {
    let active = use_state(|| 0usize);
    let Some(service) = SERVICES.get(*active).or_else(|| SERVICES.first()) else {
        return html! {};
    };

    html! {
        <section id="services" class="section services">
            <Reveal>
                <p class="eyebrow">{"What we do"}</p>
                <h2 class="section-title">{"Services built around outcomes"}</h2>
            </Reveal>
            <div class="services-layout">
                <div class="services-tabs" role="tablist">
                    { for SERVICES.iter().enumerate().map(|(index, item)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        let selected = index == *active;
                        html! {
                            <button
                                key={item.id}
                                role="tab"
                                aria-selected={selected.to_string()}
                                class={classes!("services-tab", selected.then_some("active"))}
                                {onclick}
                            >
                                <span class="services-tab-index">{format!("0{}", index + 1)}</span>
                                {item.title}
                            </button>
                        }
                    }) }
                </div>
                // Keyed so each tab change mounts a fresh reveal.
                <Reveal key={service.id} class="services-panel" options={RevealOptions::new(0.0, 0.0)}>
                    <h3>{service.title}</h3>
                    <p class="services-tagline">{service.tagline}</p>
                    <p>{service.description}</p>
                    <ul class="services-deliverables">
                        { for service.deliverables.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                    </ul>
                </Reveal>
            </div>
            <style>
                {r#"
                    .services-layout {
                        display: grid;
                        grid-template-columns: minmax(220px, 1fr) 2fr;
                        gap: 3rem;
                        margin-top: 3rem;
                    }
                    .services-tabs {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .services-tab {
                        display: flex;
                        align-items: baseline;
                        gap: 1rem;
                        padding: 1rem 1.25rem;
                        border: 1px solid transparent;
                        border-radius: 12px;
                        background: none;
                        color: #888;
                        font-size: 1.25rem;
                        text-align: left;
                        cursor: pointer;
                        transition: color 0.3s ease, border-color 0.3s ease, background 0.3s ease;
                    }
                    .services-tab:hover { color: #fff; }
                    .services-tab.active {
                        color: #fff;
                        border-color: rgba(124, 92, 255, 0.4);
                        background: rgba(124, 92, 255, 0.08);
                    }
                    .services-tab-index {
                        font-size: 0.8rem;
                        color: #a993ff;
                    }
                    .services-panel {
                        padding: 2.5rem;
                        border-radius: 20px;
                        background: rgba(30, 30, 36, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .services-panel h3 {
                        font-size: 2rem;
                        margin: 0 0 0.5rem;
                    }
                    .services-tagline {
                        color: #a993ff;
                        font-size: 1.1rem;
                    }
                    .services-deliverables {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        list-style: none;
                        padding: 0;
                        margin-top: 2rem;
                    }
                    .services-deliverables li {
                        padding: 0.4rem 0.9rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        color: #ccc;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .services-layout { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}

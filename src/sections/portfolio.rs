use yew::prelude::*;
use yew_router::components::Link;

use crate::components::parallax::Parallax;
use crate::components::reveal::Reveal;
use crate::content::PROJECTS;
use crate::Route;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let hovered = use_state(|| None::<usize>);

    let clear_hover = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <section id="work" class="section portfolio">
            <Reveal>
                <p class="eyebrow">{"Selected work"}</p>
                <h2 class="section-title">{"Projects we're proud of"}</h2>
            </Reveal>
            <div class="portfolio-grid" onmouseleave={clear_hover}>
                { for PROJECTS.iter().enumerate().map(|(index, project)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let dimmed = matches!(*hovered, Some(current) if current != index);
                    html! {
                        <Reveal
                            key={project.id}
                            class={classes!("portfolio-card", dimmed.then_some("dimmed"))}
                            delay={(index % 2) as u32 * 120}
                        >
                            <div {onmouseenter}>
                                <Link<Route> to={Route::Project { id: project.id.to_string() }} classes="portfolio-link">
                                    <div class="portfolio-cover">
                                        <Parallax speed={60.0}>
                                            <div
                                                class="portfolio-cover-art"
                                                style={format!("background: radial-gradient(circle at 30% 30%, {}, #111 70%);", project.accent)}
                                            >
                                                <span>{project.title}</span>
                                            </div>
                                        </Parallax>
                                    </div>
                                    <div class="portfolio-meta">
                                        <h3>{project.title}</h3>
                                        <span>{format!("{} · {}", project.category, project.year)}</span>
                                    </div>
                                    <p class="portfolio-summary">{project.summary}</p>
                                </Link<Route>>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 3rem 2rem;
                        margin-top: 3rem;
                    }
                    .portfolio-card {
                        transition: opacity 0.4s ease, transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .portfolio-card.revealed.dimmed { opacity: 0.4; }
                    .portfolio-link {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                    }
                    .portfolio-cover {
                        aspect-ratio: 4 / 3;
                        border-radius: 20px;
                        overflow: hidden;
                    }
                    .portfolio-cover .parallax,
                    .portfolio-cover .parallax-layer {
                        height: 100%;
                    }
                    .portfolio-cover-art {
                        height: 120%;
                        margin-top: -10%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        transition: transform 0.6s ease;
                    }
                    .portfolio-link:hover .portfolio-cover-art { transform: scale(1.04); }
                    .portfolio-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: baseline;
                        margin-top: 1.25rem;
                    }
                    .portfolio-meta h3 { margin: 0; font-size: 1.4rem; }
                    .portfolio-meta span { color: #888; font-size: 0.9rem; }
                    .portfolio-summary { color: #999; margin: 0.5rem 0 0; }
                    @media (max-width: 768px) {
                        .portfolio-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}

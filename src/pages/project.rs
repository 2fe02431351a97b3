use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::parallax::Parallax;
use crate::components::reveal::Reveal;
use crate::content::{find_project, neighbours, Project};
use crate::motion::scroll_to_top;
use crate::{section_href, Route};

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: String,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        props.id.clone(),
    );

    let Some(project) = find_project(&props.id) else {
        log::warn!("Unknown project id {}", props.id);
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    html! {
        <article class="project-detail">
            <header class="section project-header">
                <Reveal>
                    <a href={section_href("work")} class="project-back">{"← All work"}</a>
                    <p class="eyebrow">{format!("{} · {}", project.category, project.year)}</p>
                    <h1 class="project-title">{project.title}</h1>
                    <p class="project-client">{format!("for {}", project.client)}</p>
                </Reveal>
            </header>
            <div class="project-cover">
                <Parallax speed={120.0}>
                    <div
                        class="project-cover-art"
                        style={format!("background: radial-gradient(circle at 30% 40%, {}, #0b0b0f 70%);", project.accent)}
                    />
                </Parallax>
            </div>
            <section class="section project-body">
                <Reveal class="project-facts">
                    <h3>{"Services"}</h3>
                    <ul>
                        { for project.services.iter().map(|service| html! { <li key={*service}>{*service}</li> }) }
                    </ul>
                    <h3>{"Tags"}</h3>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span key={*tag} class="project-tag">{*tag}</span> }) }
                    </div>
                </Reveal>
                <div class="project-story">
                    { for project.description.iter().enumerate().map(|(index, paragraph)| html! {
                        <Reveal key={index} delay={index as u32 * 100}>
                            <p>{*paragraph}</p>
                        </Reveal>
                    }) }
                </div>
            </section>
            <section class="section project-results">
                { for project.results.iter().enumerate().map(|(index, (figure, label))| html! {
                    <Reveal key={*label} class="project-result" delay={index as u32 * 120}>
                        <span class="project-result-figure">{*figure}</span>
                        <span class="project-result-label">{*label}</span>
                    </Reveal>
                }) }
            </section>
            { neighbour_links(project) }
            <style>
                {r#"
                    .project-header { padding-top: 10rem; }
                    .project-back {
                        display: inline-block;
                        margin-bottom: 2rem;
                        color: #888;
                        text-decoration: none;
                    }
                    .project-back:hover { color: #fff; }
                    .project-title {
                        font-size: clamp(3rem, 9vw, 7rem);
                        letter-spacing: -0.04em;
                        margin: 0.5rem 0;
                    }
                    .project-client { color: #999; font-size: 1.2rem; }
                    .project-cover {
                        height: 70vh;
                        overflow: hidden;
                        margin: 0 2rem;
                        border-radius: 28px;
                    }
                    .project-cover-art { height: 90vh; }
                    .project-body {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 4rem;
                    }
                    .project-facts h3 {
                        color: #888;
                        font-size: 0.85rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .project-facts ul { list-style: none; padding: 0; line-height: 1.9; }
                    .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .project-tag {
                        padding: 0.3rem 0.8rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        font-size: 0.85rem;
                    }
                    .project-story p { font-size: 1.25rem; line-height: 1.7; color: #ccc; }
                    .project-results {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                    }
                    .project-result-figure {
                        display: block;
                        font-size: 3.5rem;
                        font-weight: 700;
                        background: linear-gradient(45deg, #fff, #a993ff);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .project-result-label { color: #888; }
                    .project-neighbours {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .project-neighbour {
                        padding: 3rem 2rem;
                        color: #fff;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .project-neighbour:hover { background: rgba(255, 255, 255, 0.03); }
                    .project-neighbour.next { text-align: right; }
                    .project-neighbour small { display: block; color: #777; margin-bottom: 0.5rem; }
                    .project-neighbour strong { font-size: 1.8rem; }
                    @media (max-width: 768px) {
                        .project-body { grid-template-columns: 1fr; gap: 2rem; }
                        .project-cover { margin: 0 1rem; height: 45vh; }
                    }
                "#}
            </style>
        </article>
    }
}

fn neighbour_links(project: &Project) -> Html {
    let Some((previous, next)) = neighbours(project.id) else {
        return html! {};
    };

    html! {
        <nav class="project-neighbours">
            <Link<Route> to={Route::Project { id: previous.id.to_string() }} classes="project-neighbour previous">
                <small>{"← Previous"}</small>
                <strong>{previous.title}</strong>
            </Link<Route>>
            <Link<Route> to={Route::Project { id: next.id.to_string() }} classes="project-neighbour next">
                <small>{"Next →"}</small>
                <strong>{next.title}</strong>
            </Link<Route>>
        </nav>
    }
}

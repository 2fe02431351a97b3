use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::PROCESS_STEPS;
use crate::motion::scroll_progress::{use_scroll_progress, Anchor, Interpolate, ScrollRange};

/// Line fills while the list's top travels from the lower third of the
/// viewport to the upper third.
const LINE_RANGE: ScrollRange = ScrollRange {
    start: Anchor::new(0.0, 0.66),
    end: Anchor::new(1.0, 0.33),
};

#[function_component(Process)]
pub fn process() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), LINE_RANGE);
    let fill = Interpolate::over((0.0, 1.0)).at(progress);

    html! {
        <section id="process" class="section process">
            <Reveal>
                <p class="eyebrow">{"How we work"}</p>
                <h2 class="section-title">{"Four steps, no surprises"}</h2>
            </Reveal>
            <div class="process-track" ref={node}>
                <div class="process-line" aria-hidden="true">
                    <div class="process-line-fill" style={format!("transform: scaleY({:.3});", fill)}></div>
                </div>
                <ol class="process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <li key={step.id} class="process-step">
                            <Reveal delay={index as u32 * 120}>
                                <span class="process-number">{step.number}</span>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </Reveal>
                        </li>
                    }) }
                </ol>
            </div>
            <style>
                {r#"
                    .process-track {
                        position: relative;
                        margin-top: 3rem;
                        padding-left: 3rem;
                    }
                    .process-steps {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .process-line {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 0.75rem;
                        width: 2px;
                        background: rgba(255, 255, 255, 0.08);
                    }
                    .process-line-fill {
                        width: 100%;
                        height: 100%;
                        background: linear-gradient(#a993ff, #7c5cff);
                        transform-origin: top;
                    }
                    .process-step {
                        padding: 1.5rem 0;
                    }
                    .process-step .reveal {
                        display: flex;
                        gap: 2rem;
                        align-items: baseline;
                    }
                    .process-number {
                        font-size: 0.9rem;
                        color: #a993ff;
                        font-variant-numeric: tabular-nums;
                    }
                    .process-step h3 {
                        font-size: 1.6rem;
                        margin: 0 0 0.5rem;
                    }
                    .process-step p {
                        color: #999;
                        max-width: 560px;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}

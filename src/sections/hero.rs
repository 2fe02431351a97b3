use yew::prelude::*;

use crate::components::magnetic::Magnetic;
use crate::components::marquee::Marquee;
use crate::components::reveal::Reveal;
use crate::content::CLIENTS;
use crate::motion::scroll_progress::{use_scroll_progress, Interpolate, ScrollRange};
use crate::section_href;

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::PIN);

    // Content drifts down, shrinks and fades as the hero scrolls away.
    let lift = Interpolate::over((0.0, 160.0)).at(progress);
    let scale = Interpolate::over((1.0, 0.92)).at(progress);
    let fade = Interpolate::new((0.0, 0.8), (1.0, 0.0)).at(progress);
    let glow_shift = Interpolate::over((0.0, -240.0)).at(progress);

    html! {
        <header id="top" class="hero" ref={node}>
            <div
                class="hero-glow"
                style={format!("transform: translate3d(0, {:.1}px, 0);", glow_shift)}
            ></div>
            <div
                class="hero-content"
                style={format!(
                    "transform: translate3d(0, {:.1}px, 0) scale({:.3}); opacity: {:.3};",
                    lift, scale, fade
                )}
            >
                <Reveal>
                    <p class="eyebrow">{"Independent creative studio"}</p>
                </Reveal>
                <Reveal delay={120}>
                    <h1 class="hero-title">
                        {"We build brands "}<em>{"people feel"}</em>{" before they read."}
                    </h1>
                </Reveal>
                <Reveal delay={240}>
                    <p class="hero-lede">
                        {"Strategy, identity, digital products and motion for companies that would rather be remembered than noticed."}
                    </p>
                </Reveal>
                <Reveal delay={360}>
                    <div class="hero-cta-group">
                        <Magnetic strength={0.35}>
                            <a href={section_href("contact")} class="button button-primary">
                                {"Start a project"}
                            </a>
                        </Magnetic>
                        <Magnetic strength={0.2}>
                            <a href={section_href("work")} class="button button-ghost">
                                {"See our work"}
                            </a>
                        </Magnetic>
                    </div>
                </Reveal>
            </div>
            <div class="hero-clients">
                <p class="hero-clients-label">{"Trusted by teams at"}</p>
                <Marquee items={CLIENTS} duration={40.0} />
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 140px 2rem 3rem;
                        overflow: hidden;
                    }
                    .hero-glow {
                        position: absolute;
                        top: -20%;
                        left: 50%;
                        width: 900px;
                        height: 900px;
                        margin-left: -450px;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(124, 92, 255, 0.35), rgba(124, 92, 255, 0) 65%);
                        filter: blur(40px);
                        z-index: -1;
                        pointer-events: none;
                    }
                    .hero-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        text-align: center;
                        transform-origin: center top;
                        will-change: transform, opacity;
                    }
                    .hero-title {
                        font-size: clamp(2.8rem, 7vw, 6rem);
                        line-height: 1.02;
                        letter-spacing: -0.03em;
                        margin: 0.5rem 0 1.5rem;
                    }
                    .hero-title em {
                        font-style: normal;
                        background: linear-gradient(45deg, #fff, #a993ff);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-lede {
                        max-width: 640px;
                        margin: 0 auto 2.5rem;
                        font-size: 1.2rem;
                        color: #a0a0a8;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-clients {
                        margin-top: 5rem;
                    }
                    .hero-clients-label {
                        text-align: center;
                        color: #666;
                        font-size: 0.85rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }
                "#}
            </style>
        </header>
    }
}

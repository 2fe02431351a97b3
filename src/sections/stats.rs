use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::reveal::Reveal;
use crate::content::STATS;
use crate::motion::counter::Easing;

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats" aria-label="Studio in numbers">
            { for STATS.iter().enumerate().map(|(index, stat)| {
                // Years tick steadily; everything else eases out.
                let easing = if stat.id == "years" { Easing::Linear } else { Easing::EaseOutQuart };
                html! {
                    <Reveal key={stat.id} class="stat" delay={index as u32 * 100}>
                        <div class="stat-value">
                            <AnimatedCounter value={stat.value} suffix={stat.suffix} {easing} />
                        </div>
                        <p class="stat-label">{stat.label}</p>
                    </Reveal>
                }
            }) }
            <style>
                {r#"
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .stat { text-align: center; }
                    .stat-value {
                        font-size: clamp(2.5rem, 5vw, 4rem);
                        font-weight: 700;
                        letter-spacing: -0.03em;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        color: #888;
                        margin-top: 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .stats { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}

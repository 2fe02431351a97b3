use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::TESTIMONIALS;
use crate::motion::visibility::RevealOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    moves: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    Go(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, moves: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Bumped by every action, including a jump to the current slide.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Previous => (self.index + self.len - 1) % self.len,
            CarouselAction::Go(index) if index < self.len => index,
            CarouselAction::Go(_) => self.index,
        };
        Self {
            index,
            moves: self.moves.wrapping_add(1),
            ..self
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    // Rotate on a timer; any manual move restarts the wait.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::TESTIMONIAL_ROTATION, move || {
                    dispatcher.dispatch(CarouselAction::Next)
                });
                move || drop(interval)
            },
            carousel.moves(),
        );
    }

    let step = |action: CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let Some(current) = TESTIMONIALS.get(carousel.index()) else {
        return html! {};
    };

    html! {
        <section id="testimonials" class="section testimonials">
            <Reveal>
                <p class="eyebrow">{"Kind words"}</p>
                <h2 class="section-title">{"Clients say it better"}</h2>
            </Reveal>
            <Reveal key={current.id} class="testimonial" options={RevealOptions::new(0.0, 0.0)}>
                <blockquote>
                    <p>{format!("“{}”", current.quote)}</p>
                    <footer>
                        <strong>{current.author}</strong>
                        <span>{format!("{}, {}", current.role, current.company)}</span>
                    </footer>
                </blockquote>
            </Reveal>
            <div class="testimonial-controls">
                <button class="testimonial-arrow" onclick={step(CarouselAction::Previous)} aria-label="Previous testimonial">{"←"}</button>
                <div class="testimonial-dots">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, item)| html! {
                        <button
                            key={item.id}
                            class={classes!("testimonial-dot", (index == carousel.index()).then_some("active"))}
                            onclick={step(CarouselAction::Go(index))}
                            aria-label={format!("Show testimonial from {}", item.author)}
                        ></button>
                    }) }
                </div>
                <button class="testimonial-arrow" onclick={step(CarouselAction::Next)} aria-label="Next testimonial">{"→"}</button>
            </div>
            <style>
                {r#"
                    .testimonial {
                        max-width: 860px;
                        margin: 3rem auto 0;
                        text-align: center;
                    }
                    .testimonial blockquote { margin: 0; }
                    .testimonial blockquote p {
                        font-size: clamp(1.5rem, 3vw, 2.2rem);
                        line-height: 1.3;
                        letter-spacing: -0.01em;
                    }
                    .testimonial footer {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        margin-top: 1.5rem;
                        color: #888;
                    }
                    .testimonial footer strong { color: #fff; }
                    .testimonial-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 2.5rem;
                    }
                    .testimonial-arrow {
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .testimonial-dots { display: flex; gap: 0.5rem; }
                    .testimonial-dot {
                        width: 8px;
                        height: 8px;
                        padding: 0;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .testimonial-dot.active {
                        background: #a993ff;
                        transform: scale(1.4);
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.apply(CarouselAction::Previous).index(), 2);

        let last = carousel
            .apply(CarouselAction::Next)
            .apply(CarouselAction::Next);
        assert_eq!(last.index(), 2);
        assert_eq!(last.apply(CarouselAction::Next).index(), 0);
    }

    #[test]
    fn go_ignores_out_of_range() {
        let carousel = Carousel::new(4).apply(CarouselAction::Go(3));
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.apply(CarouselAction::Go(9)).index(), 3);
    }

    #[test]
    fn picking_the_current_slide_still_counts_as_a_move() {
        let carousel = Carousel::new(3);
        let picked = carousel.apply(CarouselAction::Go(0));
        assert_eq!(picked.index(), carousel.index());
        assert_ne!(picked.moves(), carousel.moves());
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        for action in [CarouselAction::Next, CarouselAction::Previous, CarouselAction::Go(0)] {
            assert_eq!(carousel.apply(action).index(), 0);
        }
    }
}

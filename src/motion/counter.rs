use yew::prelude::*;

use super::frame::{now_ms, FrameLoop};
use super::MotionPhase;

pub const DEFAULT_COUNT_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Maps linear time `t` in `[0, 1]` onto eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// A count from zero up to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub target: u64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_COUNT_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.duration_ms.is_nan() || self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }

    /// Displayed value `elapsed_ms` after the count started.
    ///
    /// Intermediate values are floored so the display never runs ahead; the
    /// final value is `target` itself rather than a float round trip.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if self.is_complete(elapsed_ms) {
            return self.target;
        }
        let t = (elapsed_ms / self.duration_ms).max(0.0);
        let raw = self.easing.apply(t) * self.target as f64;
        (raw.floor() as u64).min(self.target)
    }

    pub fn phase_at(&self, elapsed_ms: f64) -> MotionPhase {
        if self.is_complete(elapsed_ms) {
            MotionPhase::Settled
        } else {
            MotionPhase::Animating
        }
    }
}

pub fn label(value: u64, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

/// What a counter shows and where it is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CountDisplay {
    pub value: u64,
    pub phase: MotionPhase,
}

impl CountDisplay {
    /// Begins running `count`. A counter that already settled never counts
    /// again: it shows the new target at once and stays settled.
    pub fn start(self, count: &CountUp) -> Self {
        if self.phase == MotionPhase::Settled {
            return Self {
                value: count.target,
                phase: MotionPhase::Settled,
            };
        }
        Self {
            value: 0,
            phase: self.phase.advance(MotionPhase::Animating),
        }
    }

    pub fn tick(self, count: &CountUp, elapsed_ms: f64) -> Self {
        if self.phase == MotionPhase::Settled {
            return self;
        }
        Self {
            value: count.value_at(elapsed_ms),
            phase: self.phase.advance(count.phase_at(elapsed_ms)),
        }
    }
}

/// Runs `count` once `trigger` turns true and reports what is on screen.
///
/// The running loop is cancelled on unmount and whenever `count` changes.
#[hook]
pub fn use_count_up(count: CountUp, trigger: bool) -> CountDisplay {
    let shown = use_state_eq(CountDisplay::default);
    let current = use_mut_ref(CountDisplay::default);
    let frame = use_state(FrameLoop::default);

    {
        let shown = shown.clone();
        let frame = (*frame).clone();
        use_effect_with_deps(
            move |(count, trigger)| {
                if *trigger {
                    let count = *count;
                    let started = now_ms();
                    let display = current.borrow().start(&count);
                    *current.borrow_mut() = display;
                    shown.set(display);
                    if display.phase != MotionPhase::Settled {
                        frame.restart(move |now| {
                            let display = current.borrow().tick(&count, now - started);
                            *current.borrow_mut() = display;
                            shown.set(display);
                            display.phase != MotionPhase::Settled
                        });
                    }
                }
                move || frame.stop()
            },
            (count, trigger),
        );
    }

    *shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn easings_start_and_end_on_the_ends() {
        for easing in [Easing::Linear, Easing::EaseOutQuart] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_out_quart_front_loads_progress() {
        assert!(Easing::EaseOutQuart.apply(0.25) > Easing::Linear.apply(0.25));
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn stats_counter_reads_fifty_plus_when_done() {
        let count = CountUp::new(50);
        assert_eq!(count.value_at(0.0), 0);
        let done = count.value_at(count.duration_ms);
        assert_eq!(label(done, "+"), "50+");
    }

    #[test]
    fn values_never_decrease() {
        let count = CountUp::new(1234).with_easing(Easing::EaseOutQuart);
        let mut last = 0;
        for step in 0..=125 {
            let value = count.value_at(step as f64 * 16.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1234);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let count = CountUp::new(98).with_duration(0.0);
        assert_eq!(count.value_at(0.0), 98);
        assert_eq!(count.phase_at(0.0), MotionPhase::Settled);
    }

    #[test]
    fn phase_follows_elapsed_time() {
        let count = CountUp::new(12).with_duration(1500.0);
        assert_eq!(count.phase_at(10.0), MotionPhase::Animating);
        assert_eq!(count.phase_at(1500.0), MotionPhase::Settled);
    }

    #[test]
    fn display_walks_pending_animating_settled() {
        let count = CountUp::new(40).with_duration(1000.0);
        let display = CountDisplay::default();
        assert_eq!(display.phase, MotionPhase::Pending);

        let display = display.start(&count);
        assert_eq!(display, CountDisplay { value: 0, phase: MotionPhase::Animating });

        let display = display.tick(&count, 500.0);
        assert_eq!(display.phase, MotionPhase::Animating);

        let display = display.tick(&count, 1000.0);
        assert_eq!(display, CountDisplay { value: 40, phase: MotionPhase::Settled });
    }

    #[test]
    fn settled_counter_never_moves_back_to_animating() {
        let settled = CountDisplay::default()
            .start(&CountUp::new(12))
            .tick(&CountUp::new(12), DEFAULT_COUNT_DURATION_MS);
        assert_eq!(settled.phase, MotionPhase::Settled);

        let retargeted = settled.start(&CountUp::new(30));
        assert_eq!(retargeted, CountDisplay { value: 30, phase: MotionPhase::Settled });
        assert_eq!(retargeted.tick(&CountUp::new(30), 0.0), retargeted);
    }

    #[test]
    fn frames_within_one_integer_give_equal_displays() {
        let count = CountUp::new(3).with_easing(Easing::Linear).with_duration(2000.0);
        let running = CountDisplay::default().start(&count);
        assert_eq!(running.tick(&count, 16.0), running.tick(&count, 32.0));
        assert_eq!(running.tick(&count, 16.0), running);
    }

    proptest! {
        #[test]
        fn terminal_value_is_exact(
            target in any::<u64>(),
            duration in 1.0f64..5_000.0,
            overshoot in 0.0f64..10_000.0,
            linear in any::<bool>(),
        ) {
            let easing = if linear { Easing::Linear } else { Easing::EaseOutQuart };
            let count = CountUp::new(target).with_duration(duration).with_easing(easing);
            prop_assert_eq!(count.value_at(duration + overshoot), target);
        }

        #[test]
        fn intermediate_values_stay_in_range(
            target in 0u64..10_000_000,
            elapsed in -100.0f64..2_000.0,
        ) {
            let value = CountUp::new(target).value_at(elapsed);
            prop_assert!(value <= target);
        }
    }
}

//! Damped spring used to smooth pointer-driven offsets.

/// Largest integration step, in seconds. Frames longer than this are split.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Longest frame we integrate at all. A tab coming back from the background
/// should not fling the element.
const MAX_FRAME: f64 = 0.064;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping: 15.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Once within the rest tolerances the spring
    /// snaps onto its target so the resting value is exact.
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() || dt.is_nan() || dt <= 0.0 {
            return;
        }
        let mut remaining = dt.min(MAX_FRAME);
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let mass = mass.max(f64::EPSILON);

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Two independent springs sharing one configuration.
#[derive(Clone, Debug)]
pub struct Spring2D {
    x: Spring,
    y: Spring,
}

impl Spring2D {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
        }
    }

    pub fn set_target(&mut self, (x, y): (f64, f64)) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt: f64) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn value(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

impl Default for Spring2D {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &mut Spring2D, seconds: f64) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn new_spring_is_at_rest() {
        let spring = Spring2D::default();
        assert!(spring.is_settled());
        assert_eq!(spring.value(), (0.0, 0.0));
    }

    #[test]
    fn moves_towards_target() {
        let mut spring = Spring2D::default();
        spring.set_target((30.0, -12.0));
        run(&mut spring, 0.1);
        let (x, y) = spring.value();
        assert!(x > 0.0 && y < 0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut spring = Spring2D::default();
        spring.set_target((24.5, 8.25));
        run(&mut spring, 3.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), (24.5, 8.25));
    }

    #[test]
    fn returns_to_origin_after_repeated_cycles() {
        let mut spring = Spring2D::default();
        let pulls = [(40.0, 10.0), (-25.0, 33.0), (3.0, -60.0), (0.5, 0.5)];
        for pull in pulls {
            spring.set_target(pull);
            run(&mut spring, 0.15);
            spring.set_target((0.0, 0.0));
            run(&mut spring, 3.0);
            assert_eq!(spring.value(), (0.0, 0.0));
            assert!(spring.is_settled());
        }
    }

    #[test]
    fn long_frames_stay_stable() {
        let mut spring = Spring2D::default();
        spring.set_target((100.0, 100.0));
        for _ in 0..200 {
            spring.step(1.5);
        }
        let (x, y) = spring.value();
        assert!(x.is_finite() && y.is_finite());
        assert_eq!(spring.value(), (100.0, 100.0));
    }

    #[test]
    fn ignores_non_positive_steps() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(10.0);
        spring.step(0.0);
        spring.step(-1.0);
        spring.step(f64::NAN);
        assert_eq!(spring.value(), 0.0);
    }
}

//! Scroll and pointer driven motion primitives.
//!
//! Every primitive is a plain state type that can be stepped and inspected
//! without a browser, plus a thin hook or component feeding it from the DOM.

pub mod counter;
pub mod frame;
pub mod scroll_progress;
pub mod spring;
pub mod visibility;

/// Lifecycle shared by the reveal-driven animations.
///
/// Transitions only move forward: a settled animation never goes back to
/// pending, even if its trigger fires again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Pending,
    Animating,
    Settled,
}

impl MotionPhase {
    pub fn advance(self, next: MotionPhase) -> MotionPhase {
        if next.rank() > self.rank() {
            next
        } else {
            self
        }
    }

    fn rank(self) -> u8 {
        match self {
            MotionPhase::Pending => 0,
            MotionPhase::Animating => 1,
            MotionPhase::Settled => 2,
        }
    }
}

/// Current viewport height in CSS pixels, if a window is available.
pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::MotionPhase;

    #[test]
    fn phase_never_moves_backwards() {
        let phase = MotionPhase::Pending.advance(MotionPhase::Animating);
        assert_eq!(phase, MotionPhase::Animating);

        let phase = phase.advance(MotionPhase::Settled);
        assert_eq!(phase, MotionPhase::Settled);

        assert_eq!(phase.advance(MotionPhase::Pending), MotionPhase::Settled);
        assert_eq!(phase.advance(MotionPhase::Animating), MotionPhase::Settled);
    }
}

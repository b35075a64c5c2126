//! Frame counter for tick-driven icon animations

use std::time::Duration;

/// Cyclic animation phase plus the time accumulated towards the next frame.
///
/// Frames are numbered `1..=frames`; advancing past the last frame wraps to
/// 1, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    frame: u32,
    frames: u32,
    elapsed: Duration,
}

impl AnimationState {
    pub fn new(frames: u32) -> Self {
        Self {
            frame: 1,
            frames: frames.max(1),
            elapsed: Duration::ZERO,
        }
    }

    /// Current frame, always in `1..=frames`
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Time accumulated since the last frame change
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Add `step` to the timer. Once the timer exceeds `period` the frame
    /// advances by one and the timer restarts from zero. Returns whether the
    /// frame changed.
    pub fn advance(&mut self, step: Duration, period: Duration) -> bool {
        self.elapsed += step;
        if self.elapsed <= period {
            return false;
        }

        self.frame = if self.frame >= self.frames {
            1
        } else {
            self.frame + 1
        };
        self.elapsed = Duration::ZERO;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(500);

    #[test]
    fn test_starts_at_first_frame() {
        let state = AnimationState::new(4);
        assert_eq!(state.frame(), 1);
        assert_eq!(state.elapsed(), Duration::ZERO);
        assert_eq!(AnimationState::new(0).frames(), 1);
    }

    #[test]
    fn test_advances_only_after_period_exceeded() {
        let mut state = AnimationState::new(4);
        assert!(!state.advance(PERIOD, PERIOD));
        assert_eq!(state.frame(), 1);
        assert_eq!(state.elapsed(), PERIOD);

        assert!(state.advance(PERIOD, PERIOD));
        assert_eq!(state.frame(), 2);
        assert_eq!(state.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_wraps_to_one_never_zero() {
        let mut state = AnimationState::new(4);
        let mut seen = Vec::new();
        for _ in 0..40 {
            state.advance(PERIOD, PERIOD);
            assert!((1..=4).contains(&state.frame()));
            seen.push(state.frame());
        }
        assert!(seen.contains(&4));
        assert!(!seen.contains(&0));
    }
}

//! Bounded progress counter for a study session.
//!
//! Tracks how many cards have been passed out of a fixed total and exposes the
//! fraction the progress bar renders. The counter is clamped to `[0, total]`
//! no matter how often it is advanced or retreated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudyProgress {
    count: usize,
    total: usize,
}

impl StudyProgress {
    pub fn new(total: usize) -> Self {
        Self { count: 0, total }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Moves forward one card, saturating at `total`.
    pub fn advance(&mut self) {
        if self.count < self.total {
            self.count += 1;
        }
    }

    /// Moves back one card, saturating at 0.
    pub fn retreat(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Completed fraction in `0.0..=1.0`, the progress bar's target value.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.count == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_saturates_at_total() {
        let mut progress = StudyProgress::new(3);
        for _ in 0..10 {
            progress.advance();
        }
        assert_eq!(progress.count(), 3);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_retreat_saturates_at_zero() {
        let mut progress = StudyProgress::new(3);
        progress.advance();
        for _ in 0..10 {
            progress.retreat();
        }
        assert_eq!(progress.count(), 0);
    }

    #[test]
    fn test_fraction_tracks_count() {
        let mut progress = StudyProgress::new(4);
        assert_eq!(progress.fraction(), 0.0);

        progress.advance();
        assert_eq!(progress.fraction(), 0.25);

        progress.advance();
        progress.advance();
        progress.advance();
        assert_eq!(progress.fraction(), 1.0);
    }

    #[test]
    fn test_zero_total_is_complete_with_zero_fraction() {
        let progress = StudyProgress::new(0);
        assert_eq!(progress.fraction(), 0.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_interleaved_moves_stay_in_bounds() {
        let mut progress = StudyProgress::new(2);
        progress.retreat();
        progress.advance();
        progress.advance();
        progress.advance();
        progress.retreat();
        assert_eq!(progress.count(), 1);
    }
}

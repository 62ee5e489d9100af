//! Frame-based scheduling of generation steps

/// Decides on which frames a generation step runs.
///
/// A step fires every `period` frames, and only once the start trigger has
/// been seen. Before the trigger the frame counter still advances, so the
/// first step lands on the next period boundary after starting, while the
/// grid stays frozen at its seeded state.
#[derive(Debug)]
pub struct StepScheduler {
    period: u32,
    frame: u32,
    started: bool,
}

impl StepScheduler {
    pub fn new(period: u32) -> Self {
        assert!(period > 0, "period must be positive");
        Self {
            period,
            frame: 0,
            started: false,
        }
    }

    /// Latch the start trigger
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Advance one frame; returns whether a generation step is due
    pub fn tick(&mut self) -> bool {
        self.frame = (self.frame + 1) % self.period;
        self.started && self.frame == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_steps_before_start() {
        let mut scheduler = StepScheduler::new(3);
        for _ in 0..20 {
            assert!(!scheduler.tick());
        }
    }

    #[test]
    fn test_steps_every_period_after_start() {
        let mut scheduler = StepScheduler::new(3);
        scheduler.start();
        let fired: Vec<bool> = (0..9).map(|_| scheduler.tick()).collect();
        assert_eq!(
            fired,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_period_one_steps_every_frame() {
        let mut scheduler = StepScheduler::new(1);
        scheduler.start();
        assert!(scheduler.tick());
        assert!(scheduler.tick());
    }

    #[test]
    fn test_start_is_latched() {
        let mut scheduler = StepScheduler::new(2);
        assert!(!scheduler.is_started());
        scheduler.start();
        scheduler.start();
        assert!(scheduler.is_started());
        assert_eq!((0..4).filter(|_| scheduler.tick()).count(), 2);
    }

    #[test]
    #[should_panic(expected = "period must be positive")]
    fn test_zero_period_panics() {
        StepScheduler::new(0);
    }
}

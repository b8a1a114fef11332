use stopwatch_core::{LapLedger, Stopwatch};

/// The stopwatch screen state: one timer plus its lap ledger.
pub struct StopwatchState {
    pub timer: Stopwatch,
    pub laps: LapLedger,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self {
            timer: Stopwatch::new(),
            laps: LapLedger::new(),
        }
    }

    /// Snapshot the current elapsed time into the lap ledger.
    /// Ignored unless the timer is running with time on the clock.
    pub fn record_lap(&mut self) {
        if self.timer.is_running() && !self.timer.elapsed().is_zero() {
            self.laps.record(self.timer.elapsed());
        }
    }

    /// Stop the timer, zero the clock, and drop all recorded laps.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.laps.clear();
    }
}

//! Timing
//!
//! Wall-clock measurement on the monotonic clock. No attempt is made to
//! isolate CPU time: whatever else the machine does while a test runs shows
//! up in the measurement.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Timer for measuring a batch of iterations
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since the timer started
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Run `f` against `input` exactly `iterations` times and return the elapsed time.
///
/// Outputs are discarded through [`black_box`] so the optimizer cannot elide the calls.
#[inline]
pub fn time_iterations<I, O, F>(f: F, input: &I, iterations: u64) -> Duration
where
    I: ?Sized,
    F: Fn(&I) -> O,
{
    let timer = Timer::start();
    for _ in 0..iterations {
        black_box(f(black_box(input)));
    }
    timer.stop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        // Should be at least 5ms
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_time_iterations_runs_exact_count() {
        use std::cell::Cell;

        let calls = Cell::new(0u64);
        let elapsed = time_iterations(
            |x: &u64| {
                calls.set(calls.get() + 1);
                x + 1
            },
            &41,
            250,
        );
        assert_eq!(calls.get(), 250);
        assert!(elapsed > Duration::ZERO);
    }
}

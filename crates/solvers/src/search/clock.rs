use std::time::{Duration, Instant};

/// Accumulates wall-clock time over the periods it is running.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    /// Stops the watch and zeroes the accumulated time.
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Starts a timing period. Does nothing if already running.
    pub(super) fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Ends the current timing period, adding it to the total.
    pub(super) fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Returns the accumulated time, including the current period.
    pub(super) fn elapsed(&self) -> Duration {
        self.accumulated + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_watch_does_not_advance() {
        let mut watch = Stopwatch::default();
        watch.resume();
        watch.pause();
        let frozen = watch.elapsed();

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(watch.elapsed(), frozen);
    }

    #[test]
    fn accumulates_across_periods() {
        let mut watch = Stopwatch::default();

        watch.resume();
        std::thread::sleep(Duration::from_millis(2));
        watch.pause();
        let first = watch.elapsed();

        watch.resume();
        std::thread::sleep(Duration::from_millis(2));
        watch.pause();

        assert!(first >= Duration::from_millis(2));
        assert!(watch.elapsed() >= first + Duration::from_millis(2));
    }

    #[test]
    fn reset_zeroes_and_stops() {
        let mut watch = Stopwatch::default();
        watch.resume();
        std::thread::sleep(Duration::from_millis(1));
        watch.reset();

        assert_eq!(watch.elapsed(), Duration::ZERO);
    }
}

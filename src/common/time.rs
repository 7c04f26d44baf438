use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock that starts at a fixed instant and moves forward by `step` on every read.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicU64,
    step: u64,
}

impl ManualClock {
    pub fn new(start_millis: u64, step: Duration) -> Self {
        Self {
            millis: AtomicU64::new(start_millis),
            step: step.as_millis() as u64,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        let millis = self.millis.fetch_add(self.step, Ordering::SeqCst);
        UNIX_EPOCH + Duration::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_per_read() {
        let clock = ManualClock::new(1_000, Duration::from_millis(5));
        let first = clock.now();
        let second = clock.now();
        assert_eq!(second.duration_since(first).unwrap(), Duration::from_millis(5));
    }
}

// ABOUTME: Cancellable repeating timer driven by an injectable clock
// The event loop polls the timer for due ticks; tests swap in a manual clock

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.offset_nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + Duration::from_nanos(self.offset_nanos.load(Ordering::SeqCst))
    }
}

/// Shortest interval the timer accepts
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-interval repeating task. Owners poll `due_ticks` and run one step per tick.
#[derive(Debug)]
pub struct RepeatingTimer<C: Clock> {
    clock: C,
    interval: Duration,
    next_due: Option<Instant>,
}

impl<C: Clock> RepeatingTimer<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            interval: interval.max(MIN_INTERVAL),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking one interval from now. No effect if already running.
    pub fn start(&mut self) {
        if self.next_due.is_none() {
            self.next_due = Some(self.clock.now() + self.interval);
            debug!("Timer started with interval {:?}", self.interval);
        }
    }

    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            debug!("Timer stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of intervals elapsed since the last poll. Always 0 when stopped.
    pub fn due_ticks(&mut self) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };

        let now = self.clock.now();
        if now < due {
            return 0;
        }

        let overdue = now.duration_since(due).as_nanos();
        let count = overdue / self.interval.as_nanos() + 1;
        let count = u32::try_from(count).unwrap_or(u32::MAX);

        self.next_due = Some(due + self.interval * count);
        count
    }
}

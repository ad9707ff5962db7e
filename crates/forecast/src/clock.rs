//! Injected time source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use kurs_types::TradingDate;

const NANOS_PER_DAY: u64 = 86_400_000_000_000;

/// Zeitquelle der Caches. Produktion nutzt [`SystemClock`]; Tests
/// steuern die Zeit über [`ManualClock`], statt auf Wanduhr- oder
/// Tagesgrenzen-Zufälle zu bauen.
pub trait Clock: Send + Sync {
    /// Nanoseconds since the Unix epoch (UTC).
    fn now_ns(&self) -> u64;
}

/// Wall-clock reading from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// Manually advanced clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ns: AtomicU64,
}

impl ManualClock {
    /// Clock frozen at the given instant.
    #[must_use]
    pub fn new(now_ns: u64) -> Self {
        Self {
            now_ns: AtomicU64::new(now_ns),
        }
    }

    /// Clock frozen at midnight (UTC) of the given date.
    #[must_use]
    pub fn at_date(date: TradingDate) -> Self {
        let days = u64::try_from(date.to_days()).unwrap_or(0);
        Self::new(days * NANOS_PER_DAY)
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let ns = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.now_ns.fetch_add(ns, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now_ns.load(Ordering::SeqCst)
    }
}

impl<C: Clock> Clock for &C {
    fn now_ns(&self) -> u64 {
        (*self).now_ns()
    }
}

/// Calendar day (UTC) containing the given instant.
#[must_use]
pub fn date_of_ns(now_ns: u64) -> TradingDate {
    let days = i64::try_from(now_ns / NANOS_PER_DAY).unwrap_or(0);
    TradingDate::from_days(days)
}

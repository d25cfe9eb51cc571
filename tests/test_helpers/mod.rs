//! Shared helpers for integration tests.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock with an externally settable instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Moves the clock to a later instant.
    pub fn advance_to(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.write() {
            *guard = now;
        }
    }

    fn read(&self) -> DateTime<Utc> {
        self.now.read().map(|guard| *guard).unwrap_or_default()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.read().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.read()
    }
}

/// Builds a UTC timestamp for test data.
#[must_use]
pub fn timestamp(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid timestamp")
}

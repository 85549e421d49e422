//! Shared test doubles.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{Task, TaskId, TaskTitle};

/// Clock whose reading only moves when a test advances it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => panic!("failed to convert {delta:?} to TimeDelta: {error}"),
        };
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn mutable_clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::new(fixture_timestamp()))
}

pub fn task(id: u64, title: &str, completed: bool) -> Task {
    Task {
        id: TaskId::new(id).expect("valid id"),
        title: TaskTitle::new(title).expect("valid title"),
        description: String::new(),
        completed,
        created_at: fixture_timestamp(),
    }
}

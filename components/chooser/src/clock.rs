//! Source of "now" for the chooser.

use core::{cell::Cell, fmt::Debug};
use std::rc::Rc;

use time::{Duration, OffsetDateTime};

/// Supplies the current moment.
pub trait Clock: Debug {
    /// Returns the current moment.
    fn now(&self) -> OffsetDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

/// The system clock in the local time zone, or UTC when the local offset
/// cannot be determined.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// A clock that only moves when told to.
///
/// Share it through an [`Rc`] to advance time after handing it to a chooser.
#[derive(Debug, Clone)]
pub struct ManualClock(Cell<OffsetDateTime>);

impl ManualClock {
    /// Creates a clock stopped at `now`.
    #[must_use]
    pub const fn new(now: OffsetDateTime) -> Self {
        Self(Cell::new(now))
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: OffsetDateTime) {
        self.0.set(now);
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        self.0.get()
    }
}

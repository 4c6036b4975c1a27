use std::time::{Duration, Instant};

/// A source of the remaining time budget, in milliseconds.
///
/// The search treats this as authoritative and never reads a clock of its own. Any `Fn() -> f64` qualifies, so a
/// test can pass `&|| 2000.0` for a budget that never runs out.
pub trait TimeLeft
{
    fn time_left(&self) -> f64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> f64,
{
    fn time_left(&self) -> f64
    {
        self()
    }
}

#[derive(Clone, Copy, Debug)]
/// A wall-clock budget that starts running on construction.
pub struct Deadline
{
    start: Instant,
    limit: Duration,
}

impl Deadline
{
    /// How long has passed since the deadline was set.
    pub fn elapsed(&self) -> Duration
    {
        self.start.elapsed()
    }

    /// Whether the budget has been overrun.
    pub fn expired(&self) -> bool
    {
        self.elapsed() > self.limit
    }

    /// Starts a new deadline that expires after the given duration.
    pub fn new(limit: Duration) -> Deadline
    {
        Deadline {
            start: Instant::now(),
            limit,
        }
    }
}

impl TimeLeft for Deadline
{
    fn time_left(&self) -> f64
    {
        // Goes negative once the deadline has passed.
        (self.limit.as_secs_f64() - self.elapsed().as_secs_f64()) * 1000.0
    }
}

//! Interval-driven metric feeds
//!
//! A [`Subscription`] owns its feed and its random source. Dropping the
//! subscription is the cancellation: there is no timer left behind that
//! could write into a panel that no longer exists.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Most snapshots a single `poll` emits after a long gap
const MAX_CATCH_UP: usize = 8;

/// A source of periodically jittered metrics
pub trait MetricFeed {
    type Snapshot: Clone;

    /// Step the simulation once and return the new state
    fn advance(&mut self, rng: &mut dyn RngCore) -> Self::Snapshot;

    /// Current state without stepping
    fn snapshot(&self) -> Self::Snapshot;
}

/// A feed ticking at a fixed interval
#[derive(Debug)]
pub struct Subscription<F: MetricFeed> {
    feed: F,
    interval_ms: f64,
    next_due_ms: f64,
    rng: StdRng,
}

/// Start ticking `feed` every `interval_ms`, first tick one interval after
/// `now_ms`. `seed` fixes the jitter sequence.
pub fn subscribe<F: MetricFeed>(
    feed: F,
    interval_ms: f64,
    now_ms: f64,
    seed: u64,
) -> Subscription<F> {
    let interval_ms = interval_ms.max(1.0);
    Subscription {
        feed,
        interval_ms,
        next_due_ms: now_ms + interval_ms,
        rng: StdRng::seed_from_u64(seed),
    }
}

impl<F: MetricFeed> Subscription<F> {
    /// Emit one snapshot per interval that has elapsed since the last poll.
    ///
    /// After a long gap at most `MAX_CATCH_UP` snapshots are produced and
    /// the schedule restarts from `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> Vec<F::Snapshot> {
        let mut out = Vec::new();
        while now_ms >= self.next_due_ms && out.len() < MAX_CATCH_UP {
            out.push(self.feed.advance(&mut self.rng));
            self.next_due_ms += self.interval_ms;
        }
        if now_ms >= self.next_due_ms {
            self.next_due_ms = now_ms + self.interval_ms;
        }
        out
    }

    pub fn latest(&self) -> F::Snapshot {
        self.feed.snapshot()
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Panel interaction that does not step the simulation, such as a
    /// selection change
    pub fn feed_mut(&mut self) -> &mut F {
        &mut self.feed
    }
}

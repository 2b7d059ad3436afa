// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollgauge_throttle --heading-base-level=0

//! Scrollgauge Throttle: a time-windowed call gate with leading and trailing
//! edges.
//!
//! [`Throttle`] collapses bursts of calls so that at most one execution
//! happens per window on average, while guaranteeing that the final call in
//! any burst is eventually reflected. The first call after an idle period
//! executes immediately (the *leading* edge); calls arriving inside the
//! window are suppressed, with the most recent one remembered and executed
//! exactly once when the window elapses (the *trailing* edge). At most one
//! trailing execution is ever pending; later suppressed calls supersede it
//! rather than queueing.
//!
//! The throttle never runs anything itself and never looks at a clock. Time
//! is injected as `u64` millisecond timestamps, and scheduling crosses the
//! boundary as an absolute deadline the caller arms a timer for:
//!
//! - [`Throttle::on_call`] classifies a call as [`ThrottleDecision::Run`]
//!   (execute now), [`ThrottleDecision::Schedule`] (arm a timer for the
//!   returned deadline), or [`ThrottleDecision::Coalesce`] (a timer is
//!   already armed; nothing to do).
//! - [`Throttle::on_deadline`] is called when the timer fires and reports
//!   whether the trailing execution should happen.
//! - [`Throttle::cancel`] clears the pending deadline on teardown and
//!   returns it so the caller can disarm its timer. An uncancelled timer is
//!   a resource leak on the caller's side, not a correctness hazard here:
//!   a stale fire reports `false`.
//!
//! This keeps the state machine deterministic and directly testable, with
//! no callback registration and no captured timer variables.
//!
//! ## Example
//!
//! A burst of three calls inside a 50 ms window produces a leading run, one
//! scheduled trailing run, and nothing else:
//!
//! ```rust
//! use scrollgauge_throttle::{Throttle, ThrottleDecision};
//!
//! let mut throttle = Throttle::new(50);
//!
//! assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
//! assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(50));
//! assert_eq!(throttle.on_call(20), ThrottleDecision::Coalesce(50));
//!
//! // The caller's timer fires at the deadline: run the trailing call.
//! assert!(throttle.on_deadline(50));
//! // The window restarts from the trailing run.
//! assert_eq!(throttle.on_call(60), ThrottleDecision::Schedule(100));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// What the caller should do with a call that just arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Execute the action immediately (leading edge). The window restarts
    /// from this call.
    Run,
    /// The call was suppressed and a trailing execution is now pending: arm
    /// a timer for the contained deadline and call
    /// [`Throttle::on_deadline`] when it fires.
    Schedule(u64),
    /// The call was suppressed and a trailing execution was already pending
    /// at the contained deadline. The new call's intent supersedes the old
    /// one; no additional timer is needed.
    Coalesce(u64),
}

/// Leading+trailing throttle state, driven entirely by injected timestamps.
///
/// All timestamps are milliseconds on a single monotone caller-chosen
/// clock. A timestamp earlier than the previous execution is treated as an
/// expired window, so a clock regression degrades to an extra immediate run
/// rather than a stall.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: u64,
    /// Time of the most recent execution, leading or trailing.
    last_run: Option<u64>,
    /// Deadline of the pending trailing execution, if any.
    deadline: Option<u64>,
}

impl Throttle {
    /// Creates a throttle with the given window in milliseconds.
    ///
    /// A zero window admits every call on the leading edge.
    #[must_use]
    pub const fn new(window: u64) -> Self {
        Self {
            window,
            last_run: None,
            deadline: None,
        }
    }

    /// The window in milliseconds.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.window
    }

    /// The deadline of the pending trailing execution, if one is scheduled.
    #[must_use]
    pub const fn pending_deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Classifies a call arriving at `now`.
    ///
    /// See [`ThrottleDecision`] for the caller's obligations.
    pub fn on_call(&mut self, now: u64) -> ThrottleDecision {
        match self.last_run {
            Some(last) if now >= last && now - last < self.window => {
                if let Some(deadline) = self.deadline {
                    ThrottleDecision::Coalesce(deadline)
                } else {
                    let deadline = last.saturating_add(self.window);
                    self.deadline = Some(deadline);
                    ThrottleDecision::Schedule(deadline)
                }
            }
            // First call, idle past the window, or the clock moved
            // backwards: take the leading edge.
            _ => {
                self.deadline = None;
                self.last_run = Some(now);
                ThrottleDecision::Run
            }
        }
    }

    /// Reports whether the trailing execution should run, for a timer that
    /// fired at `now`.
    ///
    /// Returns `true` exactly when a pending deadline was due; the window
    /// then restarts from `now`. A stale timer (cancelled, superseded by a
    /// leading run) or one that fired early returns `false` and, in the
    /// early case, leaves the deadline pending.
    pub fn on_deadline(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.last_run = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Cancels the pending trailing execution, returning its deadline so
    /// the caller can disarm the matching timer.
    pub fn cancel(&mut self) -> Option<u64> {
        self.deadline.take()
    }
}

#[cfg(test)]
mod tests {
    use super::{Throttle, ThrottleDecision};

    /// The canonical burst: window 50, calls at t = 0, 10, 20, 60, 70.
    ///
    /// Executions: leading at 0; trailing at 50 covering the 10/20 burst;
    /// the 60 call schedules a new trailing deadline at 100 which the 70
    /// call coalesces into.
    #[test]
    fn burst_collapses_to_leading_plus_trailing() {
        let mut throttle = Throttle::new(50);
        let mut executions = 0;

        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        executions += 1;

        assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(50));
        assert_eq!(throttle.on_call(20), ThrottleDecision::Coalesce(50));

        assert!(throttle.on_deadline(50));
        executions += 1;

        assert_eq!(throttle.on_call(60), ThrottleDecision::Schedule(100));
        assert_eq!(throttle.on_call(70), ThrottleDecision::Coalesce(100));

        assert!(throttle.on_deadline(100));
        executions += 1;

        assert_eq!(executions, 3);
        assert_eq!(throttle.pending_deadline(), None);
    }

    #[test]
    fn first_call_runs_immediately() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(1234), ThrottleDecision::Run);
        assert_eq!(throttle.pending_deadline(), None);
    }

    #[test]
    fn idle_past_the_window_runs_immediately() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(50), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(500), ThrottleDecision::Run);
    }

    #[test]
    fn at_most_one_pending_trailing_call() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(100));
        for t in [20, 30, 40, 99] {
            assert_eq!(throttle.on_call(t), ThrottleDecision::Coalesce(100));
        }
        assert!(throttle.on_deadline(100));
        assert!(!throttle.on_deadline(100), "only one trailing execution");
    }

    #[test]
    fn window_restarts_after_the_trailing_run() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(30), ThrottleDecision::Schedule(50));
        assert!(throttle.on_deadline(55));
        // 80 is within 50ms of the trailing run at 55.
        assert_eq!(throttle.on_call(80), ThrottleDecision::Schedule(105));
    }

    #[test]
    fn cancel_clears_and_returns_the_deadline() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(50));
        assert_eq!(throttle.cancel(), Some(50));
        assert_eq!(throttle.pending_deadline(), None);
        assert!(!throttle.on_deadline(50), "cancelled timer must not fire");
        assert_eq!(throttle.cancel(), None);
    }

    #[test]
    fn stale_timer_after_a_leading_run_does_not_fire() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(50));
        // Idle long enough that the next call takes the leading edge and
        // supersedes the scheduled trailing call.
        assert_eq!(throttle.on_call(120), ThrottleDecision::Run);
        assert!(!throttle.on_deadline(50));
    }

    #[test]
    fn early_timer_fire_keeps_the_deadline_pending() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(50));
        assert!(!throttle.on_deadline(49));
        assert_eq!(throttle.pending_deadline(), Some(50));
        assert!(throttle.on_deadline(50));
    }

    #[test]
    fn late_timer_fire_still_runs_the_trailing_call() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(0), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(10), ThrottleDecision::Schedule(50));
        assert!(throttle.on_deadline(200));
        // The window restarts from the actual fire time.
        assert_eq!(throttle.on_call(210), ThrottleDecision::Schedule(250));
    }

    #[test]
    fn clock_regression_takes_the_leading_edge() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.on_call(1000), ThrottleDecision::Run);
        assert_eq!(throttle.on_call(1010), ThrottleDecision::Schedule(1050));
        // The clock jumps backwards; degrade to an immediate run and drop
        // the now-meaningless pending deadline.
        assert_eq!(throttle.on_call(900), ThrottleDecision::Run);
        assert_eq!(throttle.pending_deadline(), None);
        assert_eq!(throttle.on_call(910), ThrottleDecision::Schedule(950));
    }

    #[test]
    fn zero_window_admits_every_call() {
        let mut throttle = Throttle::new(0);
        for t in [0, 0, 1, 2, 2] {
            assert_eq!(throttle.on_call(t), ThrottleDecision::Run);
        }
        assert_eq!(throttle.pending_deadline(), None);
    }
}

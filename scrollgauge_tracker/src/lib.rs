// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollgauge_tracker --heading-base-level=0

//! Scrollgauge Tracker: a controller tying throttled triggers to
//! scroll-state snapshots for one bound element.
//!
//! [`ScrollTracker`] owns the pieces a host binding would otherwise wire up
//! by hand: a [`Throttle`](scrollgauge_throttle::Throttle) bounding the
//! update rate, the [`MeasurementQuirks`] detected at startup, and the
//! latest [`ScrollInfo`] snapshot, which doubles as the "previous" state for
//! the next computation. The snapshot has a single writer and is replaced
//! wholesale by [`ScrollTracker::commit`]; there are no per-axis partial
//! updates, so consumers always observe internally consistent state, in
//! trigger order modulo suppression.
//!
//! ## The host-binding boundary
//!
//! The tracker is deliberately inert: it never reads a clock, arms a timer,
//! or touches an element. A host binding is expected to provide:
//!
//! - A **measurement accessor**: something that can produce a
//!   [`RawMeasurement`] for the bound element synchronously, queried fresh
//!   each time an update executes.
//! - **Trigger notifications**: "element became bound" (once — the leading
//!   edge of the throttle makes this first update immediate), "scroll
//!   occurred", and "size changed". Each one simply calls
//!   [`ScrollTracker::on_trigger`]; bursts are normal input.
//! - A **timer facility** for the trailing edge: arm a timer when
//!   `on_trigger` returns [`ThrottleDecision::Schedule`], call
//!   [`ScrollTracker::on_deadline`] when it fires, and disarm the deadline
//!   returned by [`ScrollTracker::teardown`] when the element unbinds. A
//!   timer the host fails to disarm fires stale and is ignored; the leak is
//!   the timer itself, never a computation against an unbound element.
//! - The **resize capability flag**, consumed once at binding setup via
//!   [`ResizeStrategy::choose`]: hosts without native per-element size
//!   observation substitute a coarser global resize signal, which changes
//!   only how often triggers arrive, never what is computed.
//!
//! ## Example
//!
//! A bind trigger, a scroll burst, and the trailing update:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use scrollgauge_metrics::{Axis, MeasurementQuirks, RawMeasurement};
//! use scrollgauge_tracker::{ScrollTracker, ThrottleDecision};
//!
//! let mut tracker = ScrollTracker::new(MeasurementQuirks::empty());
//! let measure = |offset_y: f64| {
//!     RawMeasurement::new(
//!         Point::new(0.0, offset_y),
//!         Size::new(800.0, 1000.0),
//!         Size::new(800.0, 600.0),
//!     )
//! };
//!
//! // Binding triggers the first update immediately (leading edge).
//! assert_eq!(tracker.on_trigger(0), ThrottleDecision::Run);
//! let info = tracker.commit(&measure(0.0));
//! assert_eq!(info.y.class_name(Axis::Vertical), "scroll-top");
//!
//! // A scroll burst inside the window coalesces into one deadline.
//! assert_eq!(tracker.on_trigger(10), ThrottleDecision::Schedule(50));
//! assert_eq!(tracker.on_trigger(30), ThrottleDecision::Coalesce(50));
//!
//! // The host's timer fires: commit one trailing update with a fresh
//! // measurement reflecting the last position.
//! assert!(tracker.on_deadline(50));
//! let info = tracker.commit(&measure(400.0));
//! assert_eq!(info.y.percentage, Some(1.0));
//! assert_eq!(info.y.class_name(Axis::Vertical), "scroll-bottom");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use scrollgauge_metrics::{MeasurementQuirks, RawMeasurement, ScrollInfo, compute_scroll_info};
use scrollgauge_throttle::Throttle;

pub use scrollgauge_throttle::ThrottleDecision;

/// Default rate-limit window between delivered updates, in milliseconds.
pub const DEFAULT_WINDOW_MS: u64 = 50;

/// How a binding should observe element size changes, chosen once at setup.
///
/// This is a capability query, not a behavior switch: the computation is
/// indifferent to where resize triggers come from. The fallback merely
/// trades precision of the trigger source for availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeStrategy {
    /// Observe the element itself through the host's native size-change
    /// observation facility.
    ElementObserver,
    /// No native facility: listen to the coarser global window resize
    /// signal instead.
    WindowFallback,
}

impl ResizeStrategy {
    /// Picks the strategy from the host's capability flag.
    #[must_use]
    pub const fn choose(native_observer_available: bool) -> Self {
        if native_observer_available {
            Self::ElementObserver
        } else {
            Self::WindowFallback
        }
    }
}

/// Scroll-state controller for a single bound element.
///
/// See the [crate docs](crate) for the full host contract. All timestamps
/// are milliseconds on one caller-chosen monotone clock.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    throttle: Throttle,
    quirks: MeasurementQuirks,
    latest: ScrollInfo,
}

impl ScrollTracker {
    /// Creates a tracker with the default window of [`DEFAULT_WINDOW_MS`].
    #[must_use]
    pub const fn new(quirks: MeasurementQuirks) -> Self {
        Self::with_window(quirks, DEFAULT_WINDOW_MS)
    }

    /// Creates a tracker with a custom rate-limit window in milliseconds.
    #[must_use]
    pub const fn with_window(quirks: MeasurementQuirks, window_ms: u64) -> Self {
        Self {
            throttle: Throttle::new(window_ms),
            quirks,
            latest: ScrollInfo::EMPTY,
        }
    }

    /// Feeds one trigger (bind, scroll, or size change) arriving at `now`
    /// into the rate limiter.
    ///
    /// On [`ThrottleDecision::Run`], measure the element and [`commit`]
    /// immediately. On [`ThrottleDecision::Schedule`], arm a timer for the
    /// returned deadline. On [`ThrottleDecision::Coalesce`], nothing to do.
    ///
    /// [`commit`]: Self::commit
    pub fn on_trigger(&mut self, now: u64) -> ThrottleDecision {
        self.throttle.on_call(now)
    }

    /// Handles the host's timer firing at `now`.
    ///
    /// Returns `true` when the trailing update should run: measure the
    /// element and [`commit`](Self::commit). Stale timers return `false`.
    pub fn on_deadline(&mut self, now: u64) -> bool {
        self.throttle.on_deadline(now)
    }

    /// Computes the next snapshot from a fresh measurement, replaces the
    /// held state wholesale, and returns it for delivery to the consumer.
    ///
    /// Call this only when [`on_trigger`](Self::on_trigger) said
    /// [`ThrottleDecision::Run`] or [`on_deadline`](Self::on_deadline)
    /// returned `true`, with a measurement taken from the still-bound
    /// element at that moment.
    pub fn commit(&mut self, raw: &RawMeasurement) -> &ScrollInfo {
        self.latest = compute_scroll_info(raw, &self.latest, self.quirks);
        &self.latest
    }

    /// Cancels any pending trailing update on unbind, returning its
    /// deadline so the host can disarm the matching timer.
    ///
    /// Already-delivered snapshots stay valid; only the not-yet-executed
    /// trailing update is dropped.
    pub fn teardown(&mut self) -> Option<u64> {
        self.throttle.cancel()
    }

    /// The most recently committed snapshot ([`ScrollInfo::EMPTY`] before
    /// the first commit).
    #[must_use]
    pub const fn latest(&self) -> &ScrollInfo {
        &self.latest
    }

    /// The rate-limit window in milliseconds.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.throttle.window()
    }

    /// The quirk set this tracker applies to every computation.
    #[must_use]
    pub const fn quirks(&self) -> MeasurementQuirks {
        self.quirks
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use scrollgauge_metrics::{Axis, MeasurementQuirks, RawMeasurement, ScrollDirection};

    use super::{DEFAULT_WINDOW_MS, ResizeStrategy, ScrollTracker, ThrottleDecision};

    fn measure(offset_y: f64) -> RawMeasurement {
        RawMeasurement::new(
            Point::new(0.0, offset_y),
            Size::new(800.0, 1000.0),
            Size::new(800.0, 600.0),
        )
    }

    #[test]
    fn bind_trigger_runs_immediately_and_initializes_state() {
        let mut tracker = ScrollTracker::new(MeasurementQuirks::empty());
        assert_eq!(tracker.latest().y.percentage, None);

        assert_eq!(tracker.on_trigger(0), ThrottleDecision::Run);
        let info = tracker.commit(&measure(0.0));
        assert_eq!(info.y.percentage, Some(0.0));
        assert_eq!(info.y.class_name(Axis::Vertical), "scroll-top");
    }

    #[test]
    fn burst_coalesces_and_the_trailing_commit_sees_the_last_position() {
        let mut tracker = ScrollTracker::new(MeasurementQuirks::empty());
        assert_eq!(tracker.on_trigger(0), ThrottleDecision::Run);
        tracker.commit(&measure(0.0));

        // Scroll events at 10/20/30 ms; only one deadline is armed.
        assert_eq!(tracker.on_trigger(10), ThrottleDecision::Schedule(50));
        assert_eq!(tracker.on_trigger(20), ThrottleDecision::Coalesce(50));
        assert_eq!(tracker.on_trigger(30), ThrottleDecision::Coalesce(50));

        assert!(tracker.on_deadline(50));
        // The measurement is queried at execution time, so the trailing
        // update reflects wherever the element ended up.
        let info = tracker.commit(&measure(200.0));
        assert_eq!(info.y.percentage, Some(0.5));
        assert_eq!(info.y.direction, ScrollDirection::TowardEnd);
    }

    #[test]
    fn commit_threads_previous_state_for_direction() {
        let mut tracker = ScrollTracker::new(MeasurementQuirks::empty());
        tracker.on_trigger(0);
        tracker.commit(&measure(100.0));
        assert_eq!(tracker.latest().y.direction, ScrollDirection::TowardEnd);

        tracker.on_trigger(100);
        tracker.commit(&measure(40.0));
        assert_eq!(tracker.latest().y.direction, ScrollDirection::TowardStart);

        tracker.on_trigger(200);
        tracker.commit(&measure(40.0));
        assert_eq!(tracker.latest().y.direction, ScrollDirection::Unchanged);
    }

    #[test]
    fn snapshot_is_replaced_wholesale() {
        let mut tracker = ScrollTracker::new(MeasurementQuirks::empty());
        tracker.on_trigger(0);
        let first = *tracker.commit(&measure(100.0));

        tracker.on_trigger(100);
        tracker.commit(&measure(300.0));
        let second = *tracker.latest();

        assert_ne!(first, second);
        // The first snapshot is untouched by the second commit.
        assert_eq!(first.y.value, 100.0);
        assert_eq!(second.y.value, 300.0);
    }

    #[test]
    fn teardown_cancels_the_pending_trailing_update() {
        let mut tracker = ScrollTracker::new(MeasurementQuirks::empty());
        assert_eq!(tracker.on_trigger(0), ThrottleDecision::Run);
        tracker.commit(&measure(0.0));
        assert_eq!(tracker.on_trigger(10), ThrottleDecision::Schedule(50));

        assert_eq!(tracker.teardown(), Some(50));
        // A timer the host failed to disarm fires stale and is ignored.
        assert!(!tracker.on_deadline(50));
        assert_eq!(tracker.teardown(), None);
    }

    #[test]
    fn quirks_are_applied_on_every_commit() {
        let mut tracker = ScrollTracker::new(MeasurementQuirks::PHANTOM_VERTICAL_OVERFLOW);
        tracker.on_trigger(0);
        let raw = RawMeasurement::new(
            Point::new(0.0, 0.0),
            Size::new(800.0, 601.0),
            Size::new(800.0, 600.0),
        );
        let info = tracker.commit(&raw);
        assert_eq!(info.y.total, 0.0);
        assert_eq!(info.y.class_name(Axis::Vertical), "no-scroll-y");
    }

    #[test]
    fn window_is_configurable_with_a_sensible_default() {
        let tracker = ScrollTracker::new(MeasurementQuirks::empty());
        assert_eq!(tracker.window(), DEFAULT_WINDOW_MS);

        let mut fast = ScrollTracker::with_window(MeasurementQuirks::empty(), 16);
        assert_eq!(fast.window(), 16);
        assert_eq!(fast.on_trigger(0), ThrottleDecision::Run);
        assert_eq!(fast.on_trigger(10), ThrottleDecision::Schedule(16));
    }

    #[test]
    fn resize_strategy_follows_the_capability_flag() {
        assert_eq!(ResizeStrategy::choose(true), ResizeStrategy::ElementObserver);
        assert_eq!(ResizeStrategy::choose(false), ResizeStrategy::WindowFallback);
    }
}

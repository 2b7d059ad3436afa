// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-state tracking over a simulated element: bind, scroll burst,
//! trailing update, resize.
//!
//! This example plays the role of the host binding: it owns a fake element,
//! a fake clock, and a one-slot "timer", and drives a
//! [`ScrollTracker`] through a burst of triggers to show how updates are
//! rate-limited while the final position always gets delivered.
//!
//! Run:
//! - `cargo run -p scrollgauge_demos --example scroll_classes`

use kurbo::{Point, Size};
use scrollgauge_metrics::{Axis, MeasurementQuirks, RawMeasurement, ScrollInfo};
use scrollgauge_tracker::{ResizeStrategy, ScrollTracker, ThrottleDecision};

/// A stand-in for a scrollable element the binding would measure.
struct SimulatedElement {
    offset: Point,
    content: Size,
    viewport: Size,
}

impl SimulatedElement {
    fn measure(&self) -> RawMeasurement {
        RawMeasurement::new(self.offset, self.content, self.viewport)
    }
}

/// What the simulated host does at a given instant.
enum Event {
    Bind,
    ScrollTo(f64),
    ResizeViewport(Size),
}

fn deliver(now: u64, info: &ScrollInfo) {
    let fraction = info
        .y
        .percentage
        .map_or_else(|| "—".to_string(), |p| format!("{:.0}%", p * 100.0));
    println!(
        "t={now:>3}ms  {:<16} {:<6} direction {:+}",
        info.y.class_name(Axis::Vertical),
        fraction,
        info.y.direction.as_i8(),
    );
}

fn main() {
    // The host identifies its environment once at startup. This one has no
    // known measurement quirks and native size observation.
    let quirks = MeasurementQuirks::from_environment_tag("scrollgauge-demo/1.0");
    let strategy = ResizeStrategy::choose(true);
    println!("quirks: {quirks:?}, resize strategy: {strategy:?}\n");

    let mut element = SimulatedElement {
        offset: Point::ZERO,
        content: Size::new(800.0, 1000.0),
        viewport: Size::new(800.0, 600.0),
    };
    let mut tracker = ScrollTracker::new(quirks);

    // One-slot timer facility, as a (deadline) cell the loop polls.
    let mut armed: Option<u64> = None;

    let timeline: &[(u64, Event)] = &[
        (0, Event::Bind),
        // A scroll burst well inside the 50ms window.
        (10, Event::ScrollTo(40.0)),
        (25, Event::ScrollTo(120.0)),
        (35, Event::ScrollTo(200.0)),
        // Quiet, then the user drags back up.
        (200, Event::ScrollTo(80.0)),
        // The viewport grows tall enough to swallow the overflow.
        (400, Event::ResizeViewport(Size::new(800.0, 1000.0))),
    ];

    for (now, event) in timeline {
        // Fire the timer first if its deadline passed while we were idle.
        if let Some(deadline) = armed
            && deadline <= *now
            && tracker.on_deadline(deadline)
        {
            armed = None;
            let info = tracker.commit(&element.measure());
            deliver(deadline, info);
        }

        match event {
            Event::Bind => {}
            Event::ScrollTo(y) => element.offset.y = *y,
            Event::ResizeViewport(size) => {
                element.viewport = *size;
                element.offset.y = element
                    .offset
                    .y
                    .min((element.content.height - size.height).max(0.0));
            }
        }

        match tracker.on_trigger(*now) {
            ThrottleDecision::Run => {
                let info = tracker.commit(&element.measure());
                deliver(*now, info);
            }
            ThrottleDecision::Schedule(deadline) => armed = Some(deadline),
            ThrottleDecision::Coalesce(_) => {}
        }
    }

    // Drain the last pending trailing update before unbinding.
    if let Some(deadline) = armed
        && tracker.on_deadline(deadline)
    {
        let info = tracker.commit(&element.measure());
        deliver(deadline, info);
    }

    // Unbind: nothing is pending anymore, so teardown has nothing to cancel.
    assert_eq!(tracker.teardown(), None);
}

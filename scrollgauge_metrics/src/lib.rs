// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrollgauge_metrics --heading-base-level=0

//! Scrollgauge Metrics: normalized scroll state from raw element measurements.
//!
//! This crate answers, per axis, "how far is this element scrolled?" as a
//! small immutable snapshot: a fraction in `[0, 1]` (or absent when the axis
//! has no overflow), the raw offset and the maximum offset, a fixed edge
//! classification token suitable for styling hooks, and the direction of
//! travel relative to the previous snapshot.
//!
//! The core concepts are:
//!
//! - [`RawMeasurement`]: the six raw fields a host queries from its element
//!   (scroll offset, content extent, viewport extent), expressed as
//!   [`kurbo::Point`] and [`kurbo::Size`] in logical pixels.
//! - [`MeasurementQuirks`]: capability flags for known measurement anomalies
//!   of the host environment, detected once at startup and passed explicitly
//!   into every computation.
//! - [`compute_scroll_info`]: the pure function from a measurement plus the
//!   previously computed [`ScrollInfo`] to the next [`ScrollInfo`].
//! - [`EdgeClass`] and [`ScrollDirection`]: the per-axis classification
//!   vocabulary, with the literal class-name tokens consumers may rely on.
//!
//! This crate deliberately does **not** know how measurements are obtained,
//! when computation should run, or how results reach a consumer. Hosts are
//! responsible for:
//!
//! - Querying a fresh [`RawMeasurement`] each time an update executes.
//! - Threading the previously returned [`ScrollInfo`] into the next call
//!   (start from [`ScrollInfo::EMPTY`]).
//! - Rate-limiting triggers, typically via `scrollgauge_throttle` or the
//!   `scrollgauge_tracker` controller.
//!
//! ## Minimal example
//!
//! A 600px-tall viewport over 1000px of content, scrolled 200px down:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use scrollgauge_metrics::{
//!     Axis, MeasurementQuirks, RawMeasurement, ScrollInfo, compute_scroll_info,
//! };
//!
//! let raw = RawMeasurement::new(
//!     Point::new(0.0, 200.0),
//!     Size::new(800.0, 1000.0),
//!     Size::new(800.0, 600.0),
//! );
//! let info = compute_scroll_info(&raw, &ScrollInfo::EMPTY, MeasurementQuirks::empty());
//!
//! assert_eq!(info.y.total, 400.0);
//! assert_eq!(info.y.percentage, Some(0.5));
//! assert_eq!(info.y.class_name(Axis::Vertical), "scroll-middle-y");
//! // No horizontal overflow: content and viewport widths match.
//! assert_eq!(info.x.percentage, None);
//! assert_eq!(info.x.class_name(Axis::Horizontal), "no-scroll-x");
//! ```
//!
//! All measurement fields are expected to be finite; degenerate values
//! (negative sizes, offsets past the end) are normalized by clamping rather
//! than propagated as NaN or out-of-range fractions.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod measurement;
mod quirks;
mod snapshot;

pub use axis::{Axis, EdgeClass, ScrollDirection};
pub use measurement::RawMeasurement;
pub use quirks::MeasurementQuirks;
pub use snapshot::{AxisMetrics, ScrollInfo, compute_scroll_info};

// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll-state snapshot and the pure computation that produces it.

use crate::{Axis, EdgeClass, MeasurementQuirks, RawMeasurement, ScrollDirection};

/// Normalized scroll state for a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMetrics {
    /// Fraction scrolled, in `[0, 1]`; `None` when the axis has no
    /// scrollable overflow (`total == 0`). Never NaN.
    pub percentage: Option<f64>,
    /// Current scroll offset in logical pixels, `>= 0`.
    pub value: f64,
    /// Maximum scroll offset in logical pixels, `>= 0`; zero means no
    /// overflow on this axis.
    pub total: f64,
    /// Edge classification, fully determined by `percentage`.
    pub edge: EdgeClass,
    /// Direction of travel relative to the previous snapshot.
    pub direction: ScrollDirection,
}

impl AxisMetrics {
    /// The synthetic all-zero state an axis starts from before any real
    /// measurement.
    pub const EMPTY: Self = Self {
        percentage: None,
        value: 0.0,
        total: 0.0,
        edge: EdgeClass::NoScroll,
        direction: ScrollDirection::Unchanged,
    };

    /// The fixed class-name token for this axis state.
    ///
    /// See [`EdgeClass::token`] for the literal values.
    #[must_use]
    pub const fn class_name(&self, axis: Axis) -> &'static str {
        self.edge.token(axis)
    }
}

/// An immutable snapshot of scroll state for both axes.
///
/// A new value is produced by every call to [`compute_scroll_info`] and
/// replaces the caller's previous snapshot wholesale; snapshots are never
/// mutated in place and never partially updated per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInfo {
    /// Horizontal axis state.
    pub x: AxisMetrics,
    /// Vertical axis state.
    pub y: AxisMetrics,
}

impl ScrollInfo {
    /// The synthetic zero state used as "previous" before the first real
    /// computation.
    ///
    /// Its per-axis `value` is 0, so the first computed direction compares
    /// against an offset of zero rather than "no previous position".
    pub const EMPTY: Self = Self {
        x: AxisMetrics::EMPTY,
        y: AxisMetrics::EMPTY,
    };

    /// The state of the given axis.
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> &AxisMetrics {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }
}

impl Default for ScrollInfo {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Computes the next scroll-state snapshot from a raw measurement and the
/// previously computed snapshot.
///
/// Pure and deterministic: identical inputs yield identical output, and
/// nothing is mutated. The caller threads the returned snapshot into the
/// next call as `previous` (starting from [`ScrollInfo::EMPTY`]) — only its
/// per-axis `value` participates, to derive `direction`.
///
/// Degenerate measurements are normalized, never propagated: negative
/// offsets clamp to 0, a viewport larger than the content yields a total of
/// 0 (and an absent percentage), and offsets past the end clamp the
/// percentage to 1. With `quirks` containing
/// [`MeasurementQuirks::PHANTOM_VERTICAL_OVERFLOW`], a vertical total of
/// exactly one pixel at offset 0 is treated as no overflow.
///
/// The measurement must come from a currently bound element; calling this
/// without one to measure is a caller contract violation, not a recoverable
/// error.
#[must_use]
pub fn compute_scroll_info(
    raw: &RawMeasurement,
    previous: &ScrollInfo,
    quirks: MeasurementQuirks,
) -> ScrollInfo {
    ScrollInfo {
        x: compute_axis(raw, previous, quirks, Axis::Horizontal),
        y: compute_axis(raw, previous, quirks, Axis::Vertical),
    }
}

fn compute_axis(
    raw: &RawMeasurement,
    previous: &ScrollInfo,
    quirks: MeasurementQuirks,
    axis: Axis,
) -> AxisMetrics {
    let value = raw.offset_along(axis).max(0.0);
    let naive_total = raw.content_along(axis) - raw.viewport_along(axis);

    // Legacy EdgeHTML reports scrollHeight one pixel larger than
    // clientHeight when there is no vertical scroll.
    let phantom = axis == Axis::Vertical
        && quirks.contains(MeasurementQuirks::PHANTOM_VERTICAL_OVERFLOW)
        && naive_total == 1.0
        && value == 0.0;
    let total = if phantom { 0.0 } else { naive_total.max(0.0) };

    let percentage = (total != 0.0).then(|| (value / total).clamp(0.0, 1.0));
    let edge = EdgeClass::from_percentage(percentage);
    let direction = ScrollDirection::from_delta(value - previous.axis(axis).value);

    AxisMetrics {
        percentage,
        value,
        total,
        edge,
        direction,
    }
}

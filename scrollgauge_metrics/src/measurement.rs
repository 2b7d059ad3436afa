// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raw measurement snapshot queried from a scrollable element.

use kurbo::{Point, Size};

use crate::Axis;

/// Raw measurements of a scrollable element at a single instant.
///
/// This is the ephemeral input to [`compute_scroll_info`](crate::compute_scroll_info):
/// hosts query it synchronously from the bound element each time an update
/// actually executes, and never cache it across updates.
///
/// In DOM terms, `offset` is `(scrollLeft, scrollTop)`, `content` is
/// `(scrollWidth, scrollHeight)`, and `viewport` is
/// `(clientWidth, clientHeight)`. All fields are in logical pixels and are
/// expected to be finite; negative or inconsistent values are tolerated and
/// normalized by clamping during computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawMeasurement {
    /// Current scroll offset from the content origin.
    pub offset: Point,
    /// Full extent of the scrollable content.
    pub content: Size,
    /// Extent of the visible viewport.
    pub viewport: Size,
}

impl RawMeasurement {
    /// Creates a measurement from offset, content extent, and viewport extent.
    ///
    /// Measurements are expected to be finite. Catch NaNs (and infinities)
    /// in debug builds so misuse does not go unnoticed.
    #[must_use]
    pub fn new(offset: Point, content: Size, viewport: Size) -> Self {
        debug_assert!(
            offset.x.is_finite() && offset.y.is_finite(),
            "scroll offset must be finite; got {offset:?}"
        );
        debug_assert!(
            content.width.is_finite() && content.height.is_finite(),
            "content extent must be finite; got {content:?}"
        );
        debug_assert!(
            viewport.width.is_finite() && viewport.height.is_finite(),
            "viewport extent must be finite; got {viewport:?}"
        );
        Self {
            offset,
            content,
            viewport,
        }
    }

    /// The scroll offset along `axis`.
    #[must_use]
    pub const fn offset_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.offset.x,
            Axis::Vertical => self.offset.y,
        }
    }

    /// The content extent along `axis`.
    #[must_use]
    pub const fn content_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.content.width,
            Axis::Vertical => self.content.height,
        }
    }

    /// The viewport extent along `axis`.
    #[must_use]
    pub const fn viewport_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.viewport.width,
            Axis::Vertical => self.viewport.height,
        }
    }
}

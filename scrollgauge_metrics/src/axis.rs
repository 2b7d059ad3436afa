// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis identity and the per-axis classification vocabulary.

/// One of the two independent scroll dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x dimension (scroll-left).
    Horizontal,
    /// The y dimension (scroll-top).
    Vertical,
}

/// Direction of travel along an axis between two consecutive snapshots.
///
/// Recomputed fresh on every update as the sign of
/// `current value - previous value`; it is never carried forward
/// independently of the snapshot that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i8)]
pub enum ScrollDirection {
    /// Moving toward the start edge (up / left).
    TowardStart = -1,
    /// No movement since the previous snapshot.
    #[default]
    Unchanged = 0,
    /// Moving toward the end edge (down / right).
    TowardEnd = 1,
}

impl ScrollDirection {
    /// Classifies a positional delta by its sign.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::TowardEnd
        } else if delta < 0.0 {
            Self::TowardStart
        } else {
            Self::Unchanged
        }
    }

    /// The conventional numeric encoding: -1, 0, or +1.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

/// Edge classification of an axis, derived solely from its scroll fraction.
///
/// Exactly one class holds per axis at any time:
/// an absent fraction (no overflow) is [`EdgeClass::NoScroll`], `0` is
/// [`EdgeClass::Start`], `1` is [`EdgeClass::End`], and anything in between
/// is [`EdgeClass::Middle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// The axis has no scrollable overflow.
    NoScroll,
    /// Scrolled all the way to the start edge (top / left).
    Start,
    /// Scrolled all the way to the end edge (bottom / right).
    End,
    /// Somewhere strictly between the two edges.
    Middle,
}

impl EdgeClass {
    /// Derives the class from a scroll fraction in `[0, 1]`, or `None` when
    /// the axis has no overflow.
    #[must_use]
    pub fn from_percentage(percentage: Option<f64>) -> Self {
        match percentage {
            None => Self::NoScroll,
            Some(p) if p == 0.0 => Self::Start,
            Some(p) if p == 1.0 => Self::End,
            Some(_) => Self::Middle,
        }
    }

    /// The fixed class-name token for this class on the given axis.
    ///
    /// Consumers may depend on these literal values (for example as styling
    /// hooks); they are part of this crate's stable contract.
    #[must_use]
    pub const fn token(self, axis: Axis) -> &'static str {
        match (axis, self) {
            (Axis::Vertical, Self::NoScroll) => "no-scroll-y",
            (Axis::Vertical, Self::Start) => "scroll-top",
            (Axis::Vertical, Self::End) => "scroll-bottom",
            (Axis::Vertical, Self::Middle) => "scroll-middle-y",
            (Axis::Horizontal, Self::NoScroll) => "no-scroll-x",
            (Axis::Horizontal, Self::Start) => "scroll-left",
            (Axis::Horizontal, Self::End) => "scroll-right",
            (Axis::Horizontal, Self::Middle) => "scroll-middle-x",
        }
    }
}

// Copyright 2025 the Scrollgauge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability flags for known measurement anomalies of a host environment.

bitflags::bitflags! {
    /// Measurement quirks an environment is known to exhibit.
    ///
    /// Detected once at host startup — typically from the environment's
    /// identification string via [`MeasurementQuirks::from_environment_tag`]
    /// — and passed explicitly into every computation. There is no global
    /// detection state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MeasurementQuirks: u8 {
        /// The environment reports one extra logical pixel of scrollable
        /// height when there is visually no vertical overflow, making
        /// `content.height == viewport.height + 1` for a non-scrollable
        /// element. Known from legacy EdgeHTML.
        const PHANTOM_VERTICAL_OVERFLOW = 0b0000_0001;
    }
}

impl Default for MeasurementQuirks {
    /// No quirks — the safe assumption for an unidentified environment.
    fn default() -> Self {
        Self::empty()
    }
}

impl MeasurementQuirks {
    /// Detects quirks from an environment identification string, such as a
    /// user-agent value.
    ///
    /// Detection is conservative: an empty or unrecognized tag yields
    /// [`MeasurementQuirks::empty`], so no phantom correction is applied
    /// when identification is inconclusive.
    ///
    /// ```rust
    /// use scrollgauge_metrics::MeasurementQuirks;
    ///
    /// let quirks = MeasurementQuirks::from_environment_tag(
    ///     "Mozilla/5.0 (Windows NT 10.0) Edge/18.18362",
    /// );
    /// assert!(quirks.contains(MeasurementQuirks::PHANTOM_VERTICAL_OVERFLOW));
    ///
    /// // The Chromium-era "Edg/" token does not carry the quirk.
    /// assert!(MeasurementQuirks::from_environment_tag("Edg/120.0").is_empty());
    /// ```
    #[must_use]
    pub fn from_environment_tag(tag: &str) -> Self {
        if has_legacy_edge_token(tag) {
            Self::PHANTOM_VERTICAL_OVERFLOW
        } else {
            Self::empty()
        }
    }
}

/// Looks for the legacy EdgeHTML marker: `"edge/"` (case-insensitive)
/// followed by a digit. The Chromium-based successor identifies as `"Edg/"`
/// and does not match.
fn has_legacy_edge_token(tag: &str) -> bool {
    const TOKEN: &[u8] = b"edge/";
    let bytes = tag.as_bytes();
    let Some(last_start) = bytes.len().checked_sub(TOKEN.len() + 1) else {
        return false;
    };
    (0..=last_start).any(|i| {
        bytes[i..i + TOKEN.len()].eq_ignore_ascii_case(TOKEN)
            && bytes[i + TOKEN.len()].is_ascii_digit()
    })
}

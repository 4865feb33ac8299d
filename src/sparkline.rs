// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Sparkline SVG generation for the 7-day contribution chart.
//!
//! The generator emits a deterministic bar chart on a fixed 20x14 unit
//! canvas: one 2-unit-wide bar per day at a 3-unit pitch, scaled against the
//! week's maximum count and clamped so a zero-commit day still renders a
//! visible 1-unit bar.

use std::fmt::Write as _;

use crate::stats::ContributionDay;

/// Number of days the sparkline is designed to render.
pub const SPARKLINE_DAYS: usize = 7;

/// Canvas width in SVG units.
const CANVAS_WIDTH: u32 = 20;

/// Canvas height in SVG units; also the maximum bar height.
const CANVAS_HEIGHT: u32 = 14;

/// Width of a single bar in SVG units.
const BAR_WIDTH: u32 = 2;

/// Horizontal distance between bar origins, leaving a 1-unit gap.
const BAR_PITCH: usize = 3;

/// Renders the contribution days as a 7-bar sparkline SVG.
///
/// Bars are emitted in day order, scaled against `max(1, max count)` so an
/// all-zero week does not divide by zero, and bounded into `[1, 14]` units.
/// The caller contractually supplies [`SPARKLINE_DAYS`] entries; other
/// lengths render at the same pitch but are not guaranteed to fit the
/// canvas.
///
/// # Examples
///
/// ```
/// use ghbadge::{ContributionDay, sparkline_svg};
///
/// let days: Vec<ContributionDay> = (1..=7)
///     .map(|i| ContributionDay {
///         date:  format!("2025-01-0{i}"),
///         count: i
///     })
///     .collect();
///
/// let svg = sparkline_svg(&days);
/// assert!(svg.contains("viewBox=\"0 0 20 14\""));
/// ```
pub fn sparkline_svg(days: &[ContributionDay]) -> String {
    let mut scale_max = 1u32;
    for day in days {
        scale_max = scale_max.max(day.count);
    }

    let mut svg = String::with_capacity(256);
    let _ = write!(
        svg,
        "<svg viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\" width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\"><g style=\"fill:SlateGray\">"
    );

    for (index, day) in days.iter().enumerate() {
        let scaled =
            round2(f64::from(day.count) / f64::from(scale_max) * f64::from(CANVAS_HEIGHT));
        let height = scaled.clamp(1.0, f64::from(CANVAS_HEIGHT));
        let x = index * BAR_PITCH;
        let y = f64::from(CANVAS_HEIGHT) - height;

        let _ = write!(svg, "\n<rect width=\"{BAR_WIDTH}\" height=\"{height}\" x=\"{x}\" y=\"{y}\"/>");
    }

    svg.push_str("\n</g></svg>");
    svg
}

/// Rounds to two decimal places, matching the chart's unit precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{SPARKLINE_DAYS, sparkline_svg};
    use crate::stats::ContributionDay;

    fn days_with_counts(counts: &[u32]) -> Vec<ContributionDay> {
        counts
            .iter()
            .enumerate()
            .map(|(i, count)| ContributionDay {
                date:  format!("2025-01-{:02}", i + 1),
                count: *count
            })
            .collect()
    }

    #[test]
    fn all_zero_week_renders_unit_bars() {
        let days = days_with_counts(&[0; 7]);
        let svg = sparkline_svg(&days);

        assert_eq!(svg.matches("<rect").count(), SPARKLINE_DAYS);
        assert_eq!(svg.matches("height=\"1\"").count(), SPARKLINE_DAYS);
        assert_eq!(svg.matches("y=\"13\"").count(), SPARKLINE_DAYS);
    }

    #[test]
    fn ascending_week_scales_proportionally() {
        let days = days_with_counts(&[1, 2, 3, 4, 5, 6, 7]);
        let svg = sparkline_svg(&days);

        // The maximum day reaches the full canvas height.
        assert!(svg.contains("height=\"14\" x=\"18\" y=\"0\""));
        // Each other bar is round(count / 7 * 14, 2) = 2 * count units tall.
        assert!(svg.contains("height=\"2\" x=\"0\" y=\"12\""));
        assert!(svg.contains("height=\"4\" x=\"3\" y=\"10\""));
        assert!(svg.contains("height=\"6\" x=\"6\" y=\"8\""));
        assert!(svg.contains("height=\"8\" x=\"9\" y=\"6\""));
        assert!(svg.contains("height=\"10\" x=\"12\" y=\"4\""));
        assert!(svg.contains("height=\"12\" x=\"15\" y=\"2\""));
    }

    #[test]
    fn bars_advance_at_three_unit_pitch() {
        let days = days_with_counts(&[3; 7]);
        let svg = sparkline_svg(&days);

        for index in 0..SPARKLINE_DAYS {
            let x = index * 3;
            assert!(svg.contains(&format!("x=\"{x}\"")), "missing bar at x={x}");
        }
    }

    #[test]
    fn fractional_heights_round_to_two_decimals() {
        let days = days_with_counts(&[1, 0, 0, 0, 0, 0, 10]);
        let svg = sparkline_svg(&days);

        // round(1 / 10 * 14, 2) = 1.4 units.
        assert!(svg.contains("height=\"1.4\""));
        assert!(svg.contains("height=\"14\""));
    }

    #[test]
    fn canvas_dimensions_are_fixed() {
        let svg = sparkline_svg(&days_with_counts(&[0; 7]));
        assert!(svg.starts_with("<svg viewBox=\"0 0 20 14\" width=\"20\" height=\"14\">"));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn non_contractual_lengths_render_at_same_pitch() {
        let days = days_with_counts(&[5, 5, 5]);
        let svg = sparkline_svg(&days);

        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("x=\"6\""));
    }

    #[test]
    fn output_is_deterministic() {
        let days = days_with_counts(&[2, 4, 8, 0, 1, 3, 5]);
        assert_eq!(sparkline_svg(&days), sparkline_svg(&days));
    }
}

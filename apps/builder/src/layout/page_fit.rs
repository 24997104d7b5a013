//! Page-fit estimation: how much of one printed page the rendered resume occupies.
//!
//! The host measures two heights after each render pass (and on resize) and passes
//! them in. Nothing is remembered between calls.
//!
//! # Fill rules
//! - fill percentage = round(content / container × 100), capped at 150 for display
//! - overflowing     = content > container, decided on the unclamped values
//! - a container height of zero means "not laid out yet": one A4 page is assumed

use serde::{Deserialize, Serialize};

/// One A4 page (297mm) at 96 DPI, in CSS pixels.
pub const A4_HEIGHT_PX: f64 = 1122.52;

/// Display cap for the fill percentage.
pub const MAX_DISPLAY_PERCENTAGE: u32 = 150;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Heights read from the rendered page, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeasurement {
    /// Full scroll height of the rendered content.
    pub content_height_px: f64,
    /// Visible height of the page container; zero when unknown.
    pub container_height_px: f64,
}

/// Coarse fill level, used to colour the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillLevel {
    /// ≤ 90%.
    Comfortable,
    /// 91–100%.
    NearlyFull,
    /// > 100%.
    Overflowing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFit {
    /// Rounded fill percentage, capped at `MAX_DISPLAY_PERCENTAGE`.
    pub fill_percentage: u32,
    pub is_overflowing: bool,
    pub level: FillLevel,
}

// ────────────────────────────────────────────────────────────────────────────
// Core function
// ────────────────────────────────────────────────────────────────────────────

pub fn estimate_page_fit(measurement: PageMeasurement) -> PageFit {
    let content = sanitize(measurement.content_height_px);
    let container = match sanitize(measurement.container_height_px) {
        h if h > 0.0 => h,
        _ => A4_HEIGHT_PX,
    };

    let raw_percentage = (content / container * 100.0).round();
    let fill_percentage = raw_percentage.min(MAX_DISPLAY_PERCENTAGE as f64) as u32;

    let level = if fill_percentage > 100 {
        FillLevel::Overflowing
    } else if fill_percentage > 90 {
        FillLevel::NearlyFull
    } else {
        FillLevel::Comfortable
    };

    PageFit {
        fill_percentage,
        is_overflowing: content > container,
        level,
    }
}

/// Negative and non-finite measurements are treated as zero.
fn sanitize(px: f64) -> f64 {
    if px.is_finite() && px > 0.0 {
        px
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(content: f64, container: f64) -> PageFit {
        estimate_page_fit(PageMeasurement {
            content_height_px: content,
            container_height_px: container,
        })
    }

    #[test]
    fn test_overflowing_page() {
        let result = fit(1200.0, 1000.0);
        assert_eq!(result.fill_percentage, 120);
        assert!(result.is_overflowing);
        assert_eq!(result.level, FillLevel::Overflowing);
    }

    #[test]
    fn test_page_with_room_left() {
        let result = fit(900.0, 1000.0);
        assert_eq!(result.fill_percentage, 90);
        assert!(!result.is_overflowing);
        assert_eq!(result.level, FillLevel::Comfortable);
    }

    #[test]
    fn test_display_capped_but_overflow_kept() {
        let result = fit(2000.0, 1000.0);
        assert_eq!(result.fill_percentage, 150);
        assert!(result.is_overflowing);
    }

    #[test]
    fn test_exactly_full_is_not_overflowing() {
        let result = fit(1000.0, 1000.0);
        assert_eq!(result.fill_percentage, 100);
        assert!(!result.is_overflowing);
        assert_eq!(result.level, FillLevel::NearlyFull);
    }

    #[test]
    fn test_tiny_overflow_rounds_to_100_but_still_overflows() {
        let result = fit(1002.0, 1000.0);
        assert_eq!(result.fill_percentage, 100);
        assert!(result.is_overflowing);
    }

    #[test]
    fn test_zero_container_falls_back_to_a4() {
        let result = fit(A4_HEIGHT_PX / 2.0, 0.0);
        assert_eq!(result.fill_percentage, 50);
        assert!(!result.is_overflowing);

        let over = fit(1200.0, 0.0);
        assert!(over.is_overflowing);
        assert_eq!(over.fill_percentage, 107);
    }

    #[test]
    fn test_bad_measurements_are_treated_as_zero() {
        let result = fit(f64::NAN, -5.0);
        assert_eq!(result.fill_percentage, 0);
        assert!(!result.is_overflowing);
    }

    #[test]
    fn test_nearly_full_band() {
        assert_eq!(fit(910.0, 1000.0).level, FillLevel::NearlyFull);
        assert_eq!(fit(904.0, 1000.0).level, FillLevel::Comfortable);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(fit(900.0, 1000.0)).unwrap();
        assert_eq!(json["fillPercentage"], 90);
        assert_eq!(json["isOverflowing"], false);
        assert_eq!(json["level"], "comfortable");
    }
}

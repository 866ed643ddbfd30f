// Default theme functions
//
// Colors for fund states and refresh-interval feedback.

use ratatui::style::Color;

use super::{AMBER, CRIMSON, MINT, SLATE};
use crate::parachains::FundStatus;

/// Color for a crowdloan fund status label
pub fn fund_status_color(status: FundStatus) -> Color {
    match status {
        FundStatus::Active => MINT,
        FundStatus::Capped => AMBER,
        FundStatus::Retiring => CRIMSON,
        FundStatus::Ended => SLATE,
    }
}

/// Get color for refresh interval based on its value relative to default
///
/// Color coding:
/// - Green (MINT): Default value or slower
/// - Amber: High frequency (increased snapshot reads)
/// - Red (CRIMSON): Very high frequency
///
/// If recently_changed is true, returns a brighter version of the color
pub fn get_refresh_color(interval_ms: u64, default_ms: u64, recently_changed: bool) -> Color {
    let base_color = if interval_ms < default_ms {
        // Faster than default (higher frequency)
        let ratio = (default_ms - interval_ms) as f32 / default_ms as f32;

        if ratio > 0.5 {
            CRIMSON
        } else {
            AMBER
        }
    } else {
        MINT
    };

    // If recently changed, make the color brighter
    if recently_changed {
        match base_color {
            Color::Rgb(r, g, b) => {
                // Increase brightness by 20%
                let r = ((r as f32 * 1.2).min(255.0)) as u8;
                let g = ((g as f32 * 1.2).min(255.0)) as u8;
                let b = ((b as f32 * 1.2).min(255.0)) as u8;
                Color::Rgb(r, g, b)
            }
            _ => base_color,
        }
    } else {
        base_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_color_bands() {
        assert_eq!(get_refresh_color(500, 500, false), MINT);
        assert_eq!(get_refresh_color(1000, 500, false), MINT);
        assert_eq!(get_refresh_color(400, 500, false), AMBER);
        assert_eq!(get_refresh_color(100, 500, false), CRIMSON);
    }

    #[test]
    fn test_refresh_color_highlight_is_brighter() {
        match (get_refresh_color(500, 500, false), get_refresh_color(500, 500, true)) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                assert!(r2 >= r1 && g2 >= g1 && b2 >= b1);
                assert_ne!((r1, g1, b1), (r2, g2, b2));
            }
            other => panic!("unexpected colors {:?}", other),
        }
    }

    #[test]
    fn test_fund_status_colors_distinct() {
        assert_ne!(fund_status_color(FundStatus::Active), fund_status_color(FundStatus::Capped));
        assert_eq!(fund_status_color(FundStatus::Ended), SLATE);
    }
}

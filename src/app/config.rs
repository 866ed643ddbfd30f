// Application configuration types
//
// This module contains configuration structs and enums for:
// - Refresh intervals
// - Panel tabs
// - Activity log sizing

use std::time::{Duration, Instant};

// ============================================================================
// Constants
// ============================================================================

/// Minimum refresh interval in milliseconds
pub const MIN_REFRESH_MS: u64 = 50;

/// Maximum refresh interval in milliseconds
pub const MAX_REFRESH_MS: u64 = 10000;

/// Refresh interval adjustment step in milliseconds
pub const REFRESH_STEP: u64 = 50;

/// Default UI refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 500;

/// Data refresh multiplier (snapshot reloads at N times the UI interval)
pub const DATA_REFRESH_MULTIPLIER: u64 = 10;

/// Duration to highlight recently changed refresh intervals
pub const CHANGE_HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

/// Maximum number of lines kept in the activity log
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

// ============================================================================
// Enums
// ============================================================================

/// Main panel tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// RPC endpoint list (default)
    #[default]
    Endpoints,
    Auctions,
    Crowdloans,
    Constants,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Endpoints, Tab::Auctions, Tab::Crowdloans, Tab::Constants];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Translation key and default title
    pub fn title(self) -> (&'static str, &'static str) {
        match self {
            Tab::Endpoints => ("tab.endpoints", "Endpoints"),
            Tab::Auctions => ("tab.auctions", "Auctions"),
            Tab::Crowdloans => ("tab.crowdloans", "Crowdloans"),
            Tab::Constants => ("tab.constants", "Constants"),
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Configuration for refresh intervals (unified)
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Refresh interval in milliseconds (50-10000ms)
    /// Snapshot reloads use this * DATA_REFRESH_MULTIPLIER
    pub refresh_ms: u64,

    /// Timestamp of last interval change (for visual feedback)
    pub last_change: Option<Instant>,
}

impl RefreshConfig {
    /// Create a new RefreshConfig with default values
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_REFRESH_MS)
    }

    /// Clamp a user-supplied interval into the allowed range
    pub fn with_interval(refresh_ms: u64) -> Self {
        Self {
            refresh_ms: refresh_ms.clamp(MIN_REFRESH_MS, MAX_REFRESH_MS),
            last_change: None,
        }
    }

    /// Get UI refresh interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    /// Get data refresh interval as Duration (10x UI interval)
    pub fn data_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms * DATA_REFRESH_MULTIPLIER)
    }

    /// Whether the interval was changed within the highlight window
    pub fn recently_changed(&self) -> bool {
        self.last_change
            .map(|t| t.elapsed() < CHANGE_HIGHLIGHT_DURATION)
            .unwrap_or(false)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Endpoints.next(), Tab::Auctions);
        assert_eq!(Tab::Constants.next(), Tab::Endpoints);
        assert_eq!(Tab::Endpoints.previous(), Tab::Constants);
    }

    #[test]
    fn test_refresh_interval_clamped() {
        assert_eq!(RefreshConfig::with_interval(1).refresh_ms, MIN_REFRESH_MS);
        assert_eq!(RefreshConfig::with_interval(u64::MAX).refresh_ms, MAX_REFRESH_MS);
        assert_eq!(
            RefreshConfig::new().data_interval(),
            Duration::from_millis(DEFAULT_REFRESH_MS * DATA_REFRESH_MULTIPLIER)
        );
    }
}

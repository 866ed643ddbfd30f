// Theme module - Color constants and theme re-exports
//
// This module provides the color palette and theme functions for
// parascope's UI.

pub mod default;

use ratatui::style::Color;

// Core palette used throughout the UI

/// Primary accent color - used for borders, titles, headers
/// RGB: (187, 154, 247)
pub const MUI_VIOLET: Color = Color::Rgb(187, 154, 247);

/// Warning indicator - used for capped funds, ending periods
/// RGB: (255, 158, 100)
pub const AMBER: Color = Color::Rgb(255, 158, 100);

/// Danger indicator - used for errors, retiring funds
/// RGB: (247, 118, 142)
pub const CRIMSON: Color = Color::Rgb(247, 118, 142);

/// Active/healthy indicator - used for active funds, selected endpoint
/// RGB: (158, 206, 106)
pub const MINT: Color = Color::Rgb(158, 206, 106);

/// Inactive/neutral text - used for general text, ended funds
/// RGB: (169, 177, 214)
pub const SLATE: Color = Color::Rgb(169, 177, 214);

/// Highlight background for selected rows
/// RGB: (47, 51, 77)
pub const SELECTION_BG: Color = Color::Rgb(47, 51, 77);

// Re-export theme functions for convenient access
pub use default::*;

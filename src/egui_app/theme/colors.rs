//! Color Constants for the Group Admin Theme
//!
//! Blue accents on a light background.

use eframe::egui::Color32;

/// Headings and group names - Dodger blue
pub const HEADING: Color32 = Color32::from_rgb(0x1E, 0x90, 0xFF);

/// Primary button background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x00, 0x70, 0xF3);

/// Primary button hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x00, 0x5B, 0xC5);

/// Text on buttons
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

/// Page background
pub const PAGE_BG: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);

/// Group box background
pub const CARD_BG: Color32 = Color32::WHITE;

/// Borders around group boxes and popups
pub const BORDER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Success banner background
pub const SUCCESS_BG: Color32 = Color32::from_rgb(0xE0, 0xFF, 0xE0);

/// Success banner text
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x00, 0x70, 0x00);

/// Error banner background
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFF, 0xE0, 0xE0);

/// Error text
pub const ERROR: Color32 = Color32::from_rgb(0xB0, 0x00, 0x20);

/// Destructive action button
pub const DANGER: Color32 = Color32::from_rgb(0xD9, 0x3F, 0x3F);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);

/// Selected member highlight
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0xE6, 0xF1, 0xFF);

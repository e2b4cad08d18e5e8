//! Theme Module
//!
//! Color scheme and frame builders for the group admin view.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::group_box_frame().show(ui, |ui| {
//!     ui.colored_label(colors::HEADING, "Eng");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;

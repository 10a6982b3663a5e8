// src/font_config.rs

// Global font configuration for chart rendering.
// Plotters is built with the ab_glyph renderer, so every family used in a chart
// has to be registered before the first text element is drawn.

use std::error::Error;
use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

use crate::constants::{
    FONT_SIZE_AXIS_LABEL_PT, FONT_SIZE_LEGEND_PT, FONT_SIZE_TICK_PT, FONT_SIZE_TITLE_PT,
    OUTPUT_DPI, POINTS_PER_INCH,
};

/// Embedded proportional font at compile time
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// Family name every chart text element refers to
pub const FONT_FAMILY: &str = "sans-serif";

static FONT_REGISTRATION: OnceLock<bool> = OnceLock::new();

/// Registers the bundled font under `FONT_FAMILY`. Safe to call repeatedly.
pub fn register_bundled_font() -> Result<(), Box<dyn Error>> {
    let registered = *FONT_REGISTRATION.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT_BYTES).is_ok()
    });
    if registered {
        Ok(())
    } else {
        Err("bundled chart font could not be parsed".into())
    }
}

/// Converts a length in typographic points to output pixels.
pub fn points_to_px(points: f64) -> f64 {
    points * OUTPUT_DPI / POINTS_PER_INCH
}

/// Point size rounded to whole pixels, never below 1.
pub fn points_to_px_u32(points: f64) -> u32 {
    points_to_px(points).round().max(1.0) as u32
}

fn font_px(points: f64) -> i32 {
    points_to_px(points).round() as i32
}

// Tuple representations for use with plotters' IntoTextStyle trait
pub fn font_tuple_title() -> (&'static str, i32) {
    (FONT_FAMILY, font_px(FONT_SIZE_TITLE_PT))
}

pub fn font_tuple_axis_label() -> (&'static str, i32) {
    (FONT_FAMILY, font_px(FONT_SIZE_AXIS_LABEL_PT))
}

pub fn font_tuple_tick() -> (&'static str, i32) {
    (FONT_FAMILY, font_px(FONT_SIZE_TICK_PT))
}

pub fn font_tuple_legend() -> (&'static str, i32) {
    (FONT_FAMILY, font_px(FONT_SIZE_LEGEND_PT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_px_at_300_dpi() {
        // 72 pt is one inch
        assert_eq!(points_to_px(72.0), 300.0);
        assert_eq!(points_to_px_u32(2.0), 8);
        assert_eq!(points_to_px_u32(0.0), 1);
    }

    #[test]
    fn test_font_sizes_scale_with_dpi() {
        assert_eq!(font_tuple_legend(), ("sans-serif", 33));
        assert_eq!(font_tuple_title(), ("sans-serif", 50));
        assert!(font_tuple_axis_label().1 > font_tuple_legend().1);
    }

    #[test]
    fn test_register_bundled_font_is_idempotent() {
        assert!(register_bundled_font().is_ok());
        assert!(register_bundled_font().is_ok());
    }
}

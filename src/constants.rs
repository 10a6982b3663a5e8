// src/constants.rs

use plotters::style::RGBColor;

// --- Cosmological parameters ---

// Matter density parameter shared by both models.
pub const OMEGA_M: f64 = 0.315;

// Present-day expansion rates in km/s/Mpc.
pub const H0_PLANCK: f64 = 67.4; // CMB-inferred under ΛCDM
pub const SIGMA_H0_PLANCK: f64 = 0.5;
pub const H0_SHOES: f64 = 73.0; // local distance ladder
pub const SIGMA_H0_SHOES: f64 = 1.0;

// ΛCDM is the cosmological-constant limit of CPL.
pub const LCDM_W0: f64 = -1.0;
pub const LCDM_WA: f64 = 0.0;

// Siamese toy model: close to ΛCDM at z >~ 1.5, mild late-time deviation that raises H0.
pub const SIAMESE_W0: f64 = -0.97; // slightly less negative than -1
pub const SIAMESE_WA: f64 = -0.25; // evolution mostly at low z

// --- Redshift grid ---
pub const Z_GRID_MIN: f64 = 0.0;
pub const Z_GRID_MAX: f64 = 3.0;
pub const Z_GRID_POINTS: usize = 400;

// --- Schematic H(z) points ---
// Rates are not listed here: they are evaluated on the ΛCDM curve so the points stay neutral.
pub const SCHEMATIC_Z: [f64; 6] = [0.1, 0.3, 0.6, 1.0, 1.5, 2.3];
pub const SCHEMATIC_H_ERR: [f64; 6] = [5.0, 5.0, 6.0, 7.0, 9.0, 12.0];

// --- Output image ---
pub const OUTPUT_FILENAME: &str = "Hz_comparison_siamese_vs_lcdm_v4_final.png";
pub const FIGURE_WIDTH_IN: f64 = 8.0;
pub const FIGURE_HEIGHT_IN: f64 = 5.0;
pub const OUTPUT_DPI: f64 = 300.0;
pub const PLOT_WIDTH: u32 = (FIGURE_WIDTH_IN * OUTPUT_DPI) as u32;
pub const PLOT_HEIGHT: u32 = (FIGURE_HEIGHT_IN * OUTPUT_DPI) as u32;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const POINTS_PER_INCH: f64 = 72.0;

// --- Axis limits ---
pub const Z_AXIS_MIN: f64 = 0.0;
pub const Z_AXIS_MAX: f64 = 3.0;
pub const H_AXIS_MIN: f64 = 60.0;
pub const H_AXIS_MAX: f64 = 240.0;

// --- Text ---
pub const CHART_TITLE: &str = "Hubble expansion: ΛCDM vs Siamese cosmology";
pub const X_AXIS_LABEL: &str = "Redshift z";
pub const Y_AXIS_LABEL: &str = "H(z) [km s⁻¹ Mpc⁻¹]";
pub const LABEL_LCDM: &str = "ΛCDM";
pub const LABEL_SIAMESE: &str = "Siamese cosmology";
pub const LABEL_SCHEMATIC_DATA: &str = "Schematic H(z) data (illustrative only)";
pub const LABEL_H0_PLANCK: &str = "H₀ Planck (CMB-inferred)";
pub const LABEL_H0_SHOES: &str = "H₀ SH0ES (local)";

// Font sizes in points; converted to pixels at OUTPUT_DPI by font_config.
pub const FONT_SIZE_TITLE_PT: f64 = 12.0;
pub const FONT_SIZE_AXIS_LABEL_PT: f64 = 10.0;
pub const FONT_SIZE_TICK_PT: f64 = 10.0;
pub const FONT_SIZE_LEGEND_PT: f64 = 8.0;

// --- Plot Color Assignments (tab10 cycle) ---
pub const COLOR_TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
pub const COLOR_TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
pub const COLOR_TAB_GREEN: RGBColor = RGBColor(44, 160, 44);
pub const COLOR_GRID: RGBColor = RGBColor(176, 176, 176);

pub const COLOR_LCDM: &RGBColor = &COLOR_TAB_BLUE;
pub const COLOR_SIAMESE: &RGBColor = &COLOR_TAB_ORANGE;
pub const COLOR_SCHEMATIC_DATA: &RGBColor = &COLOR_TAB_GREEN;
pub const COLOR_H0_PLANCK: &RGBColor = &COLOR_TAB_BLUE;
pub const COLOR_H0_SHOES: &RGBColor = &COLOR_TAB_ORANGE;

pub const ALPHA_SCHEMATIC_DATA: f64 = 0.85;
pub const ALPHA_H0_BAND: f64 = 0.15;
pub const ALPHA_GRID: f64 = 0.3;

// Stroke and marker sizes in points
pub const LINE_WIDTH_CURVE_PT: f64 = 2.0;
pub const LINE_WIDTH_ERROR_BAR_PT: f64 = 1.5;
pub const LINE_WIDTH_GRID_PT: f64 = 0.8;
pub const MARKER_SIZE_PT: f64 = 5.0;
// Dash pattern for the dashed curve, scaled by its line width
pub const DASH_LENGTH_FACTOR: f64 = 3.7;
pub const DASH_GAP_FACTOR: f64 = 1.6;

// --- Layout (points) ---
pub const FIGURE_PADDING_PT: f64 = 4.0;
pub const CHART_MARGIN_PT: f64 = 6.0;
pub const X_LABEL_AREA_PT: f64 = 34.0;
pub const Y_LABEL_AREA_PT: f64 = 44.0;
pub const AXIS_LINE_WIDTH_PT: f64 = 0.8;
pub const X_TICK_COUNT: usize = 7;
pub const Y_TICK_COUNT: usize = 10;

// Legend geometry (points)
pub const LEGEND_HANDLE_LENGTH_PT: f64 = 16.0;
pub const LEGEND_AREA_PT: f64 = 22.0;
pub const LEGEND_MARGIN_PT: f64 = 6.0;
pub const LEGEND_BACKGROUND_ALPHA: f64 = 0.8;

// src/constants.rs

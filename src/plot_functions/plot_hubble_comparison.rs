// src/plot_functions/plot_hubble_comparison.rs

use std::error::Error;
use std::path::Path;

use ndarray_stats::QuantileExt;
use tracing::{info, warn};

use crate::constants::{
    ALPHA_H0_BAND, ALPHA_SCHEMATIC_DATA, CHART_TITLE, COLOR_H0_PLANCK, COLOR_H0_SHOES, COLOR_LCDM,
    COLOR_SCHEMATIC_DATA, COLOR_SIAMESE, H_AXIS_MAX, H_AXIS_MIN, LABEL_SCHEMATIC_DATA,
    LINE_WIDTH_CURVE_PT, LINE_WIDTH_ERROR_BAR_PT, MARKER_SIZE_PT, PLOT_HEIGHT, PLOT_WIDTH,
    X_AXIS_LABEL, Y_AXIS_LABEL, Z_AXIS_MAX, Z_AXIS_MIN,
};
use crate::cosmology::{
    h_lcdm_array, h_siamese_array, CosmologyError, CosmologyModel, H0Band, RedshiftGrid,
    SchematicData,
};
use crate::font_config::{points_to_px, points_to_px_u32};
use crate::plot_framework::{
    draw_single_plot, ErrorBarSeries, HorizontalBand, LineStyle, PlotConfig, PlotSeries,
    RenderedChart,
};
use crate::types::{CurvePoints, HubbleCurve, RedshiftArray};

/// Everything drawn on the comparison chart, evaluated once.
#[derive(Debug, Clone)]
pub struct HubbleComparison {
    pub z: RedshiftArray,
    pub lcdm: HubbleCurve,
    pub siamese: HubbleCurve,
    pub data: SchematicData,
    pub bands: [H0Band; 2],
}

impl HubbleComparison {
    /// Evaluates both models on `grid` and places the schematic points on ΛCDM.
    pub fn compute(grid: &RedshiftGrid) -> Result<Self, CosmologyError> {
        let z = grid.values().clone();
        let lcdm = h_lcdm_array(&z)?;
        let siamese = h_siamese_array(&z)?;
        Ok(Self {
            z,
            lcdm,
            siamese,
            data: SchematicData::standard()?,
            bands: H0Band::reference_bands(),
        })
    }

    /// The standard 400-point grid on [0, 3].
    pub fn standard() -> Result<Self, CosmologyError> {
        Self::compute(&RedshiftGrid::standard())
    }
}

/// Pairs redshifts with rates for plotting.
pub fn curve_points(z: &RedshiftArray, h: &HubbleCurve) -> CurvePoints {
    z.iter().copied().zip(h.iter().copied()).collect()
}

/// Highest value of a curve; empty or NaN-containing curves are an error.
pub fn curve_peak(curve: &HubbleCurve) -> Result<f64, Box<dyn Error>> {
    Ok(*curve.max()?)
}

fn warn_if_clipped(label: &str, curve: &HubbleCurve) -> Result<(), Box<dyn Error>> {
    let peak = curve_peak(curve)?;
    if peak > H_AXIS_MAX {
        warn!(
            label,
            peak,
            limit = H_AXIS_MAX,
            "curve runs above the plotted H(z) range and is clipped"
        );
    }
    Ok(())
}

/// Builds the chart description. Legend order: ΛCDM, Siamese, schematic data,
/// Planck band, SH0ES band.
pub fn build_plot_config(comparison: &HubbleComparison) -> PlotConfig {
    let curve_width = points_to_px_u32(LINE_WIDTH_CURVE_PT);
    let lcdm_model = CosmologyModel::lcdm();
    let siamese_model = CosmologyModel::siamese();

    let series = vec![
        PlotSeries {
            data: curve_points(&comparison.z, &comparison.lcdm),
            label: lcdm_model.label.to_string(),
            color: *COLOR_LCDM,
            stroke_width: curve_width,
            line_style: LineStyle::Solid,
        },
        PlotSeries {
            data: curve_points(&comparison.z, &comparison.siamese),
            label: siamese_model.label.to_string(),
            color: *COLOR_SIAMESE,
            stroke_width: curve_width,
            line_style: LineStyle::Dashed,
        },
    ];

    // Marker size is a diameter in points
    let error_bars = vec![ErrorBarSeries {
        points: comparison.data.points(),
        label: LABEL_SCHEMATIC_DATA.to_string(),
        color: *COLOR_SCHEMATIC_DATA,
        opacity: ALPHA_SCHEMATIC_DATA,
        marker_radius: (points_to_px(MARKER_SIZE_PT) / 2.0).round().max(1.0) as u32,
        stroke_width: points_to_px_u32(LINE_WIDTH_ERROR_BAR_PT),
    }];

    let band_colors = [*COLOR_H0_PLANCK, *COLOR_H0_SHOES];
    let bands = comparison
        .bands
        .iter()
        .zip(band_colors)
        .map(|(band, color)| HorizontalBand {
            min_y: band.lower(),
            max_y: band.upper(),
            color,
            opacity: ALPHA_H0_BAND,
            label: band.label.to_string(),
        })
        .collect();

    PlotConfig {
        title: CHART_TITLE.to_string(),
        x_range: Z_AXIS_MIN..Z_AXIS_MAX,
        y_range: H_AXIS_MIN..H_AXIS_MAX,
        series,
        error_bars,
        bands,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
    }
}

/// Generates the H(z) comparison chart and writes it to `output_path`.
pub fn plot_hubble_comparison(output_path: &Path) -> Result<RenderedChart, Box<dyn Error>> {
    let comparison = HubbleComparison::standard()?;
    info!(
        points = comparison.z.len(),
        h0_lcdm = comparison.lcdm[0],
        h0_siamese = comparison.siamese[0],
        "evaluated expansion histories"
    );

    warn_if_clipped(CosmologyModel::lcdm().label, &comparison.lcdm)?;
    warn_if_clipped(CosmologyModel::siamese().label, &comparison.siamese)?;

    let plot_config = build_plot_config(&comparison);
    draw_single_plot(output_path, &plot_config, (PLOT_WIDTH, PLOT_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LABEL_H0_PLANCK, LABEL_H0_SHOES, LABEL_LCDM, LABEL_SIAMESE};
    use crate::plot_framework::legend_labels;

    #[test]
    fn test_comparison_uses_shared_grid() {
        let comparison = HubbleComparison::standard().unwrap();
        assert_eq!(comparison.z.len(), 400);
        assert_eq!(comparison.lcdm.len(), 400);
        assert_eq!(comparison.siamese.len(), 400);
        assert_eq!(comparison.lcdm[0], 67.4);
        assert_eq!(comparison.siamese[0], 73.0);
    }

    #[test]
    fn test_legend_order() {
        let config = build_plot_config(&HubbleComparison::standard().unwrap());
        assert_eq!(
            legend_labels(&config),
            vec![
                LABEL_LCDM,
                LABEL_SIAMESE,
                LABEL_SCHEMATIC_DATA,
                LABEL_H0_PLANCK,
                LABEL_H0_SHOES
            ]
        );
    }

    #[test]
    fn test_plot_config_limits_and_styles() {
        let config = build_plot_config(&HubbleComparison::standard().unwrap());
        assert_eq!(config.x_range, 0.0..3.0);
        assert_eq!(config.y_range, 60.0..240.0);
        assert_eq!(config.series[0].line_style, LineStyle::Solid);
        assert_eq!(config.series[1].line_style, LineStyle::Dashed);
        assert_eq!(config.series[0].stroke_width, 8);
        assert_eq!(config.bands[0].min_y, 66.9);
        assert_eq!(config.bands[1].max_y, 74.0);
        assert_eq!(config.error_bars[0].points.len(), 6);
    }

    #[test]
    fn test_curves_exceed_plot_limit_at_high_redshift() {
        let comparison = HubbleComparison::standard().unwrap();
        assert!(curve_peak(&comparison.lcdm).unwrap() > H_AXIS_MAX);
        assert!(curve_peak(&comparison.siamese).unwrap() > H_AXIS_MAX);
    }

    #[test]
    fn test_curve_peak_rejects_empty_curve() {
        assert!(curve_peak(&HubbleCurve::zeros(0)).is_err());
    }
}

// src/plot_functions/plot_hubble_comparison.rs

// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, DashedPathElement, EmptyElement, ErrorBar, PathElement, Rectangle};
use plotters::style::colors::{BLACK, TRANSPARENT, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use tracing::debug;

use crate::constants::{
    ALPHA_GRID, AXIS_LINE_WIDTH_PT, CHART_MARGIN_PT, COLOR_GRID, DASH_GAP_FACTOR,
    DASH_LENGTH_FACTOR, FIGURE_PADDING_PT, LEGEND_AREA_PT, LEGEND_BACKGROUND_ALPHA,
    LEGEND_HANDLE_LENGTH_PT, LEGEND_MARGIN_PT, LINE_WIDTH_GRID_PT, OUTPUT_DPI, X_LABEL_AREA_PT,
    X_TICK_COUNT, Y_LABEL_AREA_PT, Y_TICK_COUNT,
};
use crate::font_config::{
    font_tuple_axis_label, font_tuple_legend, font_tuple_tick, font_tuple_title, points_to_px_u32,
    register_bundled_font,
};
use crate::png_output::write_png_with_dpi;

/// Decimals shown on the redshift axis ticks
pub const X_TICK_DECIMALS: usize = 1;
/// Decimals shown on the expansion-rate axis ticks
pub const Y_TICK_DECIMALS: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub line_style: LineStyle,
}

/// Points with symmetric vertical uncertainties, drawn as error bars with a circle marker.
#[derive(Clone)]
pub struct ErrorBarSeries {
    pub points: Vec<(f64, f64, f64)>, // (x, y, half-height)
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64,
    pub marker_radius: u32,
    pub stroke_width: u32,
}

/// Represents a horizontal band spanning the whole x range (e.g. a measured H0 ± σ)
#[derive(Clone)]
pub struct HorizontalBand {
    pub min_y: f64,
    pub max_y: f64,
    pub color: RGBColor,
    pub opacity: f64, // 0.0 to 1.0
    pub label: String,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub error_bars: Vec<ErrorBarSeries>,
    pub bands: Vec<HorizontalBand>,
    pub x_label: String,
    pub y_label: String,
}

/// A chart rasterized to packed 8-bit RGB, row-major.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Legend entries in drawing order: line series, then error-bar series, then bands.
/// Empty labels get no entry.
pub fn legend_labels(config: &PlotConfig) -> Vec<&str> {
    config
        .series
        .iter()
        .map(|s| s.label.as_str())
        .chain(config.error_bars.iter().map(|e| e.label.as_str()))
        .chain(config.bands.iter().map(|b| b.label.as_str()))
        .filter(|label| !label.is_empty())
        .collect()
}

/// Formats an axis tick with a fixed number of decimals. Negative zero prints as zero.
pub fn format_axis_tick(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

fn in_range(value: f64, range: &Range<f64>) -> bool {
    value >= range.start && value <= range.end
}

/// Liang-Barsky clip of one segment against the plotting rectangle.
/// Endpoints that are already inside are returned unchanged.
fn clip_segment(
    p0: (f64, f64),
    p1: (f64, f64),
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    let boundaries = [
        (-dx, p0.0 - x_range.start),
        (dx, x_range.end - p0.0),
        (-dy, p0.1 - y_range.start),
        (dy, y_range.end - p0.1),
    ];
    for (p, q) in boundaries {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t_exit {
                return None;
            }
            t_enter = t_enter.max(t);
        } else {
            if t < t_enter {
                return None;
            }
            t_exit = t_exit.min(t);
        }
    }

    let start = if t_enter == 0.0 {
        p0
    } else {
        (p0.0 + t_enter * dx, p0.1 + t_enter * dy)
    };
    let end = if t_exit == 1.0 {
        p1
    } else {
        (p0.0 + t_exit * dx, p0.1 + t_exit * dy)
    };
    Some((start, end))
}

/// Clips a polyline to the plotting rectangle.
///
/// Plotters clamps out-of-range coordinates onto the border instead of clipping
/// them, so a curve leaving the axes would otherwise run along the frame.
/// Returns the visible runs; each has at least two points. Non-finite points
/// break the line.
pub fn clip_polyline(
    points: &[(f64, f64)],
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let finite = p0.0.is_finite() && p0.1.is_finite() && p1.0.is_finite() && p1.1.is_finite();
        let clipped = if finite {
            clip_segment(p0, p1, x_range, y_range)
        } else {
            None
        };

        match clipped {
            Some((start, end)) => {
                if current.last() != Some(&start) {
                    if current.len() >= 2 {
                        runs.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                    current.push(start);
                }
                current.push(end);
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Dash and gap lengths in pixels for a dashed stroke of the given width.
pub fn dash_pattern(stroke_width: u32) -> (u32, u32) {
    let width = f64::from(stroke_width.max(1));
    (
        (width * DASH_LENGTH_FACTOR).round() as u32,
        (width * DASH_GAP_FACTOR).round().max(1.0) as u32,
    )
}

/// Draws the chart described by `plot_config` into `area`.
///
/// Drawing order: bands, line series, error bars with markers. Legend order
/// follows `legend_labels`.
pub fn draw_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let x_range = plot_config.x_range.clone();
    let y_range = plot_config.y_range.clone();

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, font_tuple_title())
        .margin(points_to_px_u32(CHART_MARGIN_PT))
        .x_label_area_size(points_to_px_u32(X_LABEL_AREA_PT))
        .y_label_area_size(points_to_px_u32(Y_LABEL_AREA_PT))
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_TICK_COUNT)
        .y_labels(Y_TICK_COUNT)
        .x_label_formatter(&|x| format_axis_tick(*x, X_TICK_DECIMALS))
        .y_label_formatter(&|y| format_axis_tick(*y, Y_TICK_DECIMALS))
        .bold_line_style(
            COLOR_GRID
                .mix(ALPHA_GRID)
                .stroke_width(points_to_px_u32(LINE_WIDTH_GRID_PT)),
        )
        .light_line_style(TRANSPARENT)
        .axis_style(BLACK.stroke_width(points_to_px_u32(AXIS_LINE_WIDTH_PT)))
        .label_style(font_tuple_tick())
        .axis_desc_style(font_tuple_axis_label())
        .draw()?;

    // Shade bands BEFORE series (so curves appear on top)
    for band in &plot_config.bands {
        let (lower, upper) = (band.min_y.max(y_range.start), band.max_y.min(y_range.end));
        if !(lower < upper) {
            debug!(label = %band.label, "band outside the y range, not shaded");
            continue;
        }
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_range.start, lower), (x_range.end, upper)],
            band.color.mix(band.opacity).filled(),
        )))?;
    }

    let handle = points_to_px_u32(LEGEND_HANDLE_LENGTH_PT) as i32;
    let mut legend_series_count = 0;

    for s in &plot_config.series {
        let runs = clip_polyline(&s.data, &x_range, &y_range);
        if runs.is_empty() {
            debug!(label = %s.label, "series has no visible segment");
        }
        let style = s.color.stroke_width(s.stroke_width);
        let (dash, gap) = dash_pattern(s.stroke_width);

        let series = match s.line_style {
            LineStyle::Solid => {
                chart.draw_series(runs.into_iter().map(|run| PathElement::new(run, style)))?
            }
            LineStyle::Dashed => chart.draw_series(
                runs.into_iter()
                    .map(|run| DashedPathElement::new(run, dash, gap, style)),
            )?,
        };

        if !s.label.is_empty() {
            match s.line_style {
                LineStyle::Solid => {
                    series.label(&s.label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + handle, y)], style)
                    });
                }
                LineStyle::Dashed => {
                    series.label(&s.label).legend(move |(x, y)| {
                        DashedPathElement::new(vec![(x, y), (x + handle, y)], dash, gap, style)
                    });
                }
            }
            legend_series_count += 1;
        }
    }

    for e in &plot_config.error_bars {
        let color = e.color.mix(e.opacity);
        let bar_style = color.stroke_width(e.stroke_width);
        let marker_style = color.filled();
        let marker_radius = e.marker_radius;

        let visible: Vec<(f64, f64, f64)> = e
            .points
            .iter()
            .copied()
            .filter(|&(x, y, _)| in_range(x, &x_range) && in_range(y, &y_range))
            .collect();
        if visible.len() < e.points.len() {
            debug!(
                label = %e.label,
                hidden = e.points.len() - visible.len(),
                "error-bar points outside the axes"
            );
        }

        // Bars are cut at the axes; no caps
        chart.draw_series(visible.iter().map(|&(x, y, err)| {
            ErrorBar::new_vertical(
                x,
                (y - err).max(y_range.start),
                y,
                (y + err).min(y_range.end),
                bar_style,
                0,
            )
        }))?;
        let markers = chart.draw_series(
            visible
                .iter()
                .map(|&(x, y, _)| Circle::new((x, y), marker_radius, marker_style)),
        )?;

        if !e.label.is_empty() {
            let bar_half = (marker_radius as i32) * 2;
            markers.label(&e.label).legend(move |(x, y)| {
                EmptyElement::at((x + handle / 2, y))
                    + PathElement::new(vec![(0, -bar_half), (0, bar_half)], bar_style)
                    + Circle::new((0, 0), marker_radius, marker_style)
            });
            legend_series_count += 1;
        }
    }

    // Add bands to legend AFTER series (so they appear at the end of legend)
    for band in &plot_config.bands {
        if band.label.is_empty() {
            continue;
        }
        let fill = band.color.mix(band.opacity).filled();
        let half_height = handle / 4;
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(&band.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - half_height), (x + handle, y + half_height)], fill)
            });
        legend_series_count += 1;
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .margin(points_to_px_u32(LEGEND_MARGIN_PT))
            .legend_area_size(points_to_px_u32(LEGEND_AREA_PT))
            .background_style(WHITE.mix(LEGEND_BACKGROUND_ALPHA))
            .border_style(COLOR_GRID)
            .label_font(font_tuple_legend())
            .draw()?;
    }

    Ok(())
}

/// Rasterizes the chart on a white figure of `width` x `height` pixels.
pub fn render_chart(
    plot_config: &PlotConfig,
    (width, height): (u32, u32),
) -> Result<RenderedChart, Box<dyn Error>> {
    if width == 0 || height == 0 {
        return Err(format!("cannot render a {width}x{height} figure").into());
    }
    register_bundled_font()?;

    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    {
        let root_area = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root_area.fill(&WHITE)?;
        let padding = points_to_px_u32(FIGURE_PADDING_PT);
        let figure = root_area.margin(padding, padding, padding, padding);
        draw_chart(&figure, plot_config)?;
        root_area.present()?;
    }
    debug!(width, height, "chart rasterized");

    Ok(RenderedChart { width, height, rgb })
}

/// Renders a single chart and writes it as a PNG tagged with the output DPI.
pub fn draw_single_plot(
    output_path: &Path,
    plot_config: &PlotConfig,
    size: (u32, u32),
) -> Result<RenderedChart, Box<dyn Error>> {
    let rendered = render_chart(plot_config, size)?;
    write_png_with_dpi(
        output_path,
        &rendered.rgb,
        (rendered.width, rendered.height),
        OUTPUT_DPI,
    )?;
    println!("  Chart saved as '{}'.", output_path.display());
    Ok(rendered)
}


// src/plot_framework.rs

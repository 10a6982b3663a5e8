// src/display.rs
//
// On-screen preview of the rendered chart. The PNG on disk is the primary
// output; the window is shown only when a display is reachable and never turns
// a successful run into a failure.

use tracing::{info, warn};

use crate::plot_framework::RenderedChart;

/// What happened when the chart was offered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    Shown,
    Skipped(String),
}

/// True when a graphical session looks reachable.
/// Linux and the BSDs need an X11 or Wayland display; other platforms always have one.
pub fn display_available() -> bool {
    if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd"
    )) {
        ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
    } else {
        true
    }
}

/// Opens a window showing `chart` and blocks until it is closed.
/// Falls back to file-only output (with a warning) when no window can be opened.
pub fn show_chart(chart: &RenderedChart, window_title: &str) -> DisplayOutcome {
    if !display_available() {
        let reason = "no graphical display detected".to_string();
        warn!(%reason, "skipping chart display");
        return DisplayOutcome::Skipped(reason);
    }

    match viewer::run(chart, window_title) {
        Ok(()) => {
            info!("chart window closed");
            DisplayOutcome::Shown
        }
        Err(reason) => {
            warn!(%reason, "could not open chart window, output kept on disk only");
            DisplayOutcome::Skipped(reason)
        }
    }
}

#[cfg(feature = "display")]
mod viewer {
    use eframe::egui;

    use crate::constants::{FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};
    use crate::plot_framework::RenderedChart;

    // Initial window size in logical points
    const WINDOW_SCALE: f32 = 120.0;

    struct ChartViewer {
        image: Option<egui::ColorImage>,
        texture: Option<egui::TextureHandle>,
    }

    impl eframe::App for ChartViewer {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            if let Some(image) = self.image.take() {
                self.texture =
                    Some(ctx.load_texture("hubble-chart", image, egui::TextureOptions::LINEAR));
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::from_texture(texture).shrink_to_fit());
                    });
                }
            });
        }
    }

    pub(super) fn run(chart: &RenderedChart, window_title: &str) -> Result<(), String> {
        let image = egui::ColorImage::from_rgb(
            [chart.width as usize, chart.height as usize],
            &chart.rgb,
        );
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(window_title)
                .with_inner_size([
                    FIGURE_WIDTH_IN as f32 * WINDOW_SCALE,
                    FIGURE_HEIGHT_IN as f32 * WINDOW_SCALE,
                ]),
            ..Default::default()
        };

        eframe::run_native(
            window_title,
            native_options,
            Box::new(move |_cc| {
                Ok(Box::new(ChartViewer {
                    image: Some(image),
                    texture: None,
                }))
            }),
        )
        .map_err(|e| e.to_string())
    }
}

#[cfg(not(feature = "display"))]
mod viewer {
    use crate::plot_framework::RenderedChart;

    pub(super) fn run(_chart: &RenderedChart, _window_title: &str) -> Result<(), String> {
        Err("built without the `display` feature".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_skipped_or_shown() {
        // Headless test runners have no display; must never panic
        if !display_available() {
            let chart = RenderedChart {
                width: 1,
                height: 1,
                rgb: vec![255, 255, 255],
            };
            assert!(matches!(show_chart(&chart, "test"), DisplayOutcome::Skipped(_)));
        }
    }
}

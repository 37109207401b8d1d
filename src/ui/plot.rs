use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, LineStyle, Plot, VLine};
use marks_viewer::data::model::HistogramRecord;

use crate::state::AppState;

const BAR_COLOR: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);

// ---------------------------------------------------------------------------
// Histogram plot (central panel)
// ---------------------------------------------------------------------------

/// Render the marks histogram in the central panel.
pub fn histogram_plot(ui: &mut Ui, state: &AppState) {
    let report = match &state.report {
        Some(report) => report,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV file to view marks  (File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Distribution of Marks");
    });

    let histogram = &report.histogram;

    Plot::new("histogram_plot")
        .legend(Legend::default())
        .x_axis_label("Marks (%)")
        .y_axis_label("Frequency")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(frequency_bars(histogram));

            plot_ui.vline(
                VLine::new(histogram.mean)
                    .name(format!("Mean: {:.2}%", histogram.mean))
                    .color(Color32::RED)
                    .width(2.0)
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.vline(
                VLine::new(histogram.median)
                    .name(format!("Median: {:.2}%", histogram.median))
                    .color(Color32::GREEN)
                    .width(2.0)
                    .style(LineStyle::dashed_loose()),
            );
        });
}

fn frequency_bars(histogram: &HistogramRecord) -> BarChart {
    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .stroke((1.0, Color32::BLACK))
        })
        .collect();

    BarChart::new(bars).name("Frequency").color(BAR_COLOR)
}

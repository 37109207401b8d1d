use eframe::egui::{self, RichText, Ui};
use marks_viewer::data::model::StatisticsRecord;

// ---------------------------------------------------------------------------
// Statistic cards
// ---------------------------------------------------------------------------

/// A labelled, pre-formatted statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Count as an integer, everything else to two decimals with a `%` suffix,
/// except the standard deviation which has no unit.
pub fn stat_cards(stats: &StatisticsRecord) -> Vec<StatCard> {
    let std_dev = stats
        .std_dev
        .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));

    vec![
        StatCard { label: "Count", value: stats.count.to_string() },
        StatCard { label: "Mean", value: percent(stats.mean) },
        StatCard { label: "Median", value: percent(stats.median) },
        StatCard { label: "Std Dev", value: std_dev },
        StatCard { label: "Min", value: percent(stats.min) },
        StatCard { label: "Max", value: percent(stats.max) },
        StatCard { label: "Q1", value: percent(stats.q1) },
        StatCard { label: "Q3", value: percent(stats.q3) },
    ]
}

/// Render the cards two per row.
pub fn stats_grid(ui: &mut Ui, stats: &StatisticsRecord) {
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            for (i, card) in stat_cards(stats).iter().enumerate() {
                egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                    ui.set_min_width(90.0);
                    ui.vertical(|ui: &mut Ui| {
                        ui.label(RichText::new(card.label).small());
                        ui.label(RichText::new(&card.value).heading().strong());
                    });
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

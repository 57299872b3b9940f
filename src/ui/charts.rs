use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Mesh, RichText, Sense, Shape, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color;
use crate::data::aggregate::{AggregateSummary, ReviewMeans};

const CHART_HEIGHT: f32 = 280.0;
const PIE_SIZE: f32 = 240.0;

// ---------------------------------------------------------------------------
// Review distribution pie
// ---------------------------------------------------------------------------

/// Pie of the mean review percentages of the current view.
pub fn review_pie(ui: &mut Ui, means: Option<&ReviewMeans>) {
    let Some(means) = means else {
        ui.label("No medicines match the current filters.");
        return;
    };
    let slices = means.labelled();
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        ui.label("All review percentages are zero.");
        return;
    }
    let colors = color::pastel(slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let (response, painter) = ui.allocate_painter(Vec2::splat(PIE_SIZE), Sense::hover());
        let center = response.rect.center();
        let radius = PIE_SIZE * 0.45;

        // First slice starts at twelve o'clock.
        let mut start = -FRAC_PI_2;
        for ((_, value), &fill) in slices.iter().zip(&colors) {
            let share = (*value / total) as f32;
            let sweep = TAU * share;
            let steps = ((sweep / 0.05).ceil() as u32).max(1);

            let mut mesh = Mesh::default();
            mesh.colored_vertex(center, fill);
            for s in 0..=steps {
                let angle = start + sweep * s as f32 / steps as f32;
                mesh.colored_vertex(center + radius * Vec2::angled(angle), fill);
            }
            for s in 1..=steps {
                mesh.add_triangle(0, s, s + 1);
            }
            painter.add(Shape::mesh(mesh));

            if share > 0.0 {
                let label_pos = center + radius * 0.62 * Vec2::angled(start + sweep / 2.0);
                painter.text(
                    label_pos,
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", share * 100.0),
                    FontId::proportional(13.0),
                    Color32::BLACK,
                );
            }
            start += sweep;
        }

        ui.vertical(|ui: &mut Ui| {
            for ((label, value), &fill) in slices.iter().zip(&colors) {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(fill));
                    ui.label(format!("{label}: {value:.1}"));
                });
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Ranking bar charts
// ---------------------------------------------------------------------------

/// Horizontal bars of the most frequent manufacturers.
pub fn manufacturer_bars(ui: &mut Ui, summary: &AggregateSummary) {
    let entries: Vec<(String, f64)> = summary
        .manufacturer_counts
        .iter()
        .map(|(name, count)| (name.clone(), *count as f64))
        .collect();
    let colors = color::viridis(entries.len());
    ranked_bars(ui, "manufacturer_bars", entries, colors, "Number of Medicines");
}

/// Horizontal bars of the best medicines by excellent review.
pub fn top_rated_bars(ui: &mut Ui, summary: &AggregateSummary) {
    let entries: Vec<(String, f64)> = summary
        .top_rated
        .iter()
        .map(|m| (m.name.clone(), m.excellent_pct))
        .collect();
    let colors = color::magma(entries.len());
    ranked_bars(ui, "top_rated_bars", entries, colors, "Excellent Review %");
}

/// One bar per entry, first entry on top, labelled on the y axis.
fn ranked_bars(
    ui: &mut Ui,
    id: &str,
    entries: Vec<(String, f64)>,
    colors: Vec<Color32>,
    x_label: &str,
) {
    if entries.is_empty() {
        ui.label("No medicines match the current filters.");
        return;
    }

    let bars: Vec<Bar> = entries
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(rank, ((name, value), fill))| {
            Bar::new(-(rank as f64), *value)
                .name(name)
                .fill(fill)
                .width(0.7)
        })
        .collect();

    let labels: Vec<String> = entries.into_iter().map(|(name, _)| name).collect();
    let y_labels = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let rank = -mark.value;
        if rank.fract() != 0.0 || rank < 0.0 {
            return String::new();
        }
        labels.get(rank as usize).cloned().unwrap_or_default()
    };

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_formatter(y_labels)
        .y_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .show_grid(egui::Vec2b::new(true, false))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

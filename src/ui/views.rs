use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, StatKind, View};
use crate::stats::{central, frequency, trend};

// ---------------------------------------------------------------------------
// Central panel: dispatch to the active view
// ---------------------------------------------------------------------------

/// Render the currently selected view in the central panel.
pub fn central_view(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a listing file to start  (File → Open…)");
        });
        return;
    }

    match state.view {
        View::Statistics => statistics_view(ui, state),
        View::PriceByModel => price_by_model_view(ui, state),
        View::BrandFrequency => brand_frequency_view(ui, state),
        View::DpiTrend => dpi_trend_view(ui, state),
        View::PriceByCategory => price_by_category_view(ui, state),
        View::CountByCategory => count_by_category_view(ui, state),
    }
}

/// Explicit empty state for a filter with zero matching rows.
fn no_data_notice(ui: &mut Ui) {
    ui.label(
        RichText::new("No data for this filter.")
            .color(Color32::YELLOW)
            .strong(),
    );
}

// ---------------------------------------------------------------------------
// View 1: central tendency + data table
// ---------------------------------------------------------------------------

fn statistics_view(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Basic statistics");

    ui.horizontal(|ui: &mut Ui| {
        for kind in StatKind::ALL {
            ui.radio_value(&mut state.stat_kind, kind, kind.label());
        }
    });

    let prices = state.visible_prices();
    let value = match state.stat_kind {
        StatKind::Mean => central::mean(&prices),
        StatKind::Median => central::median(&prices),
        StatKind::Mode => central::mode(&prices),
    };
    match value {
        Ok(v) => {
            ui.label(
                RichText::new(format!("{} of prices: R$ {v:.2}", state.stat_kind.label()))
                    .size(18.0)
                    .strong(),
            );
        }
        Err(_) => no_data_notice(ui),
    }

    ui.separator();
    ui.heading("Data table");
    // The table always shows the full dataset, as in the original dashboard.
    let Some(ds) = state.dataset.clone() else {
        return;
    };
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(90.0))
        .header(22.0, |mut header| {
            for title in ["Brand", "Model", "Price (R$)", "DPI", "Category"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for rec in &ds.records {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&rec.brand);
                    });
                    row.col(|ui| {
                        ui.label(&rec.model);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", rec.price));
                    });
                    row.col(|ui| {
                        ui.label(rec.dpi.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&rec.category);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// View 2: price per model (filtered)
// ---------------------------------------------------------------------------

fn price_by_model_view(ui: &mut Ui, state: &AppState) {
    ui.heading("Listing prices");

    let records = state.visible_records();
    if records.is_empty() {
        no_data_notice(ui);
        return;
    }

    let labels: Vec<String> = records.iter().map(|r| r.model.clone()).collect();
    let bars: Vec<Bar> = records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Bar::new(i as f64, rec.price)
                .width(0.6)
                .fill(state.brand_colors.color_for(&rec.brand))
                .name(format!("{} — R$ {:.2}", rec.model, rec.price))
        })
        .collect();

    Plot::new("price_by_model")
        .y_axis_label("Price (R$)")
        .show_grid([false, true])
        .x_axis_formatter(label_ticks(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// View 3: brand frequency table + distribution chart (full dataset)
// ---------------------------------------------------------------------------

fn brand_frequency_view(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else { return };

    ui.heading("Brand frequency");
    let table = frequency::brand_frequency(&ds.records);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(130.0))
        .header(22.0, |mut header| {
            for title in ["Brand", "Absolute frequency", "Relative frequency (%)"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row_data in &table {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&row_data.brand);
                    });
                    row.col(|ui| {
                        ui.label(row_data.count.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", row_data.percentage));
                    });
                });
            }
        });

    ui.separator();
    ui.heading("Brand distribution (%)");

    let labels: Vec<String> = table.iter().map(|r| r.brand.clone()).collect();
    let bars: Vec<Bar> = table
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.percentage)
                .width(0.6)
                .fill(state.brand_colors.color_for(&r.brand))
                .name(format!("{} — {:.2}%", r.brand, r.percentage))
        })
        .collect();
    let label_points: Vec<(f64, f64, String)> = table
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.percentage, format!("{:.1}%", r.percentage)))
        .collect();

    Plot::new("brand_distribution")
        .y_axis_label("Share (%)")
        .show_grid([false, true])
        .x_axis_formatter(label_ticks(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (x, y, text) in label_points {
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y), RichText::new(text).strong())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// View 4: DPI vs price scatter with trend line (full dataset)
// ---------------------------------------------------------------------------

fn dpi_trend_view(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else { return };

    ui.heading("DPI vs price with trend line");

    let fit = trend::linear_fit(&ds.records);
    match &fit {
        Ok(f) => {
            ui.label(format!(
                "price ≈ {:.4} × dpi + {:.2}",
                f.slope, f.intercept
            ));
        }
        Err(_) => {
            ui.label(
                RichText::new("Trend line unavailable: all listings share the same DPI.")
                    .color(Color32::YELLOW),
            );
        }
    }

    let scatter: PlotPoints = ds
        .records
        .iter()
        .map(|r| [r.dpi as f64, r.price])
        .collect();

    let dpi_min = ds.records.iter().map(|r| r.dpi).min().unwrap_or(0) as f64;
    let dpi_max = ds.records.iter().map(|r| r.dpi).max().unwrap_or(0) as f64;

    Plot::new("dpi_trend")
        .x_axis_label("DPI")
        .y_axis_label("Price (R$)")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(scatter)
                    .radius(4.0)
                    .color(Color32::from_rgb(150, 80, 190))
                    .name("listings"),
            );
            if let Ok(f) = &fit {
                let line: PlotPoints = [dpi_min, dpi_max]
                    .iter()
                    .map(|&x| [x, f.predict(x)])
                    .collect();
                plot_ui.line(
                    Line::new(line)
                        .color(Color32::RED)
                        .style(egui_plot::LineStyle::dashed_loose())
                        .name("trend"),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// View 5: mean price per category (full dataset)
// ---------------------------------------------------------------------------

fn price_by_category_view(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else { return };

    ui.heading("Mean price per category");

    let groups = frequency::grouped_mean(&ds.records);
    let labels: Vec<String> = groups.iter().map(|(c, _)| c.clone()).collect();
    let bars: Vec<Bar> = groups
        .iter()
        .enumerate()
        .map(|(i, (category, mean))| {
            Bar::new(i as f64, *mean)
                .width(0.6)
                .fill(state.category_colors.color_for(category))
                .name(format!("{category} — R$ {mean:.2}"))
        })
        .collect();
    let label_points: Vec<(f64, f64, String)> = groups
        .iter()
        .enumerate()
        .map(|(i, (_, mean))| (i as f64, *mean, format!("R$ {mean:.2}")))
        .collect();

    Plot::new("price_by_category")
        .y_axis_label("Mean price (R$)")
        .show_grid([false, true])
        .x_axis_formatter(label_ticks(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (x, y, text) in label_points {
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y), RichText::new(text).strong())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// View 6: listings per category (full dataset)
// ---------------------------------------------------------------------------

fn count_by_category_view(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else { return };

    ui.heading("Listings per category");

    let counts = frequency::count_by_category(&ds.records);
    let labels: Vec<String> = counts.iter().map(|(c, _)| c.clone()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (category, n))| {
            Bar::new(i as f64, *n as f64)
                .width(0.6)
                .fill(state.category_colors.color_for(category))
                .name(format!("{category} — {n} units"))
        })
        .collect();
    let label_points: Vec<(f64, f64, String)> = counts
        .iter()
        .enumerate()
        .map(|(i, (_, n))| (i as f64, *n as f64, format!("{n} units")))
        .collect();

    Plot::new("count_by_category")
        .y_axis_label("Listings")
        .show_grid([false, true])
        .x_axis_formatter(label_ticks(labels))
        // Counts are whole numbers; hide fractional grid marks.
        .y_axis_formatter(|mark, _range| {
            if mark.value.fract() == 0.0 && mark.value >= 0.0 {
                format!("{}", mark.value as i64)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (x, y, text) in label_points {
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y), RichText::new(text).strong())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Plot helper: label ticks for category-style bar plots
// ---------------------------------------------------------------------------

/// Axis formatter showing the given labels at integer bar positions and
/// nothing in between.
fn label_ticks(
    labels: Vec<String>,
) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        if mark.value.fract() != 0.0 || mark.value < 0.0 {
            return String::new();
        }
        labels
            .get(mark.value as usize)
            .cloned()
            .unwrap_or_default()
    }
}

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::model::CompanyDataset;
use crate::report::{HISTOGRAM_BINS, format_index, histogram, index_values};

const BAR_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 90, 90, 178);

// ---------------------------------------------------------------------------
// Index distribution histogram
// ---------------------------------------------------------------------------

/// Render the histogram of the visible companies' index values.
pub fn index_histogram(ui: &mut Ui, dataset: &CompanyDataset, visible: &[usize]) {
    let values = index_values(dataset, visible);
    let bars: Vec<Bar> = histogram(&values, HISTOGRAM_BINS)
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!(
                    "{} – {}",
                    format_index(bin.start),
                    format_index(bin.end)
                ))
        })
        .collect();

    let chart = BarChart::new(bars).color(BAR_COLOR).name("Companies");

    Plot::new("index_histogram")
        .height(300.0)
        .x_axis_label("Digitalization index")
        .y_axis_label("Number of companies")
        .allow_scroll(false)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

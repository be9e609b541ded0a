use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::report::TOP_N;
use crate::state::{AppState, LoadStatus};
use crate::ui::{plot, tables};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

enum BulkSelection {
    All,
    None,
}

/// Render the left filter panel. Edits a copy of the current filters and
/// hands it back to the state, which recomputes the view if anything changed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let mut params = state.filters.clone();
    let mut bulk = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Industry multi-select ----
            let n_selected = params.industries.len();
            let n_total = state.industry_options.len();
            ui.strong(format!("Industry  ({n_selected}/{n_total})"));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    bulk = Some(BulkSelection::All);
                }
                if ui.small_button("None").clicked() {
                    bulk = Some(BulkSelection::None);
                }
            });

            for &industry in &state.industry_options {
                let text = RichText::new(industry.label())
                    .color(state.color_map.color_for(industry));
                let mut checked = params.industries.contains(&industry);
                if ui.checkbox(&mut checked, text).changed() {
                    if checked {
                        params.industries.insert(industry);
                    } else {
                        params.industries.remove(&industry);
                    }
                }
            }
            ui.separator();

            // ---- Index range ----
            ui.strong("Digitalization index range");
            let (min, max) = state.index_bounds;
            let (mut low, mut high) = params.index_range;
            // Only the label is rounded; the stored bounds keep full precision.
            let low_changed = ui
                .add(
                    Slider::new(&mut low, min..=max)
                        .text("min")
                        .custom_formatter(|v, _| format!("{v:.2}")),
                )
                .changed();
            let high_changed = ui
                .add(
                    Slider::new(&mut high, min..=max)
                        .text("max")
                        .custom_formatter(|v, _| format!("{v:.2}")),
                )
                .changed();
            if low_changed || high_changed {
                params = params.clone().with_index_range(low, high);
            }
            ui.separator();

            // ---- Free-text search ----
            ui.strong("Search stock code / company name");
            ui.text_edit_singleline(&mut params.search_term);
        });

    state.update_filters(params);
    match bulk {
        Some(BulkSelection::All) => state.select_all(),
        Some(BulkSelection::None) => state.select_none(),
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Digitalization Index Explorer");
        ui.separator();

        match &state.load_status {
            LoadStatus::Loaded(n) => {
                ui.colored_label(
                    Color32::GREEN,
                    format!("Loaded {n} companies (index and industry computed)"),
                );
                ui.separator();
                ui.label(format!(
                    "{n} companies loaded, {} visible",
                    state.visible_indices.len()
                ));
            }
            LoadStatus::Empty => {
                ui.colored_label(Color32::YELLOW, "Data file contains no companies");
            }
            LoadStatus::Failed(_) => {
                ui.colored_label(Color32::RED, "Data load failed");
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – report
// ---------------------------------------------------------------------------

/// Render the report: result table, histogram and top-N ranking. On a failed
/// or empty load only the error banner and warning are shown.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Listed Company Digital Transformation Index");
    ui.label(
        "The index is a weighted sum of technology keyword frequencies mined from \
         annual reports. Filter by industry, index range or stock code / name.",
    );
    ui.separator();

    let Some(dataset) = &state.dataset else {
        if let LoadStatus::Failed(message) = &state.load_status {
            ui.colored_label(Color32::RED, RichText::new(message).strong());
        }
        ui.colored_label(
            Color32::YELLOW,
            "Data failed to load; check the file path or format",
        );
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let visible = &state.visible_indices;

            ui.heading(format!("Results ({} companies)", visible.len()));
            tables::result_table(ui, dataset, visible, &state.color_map);
            ui.add_space(12.0);

            ui.heading("Digitalization index distribution");
            plot::index_histogram(ui, dataset, visible);
            ui.add_space(12.0);

            ui.heading(format!("Top {TOP_N} companies by digitalization index"));
            let top = crate::report::top_n(dataset, visible, TOP_N);
            tables::top_table(ui, dataset, &top, &state.color_map);
        });
}

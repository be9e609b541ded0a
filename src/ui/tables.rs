use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::color::ColorMap;
use crate::data::model::CompanyDataset;
use crate::report::format_index;

const ROW_HEIGHT: f32 = 20.0;

/// Full result table: code, name, industry, index, total word count.
pub fn result_table(ui: &mut Ui, dataset: &CompanyDataset, rows: &[usize], colors: &ColorMap) {
    company_table(ui, "result_table", dataset, rows, colors, true);
}

/// Ranking table: code, name, industry, index.
pub fn top_table(ui: &mut Ui, dataset: &CompanyDataset, rows: &[usize], colors: &ColorMap) {
    company_table(ui, "top_table", dataset, rows, colors, false);
}

fn company_table(
    ui: &mut Ui,
    id: &str,
    dataset: &CompanyDataset,
    rows: &[usize],
    colors: &ColorMap,
    with_word_count: bool,
) {
    let mut titles = vec!["Stock code", "Company", "Industry", "Index"];
    if with_word_count {
        titles.push("Total words");
    }

    ui.push_id(id, |ui: &mut Ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(320.0)
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(180.0))
            .column(Column::auto().at_least(140.0));
        builder = if with_word_count {
            builder
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder())
        } else {
            builder.column(Column::remainder())
        };

        builder
            .header(ROW_HEIGHT, |mut header| {
                for title in &titles {
                    header.col(|ui: &mut Ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let rec = &dataset.records()[rows[row.index()]];
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.stock_code.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.company_name.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.colored_label(colors.color_for(rec.industry()), rec.industry().label());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_index(rec.digitalization_index()));
                    });
                    if with_word_count {
                        row.col(|ui: &mut Ui| {
                            ui.label(rec.total_word_count.to_string());
                        });
                    }
                });
            });
    });
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use fdi_explorer::data::model::DatasetType;
use fdi_explorer::scale::AxisScale;
use fdi_explorer::state::AppState;

/// Horizontal indent per hierarchy level in the area list.
const INDENT_PX: f32 = 7.0;

// ---------------------------------------------------------------------------
// Left side panel – country / region list
// ---------------------------------------------------------------------------

/// Render the left area panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("FDI Data Explorer");
    ui.separator();
    ui.strong("Select a country or region");

    let mut query = state.search_query.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut query).hint_text("Type to search"));
    if response.changed() {
        state.set_search(&query);
    }
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Collect what we need so we can mutate state inside the loop.
    let rows: Vec<(String, u32, bool)> = state
        .active_areas()
        .iter()
        .filter(|a| state.is_listed(&a.name))
        .map(|a| (a.name.clone(), a.indent(), a.is_region()))
        .collect();

    let mut toggled: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (name, indent, is_region) in &rows {
                ui.horizontal(|ui: &mut Ui| {
                    ui.add_space(*indent as f32 * INDENT_PX);
                    let mut checked = state.selection.is_selected(name);
                    let text = if *is_region {
                        RichText::new(name).strong()
                    } else {
                        RichText::new(name)
                    };
                    if ui
                        .checkbox(&mut checked, text)
                        .on_hover_text(format!("Toggle {name} in the chart"))
                        .changed()
                    {
                        toggled = Some(name.clone());
                    }
                });
            }
        });

    if let Some(name) = toggled {
        state.toggle_selected(&name);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for scale in AxisScale::ALL {
            if ui
                .selectable_label(state.scale == scale, scale.label())
                .on_hover_text(format!("Use {} scale on y-axis", scale.label().to_lowercase()))
                .clicked()
            {
                state.set_scale(scale);
            }
        }

        ui.separator();

        let present: Vec<DatasetType> = state
            .dataset
            .as_ref()
            .map(|ds| ds.dataset_types().collect())
            .unwrap_or_else(|| DatasetType::ALL.to_vec());
        for dataset_type in DatasetType::ALL {
            let label = egui::SelectableLabel::new(state.dataset_type == dataset_type, dataset_type.label());
            if ui
                .add_enabled(present.contains(&dataset_type), label)
                .on_hover_text(format!("Select FDI {} dataset", dataset_type.label().to_lowercase()))
                .clicked()
            {
                state.set_dataset_type(dataset_type);
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} areas, {} selected",
                ds.areas(state.dataset_type).len(),
                state.selection.count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – legend and source
// ---------------------------------------------------------------------------

/// Render the legend; clicking an entry removes it from the chart.
pub fn legend_bar(ui: &mut Ui, state: &mut AppState) {
    let entries = state
        .chart
        .as_ref()
        .map(|c| c.legend_entries())
        .unwrap_or_default();

    let mut removed: Option<String> = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (name, color) in &entries {
            if ui
                .button(RichText::new(format!("● {name}")).color(*color))
                .on_hover_text(format!("Remove {name} from the chart"))
                .clicked()
            {
                removed = Some(name.clone());
            }
        }
    });
    if let Some(name) = removed {
        state.deselect(&name);
    }

    ui.label(RichText::new("Source: UNCTAD World Investment Report").italics());
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open FDI data")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

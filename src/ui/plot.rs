use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{GridMark, HLine, Line, Plot, PlotPoints};

use fdi_explorer::format::{format_axis_value, format_millions};
use fdi_explorer::scale::{AxisConversion, decade_marks};
use fdi_explorer::state::AppState;

// ---------------------------------------------------------------------------
// FDI plot (central panel)
// ---------------------------------------------------------------------------

/// Render the FDI chart in the central panel.
pub fn fdi_plot(ui: &mut Ui, state: &AppState) {
    let Some(chart) = &state.chart else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data file to explore FDI flows  (File → Open…)");
        });
        return;
    };

    if !state.has_selection() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select at least one country or region from the left");
        });
        return;
    }

    let config = chart.config();
    let scale = chart.scale();
    let years = config.years;
    ui.strong(format!("{}, {}–{}", config.title, years.start, years.end));

    let mut plot = Plot::new("fdi_plot")
        .x_axis_label("Year")
        .y_axis_label(config.y_axis_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .include_x(years.start as f64)
        .include_x(years.end as f64)
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(move |mark, _range| format_axis_value(scale.from_plot(mark.value)))
        .show_x(false)
        .show_y(false);

    if scale.is_log() {
        plot = plot.y_grid_spacer(|input| {
            decade_marks(input.bounds.0, input.bounds.1)
                .into_iter()
                .map(|sample| GridMark {
                    value: sample.position,
                    step_size: 1.0,
                })
                .collect()
        });
    }

    let lines = chart.visible_lines();
    let response = plot.show(ui, |plot_ui| {
        plot_ui.hline(HLine::new(0.0).color(Color32::from_gray(150)).width(1.0));
        for line in lines {
            let points: PlotPoints = line.points.into_iter().collect();
            plot_ui.line(Line::new(points).name(&line.name).color(line.color).width(2.0));
        }
        plot_ui.pointer_coordinate()
    });

    // Shared tooltip: every visible series at the hovered year.
    let hovered_year = response
        .inner
        .and_then(|pointer| chart.year_at(pointer.x));
    if let Some(year) = hovered_year {
        let rows = chart.tooltip_rows(year);
        if response.response.hovered() && !rows.is_empty() {
            response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
                ui.strong(format!("Year {year}"));
                for (name, value, color) in rows {
                    ui.label(
                        RichText::new(format!("● {name}: {}", format_millions(value))).color(color),
                    );
                }
            });
        }
    }
}

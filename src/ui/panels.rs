use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::config::SliderSpec;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – band controls
// ---------------------------------------------------------------------------

/// Render the sidebar with the six band sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dashboard Controls");
    ui.separator();
    ui.strong("Expected Range Bands (Editable for Pitch)");
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for control in state.bands.controls_mut() {
                let sliders = control.sliders;
                slider(ui, &mut control.center, &sliders.center);
                slider(ui, &mut control.width, &sliders.width);
                ui.add_space(6.0);
            }

            ui.separator();
            if ui.button("Reset bands").clicked() {
                state.reset_bands();
            }
        });
}

fn slider(ui: &mut Ui, value: &mut f64, spec: &SliderSpec) {
    ui.label(spec.label);
    ui.add(
        Slider::new(value, spec.min..=spec.max)
            .step_by(spec.step)
            .fixed_decimals(1),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, the page heading and the tab selector.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose data folder…").clicked() {
                choose_data_dir(state);
                ui.close_menu();
            }
            if ui.button("Reload data").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("Data: {}", state.data_dir.display()));

        if let Err(e) = &state.data {
            ui.separator();
            ui.label(RichText::new(format!("Failed to load {}", e.path().display())).color(Color32::RED));
        }
    });

    ui.heading("France – Investor Pitch Dashboard (Investor View)");
    ui.label(
        RichText::new(
            "Built for PGDM (MEEB): Macro Trends → Competitiveness → Sector Bets → Risks & Policy Mitigation",
        )
        .weak(),
    );

    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.title());
        }
    });
    ui.add_space(2.0);
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn choose_data_dir(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Choose the folder holding the dashboard CSV files")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
        if let Err(e) = &state.data {
            log::error!("Failed to load data: {e}");
        }
    }
}

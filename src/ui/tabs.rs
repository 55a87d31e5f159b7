use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ChartColors;
use crate::data::loader::LoadError;
use crate::data::sectors::{build_scorecard, PitchCard, PITCH_CARDS, SCORECARD_COLUMNS};
use crate::state::{competitiveness_charts, macro_charts, AppState, Tab};
use crate::ui::plot;

const TAKEAWAY_GREEN: Color32 = Color32::from_rgb(46, 125, 50);

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the active tab, or only the load error when any input failed.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let data = match &state.data {
        Ok(data) => data,
        Err(e) => {
            load_error(ui, e);
            return;
        }
    };

    let colors = ChartColors::default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.tab {
            Tab::MacroStability => {
                ui.heading("Macro Stability (Investor Comfort Layer)");
                lead(ui, "Investors first ask:", "Is the macro environment stable enough to deploy capital?");

                let charts = macro_charts(data, &state.bands);
                ui.columns(charts.len(), |cols: &mut [Ui]| {
                    for (col, chart) in cols.iter_mut().zip(charts.iter()) {
                        plot::band_chart(col, chart, &colors);
                    }
                });

                ui.add_space(8.0);
                egui::Frame::group(ui.style())
                    .fill(TAKEAWAY_GREEN.gamma_multiply(0.15))
                    .show(ui, |ui: &mut Ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(
                                "Macro takeaway: France can be positioned as stability-over-volatility (lower risk premium).",
                            )
                            .color(TAKEAWAY_GREEN),
                        );
                    });
            }
            Tab::Competitiveness => {
                ui.heading("Competitiveness (Execution Capability)");
                lead(ui, "Investors ask:", "Can the country execute operations reliably?");

                let [lpi, ftth] = competitiveness_charts(data);
                ui.columns(2, |cols: &mut [Ui]| {
                    cols[0].label(RichText::new("Logistics Performance Index (World Bank)").size(16.0));
                    plot::trend_chart(&mut cols[0], &lpi, &colors);
                    cols[1].label(RichText::new("FTTH Penetration (OECD)").size(16.0));
                    plot::trend_chart(&mut cols[1], &ftth, &colors);
                });
            }
            Tab::SectorBets => sector_bets(ui),
        });
}

fn lead(ui: &mut Ui, prefix: &str, question: &str) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label(prefix);
        ui.strong(question);
    });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Sector bets
// ---------------------------------------------------------------------------

fn sector_bets(ui: &mut Ui) {
    ui.heading("Sector Bets (Investor Pitch)");
    ui.label(
        "Macro variables influence each sector differently. \
         This section helps you pitch where to invest in France.",
    );
    ui.add_space(6.0);

    ui.label(RichText::new("Sector Opportunity Scorecard").size(16.0).strong());
    scorecard_table(ui);
    ui.add_space(10.0);

    ui.label(
        RichText::new("Pitch Cards (Macro → Opportunity → Risk → Policy Mitigation)")
            .size(16.0)
            .strong(),
    );
    ui.columns(PITCH_CARDS.len(), |cols: &mut [Ui]| {
        for (col, cards) in cols.iter_mut().zip(PITCH_CARDS.iter()) {
            for card in cards {
                pitch_card(col, card);
            }
        }
    });
}

fn scorecard_table(ui: &mut Ui) {
    let scorecard = build_scorecard();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::remainder().at_least(260.0))
        .columns(Column::auto().at_least(110.0), SCORECARD_COLUMNS.len() - 1)
        .header(22.0, |mut header| {
            for title in SCORECARD_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for rating in &scorecard {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(rating.sector);
                    });
                    for score in [rating.macro_resilience, rating.policy_support, rating.export_scale] {
                        row.col(|ui: &mut Ui| {
                            ui.label(score.to_string());
                        });
                    }
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", rating.overall));
                    });
                });
            }
        });
}

fn pitch_card(ui: &mut Ui, card: &PitchCard) {
    ui.add_space(6.0);
    ui.label(RichText::new(card.sector).size(15.0).strong());
    for (heading, text) in card.bullets() {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label("•");
            ui.strong(heading);
            ui.label(text);
        });
    }
}

// ---------------------------------------------------------------------------
// Load failure
// ---------------------------------------------------------------------------

fn load_error(ui: &mut Ui, err: &LoadError) {
    match err {
        LoadError::MissingFile {
            path,
            base_dir,
            available,
        } => {
            ui.label(RichText::new(format!("Missing file: {}", path.display())).color(Color32::RED));
            ui.label(format!("Running from: {}", base_dir.display()));
            ui.label("Files available:");
            if available.is_empty() {
                ui.monospace("<none>");
            }
            for name in available {
                ui.monospace(name);
            }
        }
        LoadError::Parse { .. } => {
            ui.label(RichText::new(err.to_string()).color(Color32::RED));
        }
    }
}

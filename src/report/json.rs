use serde::Serialize;

use crate::model::fit::{FitBand, REFERENCE_COMBO};
use crate::report::{DashboardView, FunnelStage, RankedCombo};

// Contract keys for the external charting layer.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'static str,
    version: &'static str,
    team: &'a str,
    teammate: &'a str,
    team_score: f32,
    driver_score: f32,
    combo_score: f32,
    fit_band: FitBand,
    reference_combo: f32,
    delta_vs_reference: f32,
    team_image_url: &'a str,
    driver_image_url: &'a str,
    top_combos: &'a [RankedCombo],
    funnel: &'a [FunnelStage],
}

pub fn render_summary_json(view: &DashboardView) -> serde_json::Result<String> {
    let summary = Summary {
        tool: "gridfit",
        version: env!("CARGO_PKG_VERSION"),
        team: &view.record.team_name,
        teammate: &view.record.teammate,
        team_score: view.record.team_score,
        driver_score: view.record.driver_score,
        combo_score: view.record.combo_score,
        fit_band: view.band,
        reference_combo: REFERENCE_COMBO,
        delta_vs_reference: view.delta,
        team_image_url: &view.record.team_image_url,
        driver_image_url: &view.record.driver_image_url,
        top_combos: &view.top,
        funnel: &view.funnel,
    };
    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

pub mod json;
pub mod text;

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::model::fit::{FitBand, delta_vs_reference};
use crate::model::record::ScoreRecord;
use crate::resolver::{ResolveError, ScoreTable};

pub const DEFAULT_TOP_N: i64 = 5;
pub const FUNNEL_STAGES: i64 = 3;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode summary json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCombo {
    pub rank: usize,
    pub label: String,
    pub combo_score: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunnelStage {
    pub label: String,
    pub combo_score: f32,
    pub percent_of_previous: f32,
}

/// Everything the renderers need for one dashboard frame, recomputed in
/// full from the immutable table on every interaction.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub record: ScoreRecord,
    pub band: FitBand,
    pub delta: f32,
    pub top: Vec<RankedCombo>,
    pub funnel: Vec<FunnelStage>,
}

pub fn build_view(
    table: &ScoreTable,
    record: &ScoreRecord,
    top_n: i64,
) -> Result<DashboardView, ResolveError> {
    let top = table
        .top_n(top_n)?
        .into_iter()
        .enumerate()
        .map(|(i, r)| RankedCombo {
            rank: i + 1,
            label: r.combo_label(),
            combo_score: r.combo_score,
        })
        .collect();

    let mut funnel = Vec::new();
    let mut previous: Option<f32> = None;
    for r in table.top_n(FUNNEL_STAGES)? {
        let percent_of_previous = match previous {
            None => 100.0,
            Some(p) if p > 0.0 => r.combo_score / p * 100.0,
            Some(_) => 0.0,
        };
        funnel.push(FunnelStage {
            label: r.combo_label(),
            combo_score: r.combo_score,
            percent_of_previous,
        });
        previous = Some(r.combo_score);
    }

    Ok(DashboardView {
        record: record.clone(),
        band: FitBand::classify(record.combo_score),
        delta: delta_vs_reference(record.combo_score),
        top,
        funnel,
    })
}

pub fn format_score(v: f32) -> String {
    format!("{v:.3}")
}

pub fn write_reports(view: &DashboardView, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let dashboard_path = out_dir.join("dashboard.txt");
    fs::write(&dashboard_path, text::render_dashboard(view))?;
    info!("wrote {}", dashboard_path.display());

    let details_path = out_dir.join("details.txt");
    fs::write(&details_path, text::render_details())?;
    info!("wrote {}", details_path.display());

    let summary_path = out_dir.join("summary.json");
    fs::write(&summary_path, json::render_summary_json(view)?)?;
    info!("wrote {}", summary_path.display());

    Ok(())
}

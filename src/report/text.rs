use crate::model::fit::{REFERENCE_COMBO, SOLID_THRESHOLD, STRONG_THRESHOLD};
use crate::report::{DashboardView, format_score};

const BAR_WIDTH: usize = 20;

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str("Team & Teammate Fit Dashboard\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Selection\n");
    out.push_str(&format!("Team: {}\n", view.record.team_name));
    out.push_str(&format!("Teammate: {}\n", view.record.teammate));
    out.push_str(&format!("Team image: {}\n", view.record.team_image_url));
    out.push_str(&format!(
        "Teammate image: {}\n\n",
        view.record.driver_image_url
    ));

    out.push_str("2. Combo fit gauge\n");
    out.push_str(&format!(
        "Combo score: {} [{}]\n",
        format_score(view.record.combo_score),
        bar(view.record.combo_score, BAR_WIDTH)
    ));
    out.push_str(&format!("Fit band: {}\n", view.band.label()));
    out.push_str(&format!(
        "Delta vs {} benchmark: {}\n",
        format_score(REFERENCE_COMBO),
        signed_score(view.delta)
    ));
    out.push_str(&format!("{}\n\n", view.band.statement()));

    out.push_str("3. Score summary\n");
    out.push_str(&score_line("Team score", view.record.team_score));
    out.push_str(&score_line("Teammate score", view.record.driver_score));
    out.push_str(&score_line("Combo score", view.record.combo_score));
    out.push('\n');

    out.push_str(&format!("4. Top {} combos\n", view.top.len()));
    for entry in &view.top {
        out.push_str(&format!(
            "{:>2}. {:<30} {} |{}|\n",
            entry.rank,
            entry.label,
            format_score(entry.combo_score),
            bar(entry.combo_score, BAR_WIDTH)
        ));
    }
    out.push('\n');

    out.push_str(&format!("5. Top {} funnel\n", view.funnel.len()));
    for (i, stage) in view.funnel.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<30} {} ({:.1}% of previous)\n",
            i + 1,
            stage.label,
            format_score(stage.combo_score),
            stage.percent_of_previous
        ));
    }

    out
}

pub fn render_details() -> String {
    let mut out = String::new();

    out.push_str("About This Dashboard\n");
    out.push_str("====================\n\n");

    out.push_str("Scores are precomputed from historical race data and loaded\n");
    out.push_str("from a static CSV; nothing is recalculated at runtime.\n\n");

    out.push_str("Scoring legend\n");
    out.push_str("Team score: average points, wins and DNFs of the constructor.\n");
    out.push_str("Teammate score: podiums, fastest laps and consistency.\n");
    out.push_str("Combo score: average of team and teammate score, 0 to 1.\n\n");

    out.push_str("Fit bands\n");
    out.push_str(&format!(
        "weak: combo below {}\n",
        format_score(SOLID_THRESHOLD)
    ));
    out.push_str(&format!(
        "solid: combo {} to {}\n",
        format_score(SOLID_THRESHOLD),
        format_score(STRONG_THRESHOLD)
    ));
    out.push_str(&format!(
        "strong: combo {} and above\n",
        format_score(STRONG_THRESHOLD)
    ));
    out.push_str(&format!(
        "Benchmark combo for the gauge delta: {}\n",
        format_score(REFERENCE_COMBO)
    ));

    out
}

fn score_line(label: &str, value: f32) -> String {
    format!(
        "{:<15} {} |{}|\n",
        label,
        format_score(value),
        bar(value, BAR_WIDTH)
    )
}

fn bar(value: f32, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f32).round() as usize;
    let mut out = String::with_capacity(width);
    for i in 0..width {
        out.push(if i < filled { '#' } else { '.' });
    }
    out
}

fn signed_score(v: f32) -> String {
    if v >= 0.0 {
        format!("+{}", format_score(v))
    } else {
        format_score(v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

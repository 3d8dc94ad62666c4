use super::{bar, render_dashboard, render_details, signed_score};
use crate::model::record::ScoreRecord;
use crate::report::build_view;
use crate::resolver::ScoreTable;

fn rec(team: &str, mate: &str, team_score: f32, driver_score: f32, combo: f32) -> ScoreRecord {
    ScoreRecord {
        team_name: team.to_string(),
        teammate: mate.to_string(),
        team_score,
        driver_score,
        combo_score: combo,
        team_image_url: format!("https://img.example/{team}.jpg"),
        driver_image_url: format!("https://img.example/{mate}.jpg"),
    }
}

fn scenario_table() -> ScoreTable {
    ScoreTable::new(vec![
        rec("TeamA", "Driver1", 0.7, 0.8, 0.75),
        rec("TeamA", "Driver2", 0.9, 0.9, 0.9),
        rec("TeamB", "Driver3", 0.5, 0.5, 0.5),
    ])
}

#[test]
fn test_dashboard_sections() {
    let table = scenario_table();
    let record = table.resolve("TeamA", "Driver2").unwrap();
    let view = build_view(&table, record, 5).unwrap();
    let out = render_dashboard(&view);

    assert!(out.contains("Team & Teammate Fit Dashboard"));
    assert!(out.contains("Team: TeamA"));
    assert!(out.contains("Teammate: Driver2"));
    assert!(out.contains("Team image: https://img.example/TeamA.jpg"));
    assert!(out.contains("Combo score: 0.900"));
    assert!(out.contains("Fit band: strong"));
    assert!(out.contains("Delta vs 0.750 benchmark: +0.150"));
}

#[test]
fn test_dashboard_top_combos_in_rank_order() {
    let table = scenario_table();
    let record = table.resolve("TeamA", "Driver1").unwrap();
    let view = build_view(&table, record, 5).unwrap();
    let out = render_dashboard(&view);

    // Only three rows exist, so the section is truncated.
    assert!(out.contains("4. Top 3 combos"));
    let best = out.find("TeamA + Driver2").unwrap();
    let second = out.find("TeamA + Driver1").unwrap();
    let third = out.find("TeamB + Driver3").unwrap();
    assert!(best < second);
    assert!(second < third);
}

#[test]
fn test_dashboard_funnel_percentages() {
    let table = scenario_table();
    let record = table.resolve("TeamA", "Driver1").unwrap();
    let view = build_view(&table, record, 5).unwrap();
    let out = render_dashboard(&view);

    assert!(out.contains("5. Top 3 funnel"));
    assert!(out.contains("(100.0% of previous)"));
    assert!(out.contains("(83.3% of previous)"));
    assert!(out.contains("(66.7% of previous)"));
}

#[test]
fn test_details_page() {
    let out = render_details();
    assert!(out.contains("About This Dashboard"));
    assert!(out.contains("Combo score: average of team and teammate score"));
    assert!(out.contains("strong: combo 0.800 and above"));
    assert!(out.contains("Benchmark combo for the gauge delta: 0.750"));
}

#[test]
fn test_bar_fill() {
    assert_eq!(bar(0.0, 10), "..........");
    assert_eq!(bar(0.5, 10), "#####.....");
    assert_eq!(bar(1.0, 10), "##########");
    // Out-of-convention values clamp instead of overflowing the bar.
    assert_eq!(bar(1.5, 10), "##########");
    assert_eq!(bar(-0.2, 10), "..........");
}

#[test]
fn test_signed_score() {
    assert_eq!(signed_score(0.15), "+0.150");
    assert_eq!(signed_score(-0.25), "-0.250");
    assert_eq!(signed_score(0.0), "+0.000");
}

use super::*;
use crate::cli::SortArgs;
use crate::commands::test_support::ctx;
use crate::output::{OutputFormat, PointKind};

fn args(points: &[&str], kind: PointKind) -> SortArgs {
    SortArgs {
        points: points.iter().map(ToString::to_string).collect(),
        kind,
    }
}

#[test]
fn sorts_plain_points_by_distance() {
    let out = run_sort_impl(
        &args(&["10,-3", "0,0", "-2,1", "1,1"], PointKind::Point),
        &ctx(OutputFormat::Text),
        &ColorRegistry::new(),
    )
    .unwrap();
    assert_eq!(out, "[<0, 0>, <1, 1>, <-2, 1>, <10, -3>]\n");
}

#[test]
fn sorts_color_points_by_distance() {
    let out = run_sort_impl(
        &args(&["-10,10@black", "1,0@red", "0,-3@blue"], PointKind::Color),
        &ctx(OutputFormat::Text),
        &ColorRegistry::new(),
    )
    .unwrap();
    assert_eq!(out, "[<red: 1, 0>, <blue: 0, -3>, <black: -10, 10>]\n");
}

#[test]
fn json_distances_are_non_decreasing() {
    let out = run_sort_impl(
        &args(&["5,5", "3,4", "5,0", "0,1"], PointKind::Point),
        &ctx(OutputFormat::Json),
        &ColorRegistry::new(),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let distances: Vec<f64> = value["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["distance_from_origin"].as_f64().unwrap())
        .collect();
    assert_eq!(distances.len(), 4);
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

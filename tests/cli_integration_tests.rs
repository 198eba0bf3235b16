//! Integration tests for the point commands.

mod common;

use predicates::prelude::*;

// =============================================================================
// show
// =============================================================================

#[test]
fn show_prints_color_points_with_distance() {
    colorpoint!()
        .args(["show", "1,2@red", "3,4@blue", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<red: 1, 2>  distance from origin: 2.23606797749979",
        ))
        .stdout(predicate::str::contains(
            "<blue: 3, 4>  distance from origin: 5.0",
        ));
}

#[test]
fn show_accepts_negative_and_float_coordinates() {
    colorpoint!()
        .args(["show", "(-1.5,2)", "--kind", "point", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<-1.5, 2>"));

    colorpoint!()
        .args(["show", "--kind", "point", "--no-config", "--", "-3,4"])
        .assert()
        .success()
        .stdout("<-3, 4>  distance from origin: 5.0\n");
}

#[test]
fn flags_after_specs_still_apply() {
    colorpoint!()
        .args(["show", "1,2", "3,4", "--format", "json", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"));
}

#[test]
fn show_rejects_non_numeric_coordinate() {
    colorpoint!()
        .args(["show", "a,2", "--no-config", "--color", "never"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ Type: x must be a number"))
        .stderr(predicate::str::contains("found a value of kind 'str'"));
}

#[test]
fn show_rejects_malformed_spec() {
    colorpoint!()
        .args(["show", "12", "--no-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input"));
}

#[test]
fn advanced_point_requires_allowed_color() {
    colorpoint!()
        .args(["show", "1,2@teal", "--kind", "advanced", "--no-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid color 'teal'"))
        .stderr(predicate::str::contains("allowed colors: red, green, blue"));
}

#[test]
fn add_color_extends_allow_list() {
    colorpoint!()
        .args([
            "show",
            "1,2@teal",
            "--kind",
            "advanced",
            "--add-color",
            "teal",
            "--no-config",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<teal: 1, 2>"));
}

#[test]
fn color_points_accept_any_color() {
    colorpoint!()
        .args(["show", "1,2@teal", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<teal: 1, 2>"));
}

// =============================================================================
// sort / compare / distance
// =============================================================================

#[test]
fn sort_orders_by_distance() {
    colorpoint!()
        .args(["sort", "--no-config", "--", "3,4", "1,1", "0,0", "-10,2"])
        .assert()
        .success()
        .stdout("[<0, 0>, <1, 1>, <3, 4>, <-10, 2>]\n");
}

#[test]
fn sort_color_points() {
    colorpoint!()
        .args(["sort", "5,5@blue", "1,0@red", "--kind", "color", "--no-config"])
        .assert()
        .success()
        .stdout("[<red: 1, 0>, <blue: 5, 5>]\n");
}

#[test]
fn compare_equal_distances() {
    colorpoint!()
        .args(["compare", "3,4", "5,0", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<3, 4> == <5, 0>: true"))
        .stdout(predicate::str::contains("<3, 4> > <5, 0>: false"));
}

#[test]
fn compare_json_output() {
    colorpoint!()
        .args(["compare", "1,1", "3,4", "--format", "json", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"less\": true"));
}

#[test]
fn distance_between_points() {
    colorpoint!()
        .args(["distance", "1,2", "3,2", "--no-config"])
        .assert()
        .success()
        .stdout("<red: 1, 2> -> <red: 3, 2>: 2.0\n");
}

#[test]
fn distance_uses_configured_default_color() {
    let fixture = common::TestFixture::new();
    fixture.create_config("[defaults]\ncolor = \"blue\"\n");

    colorpoint!()
        .current_dir(fixture.path())
        .args(["distance", "0,0", "3,4"])
        .assert()
        .success()
        .stdout("<blue: 0, 0> -> <blue: 3, 4>: 5.0\n");
}

#[test]
fn distance_rejects_unknown_color() {
    colorpoint!()
        .args(["distance", "1,2@mauve", "3,2", "--no-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid color 'mauve'"));
}

// =============================================================================
// colors / random
// =============================================================================

#[test]
fn colors_lists_seed_palette() {
    colorpoint!()
        .args(["colors", "--no-config"])
        .assert()
        .success()
        .stdout("red\ngreen\nblue\nyellow\nblack\nperiwinkle\nwhite\n");
}

#[test]
fn colors_counts_duplicates() {
    colorpoint!()
        .args(["colors", "--counts", "--add-color", "red", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("red\t2"));
}

#[test]
fn random_is_reproducible_with_seed() {
    let run = || {
        colorpoint!()
            .args(["random", "-n", "6", "--seed", "7", "--sort", "--no-config"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    assert!(text.starts_with("Generated points:\n["));
    assert!(text.contains("Sorted by distance from origin:\n["));
}

#[test]
fn random_with_colors_produces_color_points() {
    colorpoint!()
        .args([
            "random", "-n", "3", "--seed", "1", "--colors", "green", "--no-config",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<green: "));
}

#[test]
fn verbose_notes_go_to_stderr() {
    colorpoint!()
        .args(["-v", "colors", "--add-color", "teal", "--no-config"])
        .assert()
        .success()
        .stderr(predicate::str::contains("added color 'teal'"));
}

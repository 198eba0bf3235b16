use std::sync::Arc;
use std::thread;

use super::*;

#[test]
fn new_registry_holds_seed_colors_in_order() {
    let registry = ColorRegistry::new();
    assert_eq!(registry.snapshot(), SEED_COLORS.to_vec());
    assert_eq!(registry.len(), 7);
}

#[test]
fn empty_registry_accepts_nothing() {
    let registry = ColorRegistry::empty();
    assert!(registry.is_empty());
    assert!(!registry.contains("red"));
}

#[test]
fn add_makes_color_allowed() {
    let registry = ColorRegistry::new();
    assert!(registry.ensure_allowed("teal").is_err());

    registry.add("teal");

    assert!(registry.contains("teal"));
    assert!(registry.ensure_allowed("teal").is_ok());
    assert_eq!(registry.snapshot().last().map(String::as_str), Some("teal"));
}

#[test]
fn add_keeps_duplicates() {
    let registry = ColorRegistry::new();
    registry.add("red");
    registry.add("red");

    assert_eq!(registry.len(), 9);
    assert_eq!(registry.counts().get("red"), Some(&3));
}

#[test]
fn counts_follow_first_registration_order() {
    let registry = ColorRegistry::from_colors(["b", "a", "b", "c"]);
    let counts: Vec<_> = registry.counts().into_iter().collect();
    assert_eq!(
        counts,
        vec![
            ("b".to_string(), 2),
            ("a".to_string(), 1),
            ("c".to_string(), 1)
        ]
    );
}

#[test]
fn extend_appends_in_order() {
    let registry = ColorRegistry::empty();
    registry.extend(vec!["teal".to_string(), "rojo".to_string()]);
    assert_eq!(registry.snapshot(), vec!["teal", "rojo"]);
}

#[test]
fn ensure_allowed_reports_allow_list() {
    let registry = ColorRegistry::from_colors(["red", "blue"]);
    let err = registry.ensure_allowed("mauve").unwrap_err();

    match err {
        PointError::InvalidColor { color, allowed } => {
            assert_eq!(color, "mauve");
            assert_eq!(allowed, vec!["red", "blue"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn membership_is_case_sensitive() {
    let registry = ColorRegistry::new();
    assert!(!registry.contains("Red"));
}

#[test]
fn concurrent_adds_are_not_lost() {
    let registry = Arc::new(ColorRegistry::empty());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    registry.add(format!("c{t}-{i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 400);
    assert!(registry.contains("c7-49"));
}

#[test]
fn global_registry_starts_from_seed_and_grows() {
    let registry = global();
    for seed in SEED_COLORS {
        assert!(registry.contains(seed));
    }

    registry.add("registry-test-ochre");
    assert!(global().contains("registry-test-ochre"));
}

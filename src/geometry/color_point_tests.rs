use super::*;
use crate::error::PointError;

#[test]
fn render_puts_color_first() {
    let p = ColorPoint::new(1, 2, "red");
    assert_eq!(p.render(), "<red: 1, 2>");
    assert_eq!(format!("{p:?}"), "<red: 1, 2>");
}

#[test]
fn try_new_accepts_ints_and_floats() {
    let p = ColorPoint::try_new(1, 2.5, "blue").unwrap();
    assert_eq!(p.x(), Number::Int(1));
    assert_eq!(p.y(), Number::Float(2.5));
    assert_eq!(p.render(), "<blue: 1, 2.5>");
}

#[test]
fn try_new_rejects_text_x_first() {
    let err = ColorPoint::try_new("a", "b", "red").unwrap_err();
    assert!(matches!(
        err,
        PointError::TypeMismatch {
            axis: Axis::X,
            found: "str"
        }
    ));
}

#[test]
fn try_new_rejects_text_y_when_x_is_valid() {
    let err = ColorPoint::try_new(1, "b", "red").unwrap_err();
    assert!(matches!(err, PointError::TypeMismatch { axis: Axis::Y, .. }));
    assert_eq!(err.message(), "y must be a number");
}

#[test]
fn booleans_are_not_numbers() {
    let err = ColorPoint::try_new(true, 1, "red").unwrap_err();
    assert!(matches!(
        err,
        PointError::TypeMismatch {
            axis: Axis::X,
            found: "bool"
        }
    ));
}

#[test]
fn any_color_is_accepted() {
    assert_eq!(ColorPoint::try_new(0, 0, "").unwrap().render(), "<: 0, 0>");
    assert_eq!(
        ColorPoint::try_new(0, 0, "not-a-color").unwrap().color,
        "not-a-color"
    );
}

#[test]
fn distance_and_ordering_come_from_point() {
    let p = ColorPoint::new(1, 2, "red");
    assert_eq!(
        p.distance_from_origin().to_bits(),
        5.0_f64.sqrt().to_bits()
    );
    assert!(ColorPoint::new(3, 4, "red") > ColorPoint::new(1, 1, "blue"));
    assert_eq!(ColorPoint::new(3, 4, "red"), ColorPoint::new(5, 0, "green"));
}

#[test]
fn coordinates_stay_mutable() {
    let mut p = ColorPoint::new(1, 2, "red");
    p.point.x = Number::Float(0.5);
    p.color = "white".to_string();
    assert_eq!(p.render(), "<white: 0.5, 2>");
}

#[test]
fn sorting_mixed_colors_by_distance() {
    let mut points = vec![
        ColorPoint::new(-10, 10, "black"),
        ColorPoint::new(1, 0, "red"),
        ColorPoint::new(0, -3, "blue"),
    ];
    super::super::sort_by_distance(&mut points);
    assert_eq!(
        format!("{points:?}"),
        "[<red: 1, 0>, <blue: 0, -3>, <black: -10, 10>]"
    );
}

use super::*;

#[test]
fn frame_reads_are_rounded_and_idempotent() {
    let f = Frame::new(10.4, -2.5, 99.5, 0.49999999999999994);
    assert_eq!(f.x(), 10.0);
    assert_eq!(f.y(), -2.0);
    assert_eq!(f.width(), 100.0);
    assert_eq!(f.height(), 0.0);

    assert_eq!(f.x(), f.x());
    let again = Frame::new(f.x(), f.y(), f.width(), f.height());
    assert_eq!(again.x(), f.x());
    assert_eq!(again.width(), f.width());
}

#[test]
fn frame_keeps_authored_values_for_projection() {
    let f = Frame::new(0.5, 0.0, 10.0, 20.0);
    assert_eq!(f.x(), 1.0);
    assert_eq!(f.origin(), Point::new(0.5, 0.0));
    assert_eq!(f.project(NormPoint::new(0.5, 0.25)), Point::new(5.5, 5.0));
}

#[test]
fn frame_deserializes_with_missing_fields() {
    let f: Frame = serde_json::from_str(r#"{"_class":"rect","x":1.6,"width":3}"#).unwrap();
    assert_eq!(f.x(), 2.0);
    assert_eq!(f.y(), 0.0);
    assert_eq!(f.width(), 3.0);
    assert!(!f.is_square());
}

#[test]
fn norm_point_parses_braced_pairs() {
    assert_eq!(
        "{0.5, 1}".parse::<NormPoint>().unwrap(),
        NormPoint::new(0.5, 1.0)
    );
    assert_eq!(
        " {-0.25,0.75} ".parse::<NormPoint>().unwrap(),
        NormPoint::new(-0.25, 0.75)
    );
    assert_eq!(
        "{1.2e-3, 0}".parse::<NormPoint>().unwrap(),
        NormPoint::new(0.0012, 0.0)
    );
}

#[test]
fn norm_point_rejects_malformed_strings() {
    for bad in ["0.5, 1", "{0.5}", "{0.5, 1, 2}", "{a, 1}", ""] {
        assert!(bad.parse::<NormPoint>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn number_formatting_matches_style_strings() {
    assert_eq!(format_number(1.0), "1");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(-30.0), "-30");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
}

#[test]
fn round_half_up_differs_from_round_on_negatives() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!((-2.5f64).round(), -3.0);
}

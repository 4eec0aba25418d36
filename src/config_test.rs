#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_gives_defaults() {
    let cfg = BoardConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, BoardConfig::default());
    assert_eq!(cfg.jitter_degrees, 10.0);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.upload_position, Point::new(400.0, 200.0));
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn overrides_are_parsed() {
    let cfg = BoardConfig::from_lookup(lookup(&[
        ("SCRAPBOARD_JITTER_DEGREES", "2.5"),
        ("SCRAPBOARD_SEED", "42"),
        ("SCRAPBOARD_UPLOAD_X", " 10 "),
        ("SCRAPBOARD_UPLOAD_Y", "20"),
        ("SCRAPBOARD_LOG", "debug"),
    ]))
    .unwrap();
    assert_eq!(cfg.jitter_degrees, 2.5);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.upload_position, Point::new(10.0, 20.0));
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn invalid_seed_errors() {
    let err = BoardConfig::from_lookup(lookup(&[("SCRAPBOARD_SEED", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SCRAPBOARD_SEED", .. }));
    assert_eq!(err.to_string(), "invalid SCRAPBOARD_SEED: \"-1\"");
}

#[test]
fn invalid_upload_position_errors() {
    let err = BoardConfig::from_lookup(lookup(&[("SCRAPBOARD_UPLOAD_Y", "middle")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SCRAPBOARD_UPLOAD_Y", .. }));
}

#[test]
fn non_finite_jitter_errors() {
    let err = BoardConfig::from_lookup(lookup(&[("SCRAPBOARD_JITTER_DEGREES", "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SCRAPBOARD_JITTER_DEGREES", .. }));
}

#[test]
fn jitter_outside_half_turn_errors() {
    for raw in ["1e308", "180.5", "-1", "NaN"] {
        let err = BoardConfig::from_lookup(lookup(&[("SCRAPBOARD_JITTER_DEGREES", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "SCRAPBOARD_JITTER_DEGREES", .. }), "{raw}");
    }
}

#[test]
fn jitter_range_bounds_are_accepted() {
    for (raw, expected) in [("0", 0.0), ("180", 180.0)] {
        let cfg = BoardConfig::from_lookup(lookup(&[("SCRAPBOARD_JITTER_DEGREES", raw)])).unwrap();
        assert_eq!(cfg.jitter_degrees, expected);
    }
}

#[test]
fn non_finite_upload_position_errors() {
    for (var, raw) in [("SCRAPBOARD_UPLOAD_X", "NaN"), ("SCRAPBOARD_UPLOAD_Y", "inf"), ("SCRAPBOARD_UPLOAD_X", "-inf")] {
        let err = BoardConfig::from_lookup(lookup(&[(var, raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: v, .. } if v == var), "{var}={raw}");
    }
}

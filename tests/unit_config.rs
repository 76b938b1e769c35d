// tests/unit_config.rs
use std::fs;

use coursecloud_core::catalog::Dataset;
use coursecloud_core::config::{CloudConfig, LayoutConfig};
use coursecloud_core::CourseEngine;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursecloud.toml");
    fs::write(&path, "[layout]\nradius_step = 90.0\noverflow_threshold = 8").unwrap();
    let c = CloudConfig::load(Some(&path)).unwrap();
    assert!((c.layout.radius_step - 90.0).abs() < f64::EPSILON);
    assert_eq!(c.layout.overflow_threshold, 8);
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = CloudConfig::load(Some(&d.path().join("absent.toml"))).unwrap();
    assert_eq!(c.suggest.max_results, 6);
}

#[test]
fn test_defaults() {
    let l = LayoutConfig::default();
    assert_eq!(l.center(), (500.0, 500.0));
    assert_eq!(l.unreachable_padding, 2);
    assert!(l.min_size <= l.max_size);
}

#[test]
fn test_aliases_and_prefix() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursecloud.toml");
    fs::write(
        &path,
        "[catalog]\nvirtual_prefix = \"GROUP-\"\n[suggest]\ndepartment_aliases = { MA = \"MTH\" }",
    )
    .unwrap();
    let c = CloudConfig::load(Some(&path)).unwrap();
    assert_eq!(c.catalog.virtual_prefix, "GROUP-");
    assert_eq!(c.suggest.department_aliases.get("MA").map(String::as_str), Some("MTH"));
    assert!(!c.suggest.department_aliases.contains_key("CS"));
}

#[test]
fn test_malformed_toml_is_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursecloud.toml");
    fs::write(&path, "[layout]\nradius_step = \"wide\"").unwrap();
    assert!(CloudConfig::load(Some(&path)).is_err());
}

#[test]
fn test_inverted_size_range_is_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursecloud.toml");
    fs::write(&path, "[layout]\nmin_size = 2.0\nmax_size = 1.0").unwrap();
    assert!(CloudConfig::load(Some(&path)).is_err());
}

#[test]
fn test_focus_smaller_than_satellites_is_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursecloud.toml");
    fs::write(&path, "[layout]\nfocus_size = 0.5").unwrap();
    assert!(CloudConfig::load(Some(&path)).is_err());
}

#[test]
fn test_overflow_offset_bounds() {
    for bad in ["2.0", "3.5", "-0.1"] {
        let c = CloudConfig::from_toml_str(&format!("[layout]\noverflow_offset = {bad}")).unwrap();
        assert!(c.validate().is_err(), "accepted overflow_offset {bad}");
    }
    let c = CloudConfig::from_toml_str("[layout]\noverflow_offset = 1.9").unwrap();
    assert!(c.validate().is_ok());
}

#[test]
fn test_engine_rejects_invalid_config() {
    let bad = CloudConfig::from_toml_str("[layout]\nfocus_size = 0.5").unwrap();
    assert!(CourseEngine::try_with_config(&Dataset::default(), bad.clone()).is_err());

    let d = tempfile::tempdir().unwrap();
    let data = d.path().join("data.json");
    fs::write(&data, r#"{"nodes": [{"id": "A"}]}"#).unwrap();
    assert!(CourseEngine::load(&data, bad).is_err());
    assert!(CourseEngine::load(&data, CloudConfig::default()).is_ok());
}

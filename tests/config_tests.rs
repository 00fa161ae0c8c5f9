use bmssp::config::{block_size, default_level, derive_parameters, work_cap, Parameters};
use bmssp::{Error, FastSSSP, SolverConfig};

#[test]
fn test_derived_parameters() {
    assert_eq!(derive_parameters(0), (1, 1));
    assert_eq!(derive_parameters(1), (1, 1));
    assert_eq!(derive_parameters(5), (1, 1));
    assert_eq!(derive_parameters(10), (1, 1));
    assert_eq!(derive_parameters(100), (1, 2));
    assert_eq!(derive_parameters(1_000), (1, 3));
    assert_eq!(derive_parameters(1_000_000), (2, 5));
}

#[test]
fn test_default_level_exceeds_vertex_count() {
    assert_eq!(default_level(5, 1), 3);
    assert_eq!(default_level(10, 1), 4);
    assert_eq!(default_level(1_000, 3), 4);

    for &n in &[2usize, 17, 1_000, 65_536, 1_000_000] {
        let (k, t) = derive_parameters(n);
        assert!(work_cap(default_level(n, t), k, t) > n, "n = {}", n);
    }
}

#[test]
fn test_block_size_and_work_cap() {
    assert_eq!(block_size(0, 5), 1);
    assert_eq!(block_size(1, 3), 1);
    assert_eq!(block_size(3, 2), 16);
    assert_eq!(work_cap(2, 2, 3), 128);
    assert_eq!(work_cap(100, 2, 5), usize::MAX);
}

#[test]
fn test_config_from_json() {
    let config = SolverConfig::from_json_str(r#"{"k": 3, "level": 2}"#).unwrap();
    assert_eq!(config.k, Some(3));
    assert_eq!(config.t, None);
    assert_eq!(config.level, Some(2));
    assert!(config.validate_weights);

    let config = SolverConfig::from_json_str(r#"{"boundary": 12.5, "validate_weights": false}"#).unwrap();
    assert_eq!(config.boundary, Some(12.5));
    assert!(!config.validate_weights);
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(SolverConfig::from_json_str(r#"{"k": 0}"#), Err(Error::Config(_))));
    assert!(matches!(SolverConfig::from_json_str(r#"{"t": 0}"#), Err(Error::Config(_))));
    assert!(matches!(SolverConfig::from_json_str(r#"{"boundary": -1.0}"#), Err(Error::Config(_))));
    assert!(matches!(SolverConfig::from_json_str("{\"k\": "), Err(Error::Json(_))));

    let bad = SolverConfig {
        t: Some(0),
        ..SolverConfig::default()
    };
    assert!(matches!(FastSSSP::with_config(bad), Err(Error::Config(_))));
}

#[test]
fn test_resolve_applies_overrides() {
    let config = SolverConfig {
        k: Some(4),
        ..SolverConfig::default()
    };
    assert_eq!(config.resolve(1_000), Parameters { k: 4, t: 3, level: 4 });

    let config = SolverConfig {
        t: Some(1),
        level: Some(7),
        ..SolverConfig::default()
    };
    assert_eq!(config.resolve(1_000), Parameters { k: 1, t: 1, level: 7 });
}

#[test]
fn test_builder_methods_fill_config() {
    let solver = FastSSSP::new().with_params(0, 2).with_level(3).with_boundary(9.0);
    let config = solver.config();

    assert_eq!(config.k, Some(1));
    assert_eq!(config.t, Some(2));
    assert_eq!(config.level, Some(3));
    assert_eq!(config.boundary, Some(9.0));
}

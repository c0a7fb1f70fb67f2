use retina_core::pipeline::{Mode, PipelineStage, RetinaParams, SessionConfig};

// ---------------------------------------------------------------------------
// RetinaParams
// ---------------------------------------------------------------------------

#[test]
fn test_params_defaults() {
    let p = RetinaParams::default();
    assert_eq!(p.sigma_excitatory, 1.0);
    assert_eq!(p.sigma_inhibitory, 2.0);
    assert_eq!(p.gain, 10.0);
}

#[test]
fn test_params_clamped_keeps_valid_values() {
    let p = RetinaParams::clamped(0.5, 7.0, 2.0);
    assert_eq!(p.sigma_excitatory, 0.5);
    assert_eq!(p.sigma_inhibitory, 7.0);
    assert_eq!(p.gain, 2.0);
}

#[test]
fn test_params_sanitized_raises_small_sigmas() {
    let p = RetinaParams {
        sigma_excitatory: 0.01,
        sigma_inhibitory: -2.0,
        gain: 0.0,
    }
    .sanitized();
    assert_eq!(p.sigma_excitatory, 0.1);
    assert_eq!(p.sigma_inhibitory, 0.1);
    assert_eq!(p.gain, 0.0);
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

#[test]
fn test_mode_display() {
    assert_eq!(format!("{}", Mode::PassThrough), "Pass-Through");
    assert_eq!(format!("{}", Mode::AdaptiveContrast), "Adaptive Contrast");
    assert_eq!(format!("{}", Mode::EdgePathway), "Edge Pathway");
    assert_eq!(format!("{}", Mode::GanglionDoG), "Ganglion DoG");
}

#[test]
fn test_mode_default_is_ganglion() {
    assert_eq!(Mode::default(), Mode::GanglionDoG);
}

#[test]
fn test_mode_index_round_trip() {
    for (i, mode) in Mode::ALL.iter().enumerate() {
        assert_eq!(mode.index(), i);
        assert_eq!(Mode::from_index(i as i64), Some(*mode));
    }
    assert_eq!(Mode::from_index(-1), None);
    assert_eq!(Mode::from_index(4), None);
}

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Normalizing), "Normalizing input");
    assert_eq!(format!("{}", PipelineStage::Histogram), "Rendering histogram");
}

// ---------------------------------------------------------------------------
// SessionConfig (TOML)
// ---------------------------------------------------------------------------

#[test]
fn test_session_config_empty_toml_uses_defaults() {
    let config: SessionConfig = toml::from_str("").unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.mode, Mode::GanglionDoG);
}

#[test]
fn test_session_config_partial_params() {
    let config: SessionConfig = toml::from_str(
        r#"
mode = "EdgePathway"

[params]
sigma_inhibitory = 4.5
"#,
    )
    .unwrap();
    assert_eq!(config.mode, Mode::EdgePathway);
    assert_eq!(config.params.sigma_excitatory, 1.0);
    assert_eq!(config.params.sigma_inhibitory, 4.5);
    assert_eq!(config.params.gain, 10.0);
}

#[test]
fn test_session_config_toml_round_trip() {
    let config = SessionConfig {
        mode: Mode::PassThrough,
        params: RetinaParams::clamped(1.5, 3.0, 8.0),
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: SessionConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_session_config_rejects_unknown_mode() {
    let result: Result<SessionConfig, _> = toml::from_str(r#"mode = "Retinex""#);
    assert!(result.is_err());
}

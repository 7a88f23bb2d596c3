use eldlog::config::Config;
use eldlog::errors::AppError;

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_non_finite_geometry_is_rejected() {
    let cases = [
        Config {
            canvas_width: f64::NAN,
            ..Config::default()
        },
        Config {
            canvas_height: f64::INFINITY,
            ..Config::default()
        },
        Config {
            canvas_margin: f64::NAN,
            ..Config::default()
        },
        Config {
            hover_radius: f64::NAN,
            ..Config::default()
        },
    ];

    for cfg in cases {
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }
}

#[test]
fn test_nan_from_yaml_is_rejected() {
    let cfg: Config = serde_yaml::from_str("canvas_width: .nan\n").expect("parse");
    assert!(cfg.canvas_width.is_nan());

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("canvas_width"));
}

#[test]
fn test_margin_must_leave_a_plot_area() {
    let cfg = Config {
        canvas_margin: 200.0,
        ..Config::default()
    };
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));

    let cfg = Config {
        canvas_margin: -1.0,
        ..Config::default()
    };
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
}

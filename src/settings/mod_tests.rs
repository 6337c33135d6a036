use serde_json::json;

use super::*;

fn layout(value: Value) -> Layout {
    Layout::from_value(value).unwrap()
}

#[test]
fn starts_from_builtin_defaults() {
    let _guard = test_guard();
    let settings = current();

    assert_eq!(settings.theme, "simple_white");
    assert_eq!(settings.renderer, DEFAULT_RENDERER);
    assert_eq!(settings.layout, defaults::default_layout());
    assert_eq!(settings.config.get("displaylogo"), Some(&json!(false)));
    assert_eq!(primary_color().as_deref(), Some("#0b8bee"));
}

#[test]
fn template_overlays_default_layout_on_theme() {
    let _guard = test_guard();
    let template = template();

    // From the default layout.
    assert_eq!(template.get("font").and_then(|f| f.get("family")), Some(&json!("Arial")));
    // Kept from the theme where the default layout is silent.
    assert_eq!(
        template.get_path(&["xaxis", "mirror"]),
        Some(&json!(false))
    );
}

#[test]
fn theme_without_layout_drops_defaults() {
    let _guard = test_guard();
    set_default_theme("plotly_dark", false).unwrap();

    let template = template();
    assert_eq!(template.get("paper_bgcolor"), Some(&json!("rgb(17,17,17)")));
    assert_eq!(template.get("width"), None);
}

#[test]
fn none_theme_keeps_only_default_layout() {
    let _guard = test_guard();
    set_default_theme("none", true).unwrap();
    assert_eq!(template(), defaults::default_layout());
}

#[test]
fn rejects_unknown_theme() {
    let _guard = test_guard();
    let err = set_default_theme("solarized", true).unwrap_err();
    assert!(err.to_string().contains("solarized"));
    assert_eq!(current().theme, "simple_white");
}

#[test]
fn update_default_layout_merges_deeply() {
    let _guard = test_guard();
    update_default_layout(&layout(json!({"font": {"size": 12}, "title": {"text": "T"}})));

    let settings = current();
    assert_eq!(settings.layout.get_path(&["font", "size"]), Some(&json!(12)));
    assert_eq!(settings.layout.get_path(&["font", "family"]), Some(&json!("Arial")));
    assert_eq!(settings.layout.get_path(&["title", "x"]), Some(&json!(0.05)));
}

#[test]
fn set_default_layout_replaces() {
    let _guard = test_guard();
    set_default_layout(layout(json!({"width": 300})));
    assert_eq!(current().layout, layout(json!({"width": 300})));
    assert_eq!(primary_color(), None);
}

#[test]
fn renderer_names_are_validated() {
    let _guard = test_guard();
    set_default_renderer("iframe_connected+json").unwrap();

    let settings = current();
    assert_eq!(settings.renderer_name(), "iframe_connected");
    assert!(set_default_renderer("png").is_err());
    assert!(set_default_renderer("json+png").is_err());
    assert_eq!(current().renderer, "iframe_connected+json");
}

#[test]
fn renderer_change_keeps_config() {
    let _guard = test_guard();
    update_default_config(Map::from_iter([("scrollZoom".to_string(), json!(true))]));
    set_default_renderer("json").unwrap();
    assert_eq!(current().config.get("scrollZoom"), Some(&json!(true)));
}

#[test]
fn update_default_config_merges_nested_options() {
    let _guard = test_guard();
    update_default_config(Map::from_iter([(
        "toImageButtonOptions".to_string(),
        json!({"scale": 2}),
    )]));

    let config = current().config;
    assert_eq!(
        config.get("toImageButtonOptions"),
        Some(&json!({"format": "svg", "scale": 2}))
    );
    assert_eq!(config.get("displaylogo"), Some(&json!(false)));
}

#[test]
fn set_default_config_replaces() {
    let _guard = test_guard();
    set_default_config(Map::new());
    assert!(current().config.is_empty());
}

#[test]
fn set_default_colors_updates_colorway() {
    let _guard = test_guard();
    set_default_colors(&["black", "white"]);

    assert_eq!(primary_color().as_deref(), Some("black"));
    assert_eq!(
        template().get("colorway"),
        Some(&json!(["black", "white"]))
    );
}

#[test]
fn reset_restores_builtins() {
    let _guard = test_guard();
    set_default_colors(&["black"]);
    set_iframe_root(Some(PathBuf::from("/tmp")));
    reset();
    assert_eq!(current(), Settings::default());
}

#[test]
fn every_theme_name_has_a_layout() {
    for name in THEME_NAMES {
        assert!(theme_layout(name).is_some(), "{name}");
    }
    assert!(theme_layout("unknown").is_none());
}

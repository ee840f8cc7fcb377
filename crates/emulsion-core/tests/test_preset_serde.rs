use emulsion_core::catalog::Catalog;
use emulsion_core::preset::{
    Category, CurvePoint, DensityPoint, Preset, SelectiveColorAdjustment,
};

/// A preset exercising the parts of the model where serialization is
/// easiest to get wrong: curve-point order, nested grain sub-configs and
/// repeated selective-color entries.
fn populated_preset() -> Preset {
    let mut p = Preset::neutral("test-look", "Test Look", Category::Cinema);
    p.curves.red = vec![
        CurvePoint::new(0.0, 0.05),
        CurvePoint::new(0.4, 0.35),
        CurvePoint::new(1.0, 0.92),
    ];
    p.selective_colors = vec![
        SelectiveColorAdjustment {
            hue: 0.33,
            range: 0.1,
            saturation: 0.25,
            luminance: -0.05,
            hue_shift: 0.01,
        },
        SelectiveColorAdjustment {
            hue: 0.61,
            range: 0.08,
            saturation: -0.4,
            luminance: 0.0,
            hue_shift: 0.0,
        },
    ];
    p.grain.enabled = true;
    p.grain.global_intensity = 0.37;
    p.grain.channels.red.seed = 7;
    p.grain.channels.blue.size = 1.4;
    p.grain.chroma_shift = [0.5, 0.0, -0.5];
    p.grain.density_curve = vec![
        DensityPoint {
            luma: 0.0,
            multiplier: 0.4,
        },
        DensityPoint {
            luma: 1.0,
            multiplier: 0.2,
        },
    ];
    p
}

#[test]
fn json_round_trip_is_field_for_field() {
    let original = populated_preset();
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Preset = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn round_trip_preserves_curve_point_order() {
    let original = populated_preset();
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Preset = serde_json::from_str(&encoded).unwrap();

    let inputs: Vec<f32> = decoded.curves.red.iter().map(|p| p.input).collect();
    assert_eq!(inputs, vec![0.0, 0.4, 1.0]);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let decoded: Preset =
        serde_json::from_str(r#"{"id":"bare","label":"Bare","category":"slide"}"#).unwrap();
    assert_eq!(decoded.category, Category::Slide);
    assert!(!decoded.grain.enabled);
    assert!(decoded.curves.is_identity());
    assert!(decoded.selective_colors.is_empty());
}

#[test]
fn every_built_in_preset_round_trips() {
    let catalog = Catalog::built_in().unwrap();
    for preset in catalog.all() {
        let encoded = serde_json::to_string(preset).unwrap();
        let decoded: Preset = serde_json::from_str(&encoded).unwrap();
        assert_eq!(&decoded, preset, "{}", preset.id);
    }
}

#[allow(dead_code)]
mod common;

use emulsion_core::catalog::Catalog;
use emulsion_core::pipeline::engine::{render, render_with, RenderContext};
use emulsion_core::pipeline::{CancelToken, PreviewPolicy, Tier};
use emulsion_core::preset::{Category, Preset};

use common::{assert_images_equal, gradient_image, max_diff};

#[test]
fn neutral_preset_is_an_identity_transform() {
    let image = gradient_image(60, 80);
    let preset = Preset::neutral("n", "Neutral", Category::Negative);
    let result = render(&image, &preset, Tier::Full).unwrap().unwrap();
    assert_images_equal(&result, &image);
}

#[test]
fn full_render_is_deterministic() {
    let image = gradient_image(60, 80);
    let catalog = Catalog::built_in().unwrap();
    let preset = catalog.get("tri-x-400").unwrap();

    let a = render(&image, preset, Tier::Full).unwrap().unwrap();
    let b = render(&image, preset, Tier::Full).unwrap().unwrap();
    assert_images_equal(&a, &b);
    assert!(max_diff(&a, &image) > 0.0, "the look should change pixels");
}

#[test]
fn preview_tier_caps_the_working_resolution() {
    let image = gradient_image(100, 200);
    let preset = Preset::neutral("n", "Neutral", Category::Negative);
    let ctx = RenderContext {
        policy: PreviewPolicy {
            max_dimension: 50,
            ..PreviewPolicy::default()
        },
        ..RenderContext::default()
    };

    let result = render_with(&image, &preset, Tier::Preview, &ctx)
        .unwrap()
        .unwrap();
    assert_eq!(result.width(), 50);
    assert_eq!(result.height(), 25);
}

#[test]
fn preview_tier_skips_the_instant_frame() {
    let image = gradient_image(80, 80);
    let catalog = Catalog::built_in().unwrap();
    let preset = catalog.get("sx-70").unwrap();
    assert!(preset.frame.enabled);

    let full = render(&image, preset, Tier::Full).unwrap().unwrap();
    let preview = render(&image, preset, Tier::Preview).unwrap().unwrap();

    // The frame stage expands the canvas at full tier only.
    assert!(full.width() > image.width());
    assert!(full.height() > image.height());
    assert_eq!(preview.width(), image.width());
    assert_eq!(preview.height(), image.height());
}

#[test]
fn expensive_stages_respect_the_preview_cost_cutoff() {
    let image = gradient_image(64, 64);
    let catalog = Catalog::built_in().unwrap();
    let preset = catalog.get("tri-x-400").unwrap();
    assert!(preset.grain.enabled);

    // A policy that admits every stage includes grain; the default
    // policy leaves it for the full tier.
    let permissive = RenderContext {
        policy: PreviewPolicy {
            max_dimension: 64,
            max_stage_cost: 1.0,
        },
        ..RenderContext::default()
    };
    let strict = RenderContext {
        policy: PreviewPolicy {
            max_dimension: 64,
            max_stage_cost: 0.1,
        },
        ..RenderContext::default()
    };

    let with_grain = render_with(&image, preset, Tier::Preview, &permissive)
        .unwrap()
        .unwrap();
    let without_grain = render_with(&image, preset, Tier::Preview, &strict)
        .unwrap()
        .unwrap();
    assert!(max_diff(&with_grain, &without_grain) > 0.0);
}

#[test]
fn pre_cancelled_render_returns_none() {
    let image = gradient_image(32, 32);
    let preset = Preset::neutral("n", "Neutral", Category::Negative);

    let token = CancelToken::new();
    token.cancel();
    let ctx = RenderContext {
        cancel: Some(token),
        ..RenderContext::default()
    };

    let result = render_with(&image, &preset, Tier::Full, &ctx).unwrap();
    assert!(result.is_none());
}

#[test]
fn renders_are_independent_across_concurrent_calls() {
    let image = gradient_image(48, 48);
    let catalog = Catalog::built_in().unwrap();
    let preset = catalog.get("velvia-50").unwrap().clone();

    let serial = render(&image, &preset, Tier::Full).unwrap().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let image = image.clone();
            let preset = preset.clone();
            std::thread::spawn(move || render(&image, &preset, Tier::Full).unwrap().unwrap())
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_images_equal(&result, &serial);
    }
}

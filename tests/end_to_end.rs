//! End-to-end: config file → registry → context → assembled attributes.
//!
//! Exercises the public API the way a host integration would, including
//! the JSON handoff shape hosts rely on when bridging attributes across a
//! process boundary.

use edge_images::attrs::{AttrOverrides, build_image_attrs};
use edge_images::config::{EdgeConfig, load_config};
use edge_images::context::RenderContext;
use edge_images::engine::{ImageSource, TransformRequest, TransformedUrl};
use edge_images::sizes::SizeRegistry;

fn example_config() -> EdgeConfig {
    EdgeConfig::from_toml_str(r#"provider_host = "https://example.com""#).unwrap()
}

#[test]
fn transformed_url_matches_the_provider_wire_format() {
    let source = ImageSource::new("https://example.com/photo.jpg");
    let request = TransformRequest::new(800).with_height(600);
    let url = TransformedUrl::build(&source, &request, &example_config()).unwrap();
    assert_eq!(
        url.to_string(),
        "https://example.com/cdn-cgi/image/f=auto%2Cfit=contain%2Cgravity=auto%2Cheight=600%2Conerror=redirect%2Cwidth=800/photo.jpg"
    );
}

#[test]
fn config_file_drives_the_whole_pipeline() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("edge-images.toml"),
        r#"
provider_host = "https://cdn.example"

[breakpoints]
content_width = 500

[sizes.hero]
width = 1000
height = 562
fit = "cover"
sizes_attr = "100vw"
"#,
    )
    .unwrap();

    let config = load_config(tmp.path()).unwrap();
    let registry = SizeRegistry::from_config(&config);
    let ctx = RenderContext::new(&config);

    let source = ImageSource::new("/wp-content/uploads/banner.jpg").with_intrinsic(2000, 1125);
    let attrs = build_image_attrs(
        &source,
        registry.resolve("hero"),
        &ctx,
        &config,
        &AttrOverrides {
            attachment_id: Some(7),
            ..AttrOverrides::default()
        },
    )
    .unwrap();

    // Hero is wider than the 500px layout: constrained proportionally.
    assert_eq!(attrs.width, 500);
    assert_eq!(attrs.height, Some(281));
    assert!(attrs.src.starts_with("https://cdn.example/cdn-cgi/image/"));
    assert!(attrs.src.ends_with("/wp-content/uploads/banner.jpg"));
    assert!(attrs.src.contains("fit=cover"));
    assert_eq!(attrs.sizes, "100vw");
    assert!(attrs.container_class.contains("image-id-7"));

    // Ladder climbs from width_min to intrinsic, capped at width_max.
    let rungs: Vec<&str> = attrs.srcset.split(", ").collect();
    assert!(rungs.first().unwrap().ends_with(" 400w"));
    assert!(rungs.last().unwrap().ends_with(" 2000w"));
}

#[test]
fn unknown_size_keyword_still_produces_attrs() {
    let config = example_config();
    let registry = SizeRegistry::from_config(&config);
    let ctx = RenderContext::new(&config);
    let source = ImageSource::new("https://example.com/pic.png").with_intrinsic(800, 800);

    let attrs = build_image_attrs(
        &source,
        registry.resolve("no-such-size"),
        &ctx,
        &config,
        &AttrOverrides::default(),
    )
    .unwrap();

    // Falls back to the large profile, then constrains to the 600px layout.
    assert_eq!(attrs.width, 600);
}

#[test]
fn attrs_serialize_for_host_handoff() {
    let config = example_config();
    let registry = SizeRegistry::from_config(&config);
    let ctx = RenderContext::new(&config);
    let source = ImageSource::new("https://example.com/pic.png").with_intrinsic(1200, 800);

    let attrs = build_image_attrs(
        &source,
        registry.resolve("medium"),
        &ctx,
        &config,
        &AttrOverrides {
            alt: Some("Alt text".to_string()),
            ..AttrOverrides::default()
        },
    )
    .unwrap();

    let json: serde_json::Value = serde_json::to_value(&attrs).unwrap();
    assert_eq!(json["width"], 300);
    assert_eq!(json["alt"], "Alt text");
    assert_eq!(json["loading"], "lazy");
    assert!(json["srcset"].as_str().unwrap().contains(" 400w"));
}

#[test]
fn repeated_builds_are_deterministic() {
    let config = example_config();
    let registry = SizeRegistry::from_config(&config);
    let source = ImageSource::new("https://example.com/pic.png").with_intrinsic(1200, 800);

    let build = || {
        let ctx = RenderContext::new(&config);
        build_image_attrs(
            &source,
            registry.resolve("large"),
            &ctx,
            &config,
            &AttrOverrides::default(),
        )
        .unwrap()
    };
    assert_eq!(build(), build());
}

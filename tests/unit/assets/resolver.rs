use super::*;
use crate::{
    assets::archive::MemoryArchive,
    document::model::LayerKind,
    foundation::error::AssetResolutionError,
};

const PAGE_JSON: &str = r#"{
    "_class": "page",
    "do_objectID": "P1",
    "name": "Page 1",
    "frame": {"_class": "rect", "x": 0, "y": 0, "width": 0, "height": 0},
    "layers": []
}"#;

#[test]
fn entry_name_appends_only_missing_extension() {
    assert_eq!(entry_name("pages/P1", "json"), "pages/P1.json");
    assert_eq!(entry_name("pages/P1.json", "json"), "pages/P1.json");
    assert_eq!(entry_name("images/a.jpg", "png"), "images/a.jpg");
    assert_eq!(entry_name("images/a", ""), "images/a");
}

#[test]
fn opts_fill_missing_fields_with_defaults() {
    let opts: ResolverOpts = serde_json::from_str(r#"{"image_extension": "jpg"}"#).unwrap();
    assert_eq!(opts.image_extension, "jpg");
    assert_eq!(opts.page_extension, "json");
    assert_eq!(opts.fallback_image_mime, "image/png");
    assert_eq!(opts.url_scheme, "blob");
}

#[tokio::test]
async fn nested_page_resolves_to_layer_graph() {
    let archive = MemoryArchive::new().with_entry("pages/P1.json", PAGE_JSON);
    let resolver = AssetResolver::default();
    let asset = resolver
        .resolve(&AssetReference::page("pages/P1"), &archive)
        .await
        .unwrap();
    let layer = asset.as_page().and_then(Node::as_layer).unwrap();
    assert_eq!(layer.object_id, "P1");
    assert!(matches!(layer.kind, LayerKind::Page(_)));
    assert!(asset.as_image().is_none());
}

#[tokio::test]
async fn image_data_registers_a_revocable_source() {
    let archive = MemoryArchive::new().with_entry("images/abc.png", b"raw".to_vec());
    let resolver = AssetResolver::default();
    let asset = resolver
        .resolve(&AssetReference::image("images/abc"), &archive)
        .await
        .unwrap();
    let source = asset.as_image().unwrap();
    assert!(source.url().starts_with("blob:"));
    let blob = source.blob().unwrap();
    assert_eq!(blob.mime_type, "image/png");
    assert_eq!(blob.bytes.as_slice(), b"raw");
    assert_eq!(resolver.images().len(), 1);

    source.revoke();
    assert!(resolver.images().is_empty());
}

#[tokio::test]
async fn unknown_reference_class_always_fails() {
    let archive = MemoryArchive::new().with_entry("x.json", PAGE_JSON);
    let reference = AssetReference {
        ref_class: RefClass::Other("MSSomethingElse".to_string()),
        ref_id: "x".to_string(),
    };
    let err = AssetResolver::default()
        .resolve(&reference, &archive)
        .await
        .unwrap_err();
    assert_eq!(
        err.as_asset_error(),
        Some(&AssetResolutionError::UnsupportedReferenceType(
            "MSSomethingElse".to_string()
        ))
    );
}

#[tokio::test]
async fn missing_entry_and_bad_json_fail() {
    let resolver = AssetResolver::default();
    let empty = MemoryArchive::new();
    let err = resolver
        .resolve(&AssetReference::page("pages/nope"), &empty)
        .await
        .unwrap_err();
    assert_eq!(
        err.as_asset_error(),
        Some(&AssetResolutionError::EntryNotFound(
            "pages/nope.json".to_string()
        ))
    );

    let broken = MemoryArchive::new().with_entry("pages/bad.json", "{not json");
    let err = resolver
        .resolve(&AssetReference::page("pages/bad"), &broken)
        .await
        .unwrap_err();
    assert!(matches!(err, SketchError::Serde(_)));
}

#[tokio::test]
async fn resolve_pages_is_all_or_nothing() {
    let archive = MemoryArchive::new().with_entry("pages/P1.json", PAGE_JSON);
    let resolver = AssetResolver::default();

    let ok = Document {
        object_id: "D".to_string(),
        pages: vec![AssetReference::page("pages/P1")],
    };
    let pages = resolver.resolve_pages(&ok, &archive).await.unwrap();
    assert_eq!(pages.len(), 1);

    let partial = Document {
        object_id: "D".to_string(),
        pages: vec![
            AssetReference::page("pages/P1"),
            AssetReference::page("pages/P2"),
        ],
    };
    assert!(resolver.resolve_pages(&partial, &archive).await.is_err());
}

#[tokio::test]
async fn image_reference_in_page_list_is_rejected_without_leaking() {
    let archive = MemoryArchive::new().with_entry("images/i.png", vec![0u8]);
    let resolver = AssetResolver::default();
    let doc = Document {
        object_id: "D".to_string(),
        pages: vec![AssetReference::image("images/i")],
    };
    let err = resolver.resolve_pages(&doc, &archive).await.unwrap_err();
    assert!(matches!(err, SketchError::Validation(_)));
    assert!(resolver.images().is_empty());
}

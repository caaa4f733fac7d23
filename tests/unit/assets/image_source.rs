use super::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn sniff_detects_png_and_falls_back() {
    let png = ImageBlob::sniff(PNG_SIGNATURE.to_vec(), "image/x-unknown");
    assert_eq!(png.mime_type, "image/png");

    let jpeg = ImageBlob::sniff(vec![0xff, 0xd8, 0xff, 0xe0, 0, 0x10], "image/png");
    assert_eq!(jpeg.mime_type, "image/jpeg");

    let junk = ImageBlob::sniff(b"not an image".to_vec(), "image/png");
    assert_eq!(junk.mime_type, "image/png");
    assert_eq!(junk.len(), 12);
}

#[test]
fn register_issues_unique_scheme_urls() {
    let registry = ImageRegistry::new();
    let a = registry.register("blob", ImageBlob::sniff(PNG_SIGNATURE.to_vec(), "image/png"));
    let b = registry.register("blob", ImageBlob::sniff(PNG_SIGNATURE.to_vec(), "image/png"));
    assert!(a.url().starts_with("blob:"));
    assert_ne!(a.url(), b.url());
    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);
}

#[test]
fn revoke_releases_blob_and_is_idempotent() {
    let registry = ImageRegistry::new();
    let source = registry.register("blob", ImageBlob::sniff(vec![1, 2, 3], "image/png"));
    assert_eq!(source.blob().unwrap().bytes.as_slice(), &[1, 2, 3]);
    assert!(!source.is_revoked());

    source.revoke();
    assert!(source.is_revoked());
    assert!(source.blob().is_none());
    assert!(registry.is_empty());

    source.revoke();
    assert!(registry.is_empty());
}

#[test]
fn dropping_a_handle_keeps_the_blob_live() {
    let registry = ImageRegistry::new();
    let url = {
        let source = registry.register("blob", ImageBlob::sniff(vec![9], "image/png"));
        source.url().to_string()
    };
    assert!(registry.get(&url).is_some());
}

#[test]
fn debug_shows_url_and_state() {
    let registry = ImageRegistry::new();
    let source = registry.register("blob", ImageBlob::sniff(vec![], "image/png"));
    let dbg = format!("{source:?}");
    assert!(dbg.contains("blob:"));
    assert!(dbg.contains("revoked: false"));
}

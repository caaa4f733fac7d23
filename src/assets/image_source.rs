use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Image bytes lifted out of an archive, tagged with their MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBlob {
    /// MIME type sniffed from the bytes.
    pub mime_type: String,
    /// Encoded image bytes, shared between handles.
    pub bytes: Arc<Vec<u8>>,
}

impl ImageBlob {
    /// Wrap encoded bytes, sniffing the MIME type and falling back to `fallback_mime`.
    pub fn sniff(bytes: Vec<u8>, fallback_mime: &str) -> Self {
        let mime_type = image::guess_format(&bytes)
            .map(|f| f.to_mime_type().to_string())
            .unwrap_or_else(|_| fallback_mime.to_string());
        Self {
            mime_type,
            bytes: Arc::new(bytes),
        }
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the blob has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Live image blobs keyed by their generated URL.
///
/// Cloning shares the same underlying table.
#[derive(Clone, Debug, Default)]
pub struct ImageRegistry {
    live: Arc<Mutex<HashMap<String, ImageBlob>>>,
}

impl ImageRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blob under a fresh `<scheme>:<uuid>` URL.
    pub fn register(&self, scheme: &str, blob: ImageBlob) -> ImageSource {
        let url = format!("{scheme}:{}", uuid::Uuid::new_v4());
        tracing::debug!(%url, mime = %blob.mime_type, bytes = blob.len(), "registered image source");
        self.lock().insert(url.clone(), blob);
        ImageSource {
            url,
            registry: self.clone(),
        }
    }

    /// Blob registered under `url`, if still live.
    pub fn get(&self, url: &str) -> Option<ImageBlob> {
        self.lock().get(url).cloned()
    }

    /// Drop the blob registered under `url`. Returns whether it was live.
    pub fn revoke(&self, url: &str) -> bool {
        self.lock().remove(url).is_some()
    }

    /// Number of live blobs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no blob is live.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ImageBlob>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Revocable handle to a registered image.
///
/// The blob stays live until [`ImageSource::revoke`] is called; dropping the handle does not
/// release it.
#[derive(Clone)]
pub struct ImageSource {
    url: String,
    registry: ImageRegistry,
}

impl ImageSource {
    /// URL the presentation layer can reference.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The registered blob, or `None` once revoked.
    pub fn blob(&self) -> Option<ImageBlob> {
        self.registry.get(&self.url)
    }

    /// Release the blob. Idempotent.
    pub fn revoke(&self) {
        if self.registry.revoke(&self.url) {
            tracing::debug!(url = %self.url, "revoked image source");
        }
    }

    /// Whether the blob has been released.
    pub fn is_revoked(&self) -> bool {
        self.blob().is_none()
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageSource")
            .field("url", &self.url)
            .field("revoked", &self.is_revoked())
            .finish()
    }
}

impl PartialEq for ImageSource {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image_source.rs"]
mod tests;

use std::path::Path;

use futures::future::try_join_all;
use serde::Deserialize;

use crate::{
    assets::archive::Archive,
    assets::image_source::{ImageBlob, ImageRegistry, ImageSource},
    document::model::{AssetReference, Document, RefClass},
    document::parse::{Node, parse_node_str},
    foundation::error::{SketchError, SketchResult},
};

/// Knobs for archive entry naming and image handles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverOpts {
    /// Extension appended to nested page references without one.
    pub page_extension: String,
    /// Extension appended to image references without one.
    pub image_extension: String,
    /// MIME type used when image bytes cannot be sniffed.
    pub fallback_image_mime: String,
    /// Scheme of generated image source URLs.
    pub url_scheme: String,
}

impl Default for ResolverOpts {
    fn default() -> Self {
        Self {
            page_extension: "json".to_string(),
            image_extension: "png".to_string(),
            fallback_image_mime: "image/png".to_string(),
            url_scheme: "blob".to_string(),
        }
    }
}

/// What an asset reference resolved to.
#[derive(Debug)]
pub enum ResolvedAsset {
    /// A nested page, built into a node graph.
    Page(Box<Node>),
    /// A registered image.
    Image(ImageSource),
}

impl ResolvedAsset {
    /// The page node, if this is a page.
    pub fn as_page(&self) -> Option<&Node> {
        match self {
            Self::Page(n) => Some(n),
            Self::Image(_) => None,
        }
    }

    /// The image handle, if this is an image.
    pub fn as_image(&self) -> Option<&ImageSource> {
        match self {
            Self::Image(s) => Some(s),
            Self::Page(_) => None,
        }
    }
}

/// Loads lazily referenced archive entries.
///
/// Every call re-reads the archive; nothing is cached between calls.
#[derive(Clone, Debug, Default)]
pub struct AssetResolver {
    opts: ResolverOpts,
    images: ImageRegistry,
}

impl AssetResolver {
    /// Resolver with the given options and a fresh image registry.
    pub fn new(opts: ResolverOpts) -> Self {
        Self {
            opts,
            images: ImageRegistry::new(),
        }
    }

    /// Options in effect.
    pub fn opts(&self) -> &ResolverOpts {
        &self.opts
    }

    /// Registry that owns every image this resolver handed out.
    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }

    /// Resolve one reference against `archive`.
    #[tracing::instrument(
        skip(self, reference, archive),
        fields(ref_class = reference.ref_class.as_str(), ref_id = %reference.ref_id)
    )]
    pub async fn resolve(
        &self,
        reference: &AssetReference,
        archive: &dyn Archive,
    ) -> SketchResult<ResolvedAsset> {
        match &reference.ref_class {
            RefClass::NestedPage => {
                let name = entry_name(&reference.ref_id, &self.opts.page_extension);
                let text = archive.read_text(&name).await?;
                let node = parse_node_str(&text)?;
                tracing::debug!(entry = %name, "resolved nested page");
                Ok(ResolvedAsset::Page(Box::new(node)))
            }
            RefClass::ImageData => {
                let name = entry_name(&reference.ref_id, &self.opts.image_extension);
                let bytes = archive.read_binary(&name).await?;
                let blob = ImageBlob::sniff(bytes, &self.opts.fallback_image_mime);
                tracing::debug!(entry = %name, mime = %blob.mime_type, "resolved image data");
                Ok(ResolvedAsset::Image(
                    self.images.register(&self.opts.url_scheme, blob),
                ))
            }
            RefClass::Other(class) => Err(SketchError::unsupported_reference(class.clone())),
        }
    }

    /// Resolve every page of a document concurrently; fails if any page fails.
    pub async fn resolve_pages(
        &self,
        document: &Document,
        archive: &dyn Archive,
    ) -> SketchResult<Vec<Node>> {
        let pending = document
            .pages
            .iter()
            .map(|page| self.resolve_page(page, archive));
        try_join_all(pending).await
    }

    async fn resolve_page(
        &self,
        reference: &AssetReference,
        archive: &dyn Archive,
    ) -> SketchResult<Node> {
        match self.resolve(reference, archive).await? {
            ResolvedAsset::Page(node) => Ok(*node),
            ResolvedAsset::Image(source) => {
                source.revoke();
                Err(SketchError::validation(format!(
                    "document page {} is not a page reference",
                    reference.ref_id
                )))
            }
        }
    }
}

/// Archive entry name for a reference id, appending `ext` only when the id has no extension.
pub fn entry_name(ref_id: &str, ext: &str) -> String {
    if Path::new(ref_id).extension().is_some() || ext.is_empty() {
        ref_id.to_string()
    } else {
        format!("{ref_id}.{ext}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolver.rs"]
mod tests;

//! Archive access and lazy resolution of nested pages and image data.

pub(crate) mod archive;
pub(crate) mod image_source;
pub(crate) mod resolver;

//! Shape outline projection into absolute vector paths.

pub(crate) mod path;

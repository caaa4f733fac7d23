//! Typed document graph and the node factory that builds it from archive JSON.

pub(crate) mod class;
pub(crate) mod model;
pub(crate) mod parse;

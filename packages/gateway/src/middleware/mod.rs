//! Request extractors applied ahead of the handlers.

pub mod identity;

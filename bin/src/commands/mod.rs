//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod guidance;
pub(crate) mod profile;
pub(crate) mod quote;
pub(crate) mod template;

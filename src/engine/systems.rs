//! The stages of the filter pipeline, in the order the engine runs them.

pub mod edge_filter;
pub mod radial_layout;
pub mod survivors;

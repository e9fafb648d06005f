//! Field layout engine: area, marker placement, sensor placement and map
//! display data for a hand-drawn field boundary.

pub mod artifacts;
pub mod field_context;
pub mod geometry;
pub mod layout;
pub mod water;

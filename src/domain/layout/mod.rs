//! Row packing of features into non-overlapping display lanes.

pub mod rows;

pub use rows::*;

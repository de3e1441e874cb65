//! Coordinate scale and visible-window value objects.

pub mod value_objects;

pub use crate::view_state::ViewState;
pub use value_objects::*;

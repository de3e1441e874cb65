//! Sequence aggregate: the residues, the annotated features and the
//! normalization that makes features ready for row packing.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;

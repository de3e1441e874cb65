pub mod config;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod sequence;
pub mod viewport;

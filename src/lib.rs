//! Linear sequence feature viewer compiled to WebAssembly.
//!
//! Features annotated on a DNA/protein sequence are packed into rows, drawn
//! as strand arrows above a ruler and re-rendered on every zoom, pan or
//! resize.

use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;
pub mod view_state;

pub use application::SeqDisplayService;
pub use domain::config::DisplayConfig;
pub use domain::errors::{DisplayError, DisplayResult};
pub use presentation::SeqDisplayApi;

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "seqdisplay {} ready", env!("CARGO_PKG_VERSION"));
}

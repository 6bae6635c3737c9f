pub mod config;
pub mod logging;
pub mod runtime;
pub mod wiring;

pub use config::load_config;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{build_deps, WiringError};

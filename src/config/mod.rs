pub mod defaults;
pub mod loader;
pub mod types;

pub use defaults::{DEFAULT_CONFIG, DEFAULT_LOCALE};
pub use loader::ConfigLoader;
pub use types::*;

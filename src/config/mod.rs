pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ConverterConfig, DEFAULT_SOURCE_DIR, DEFAULT_TARGET_DIR};

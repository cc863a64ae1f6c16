pub mod collection;
pub mod config;
pub mod error;
pub mod logger;
pub mod parser;

// Re-export commonly used types
pub use collection::{BatchConverter, ConversionReport, convert};
pub use config::{ConfigLoader, ConverterConfig};
pub use error::{ConvertError, Result};
pub use parser::{HeaderEntry, ParseError, RequestRecord, parse_payload};

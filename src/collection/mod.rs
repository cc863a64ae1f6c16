pub mod converter;
pub mod report;
pub mod writer;

pub use converter::{BatchConverter, FolderContents};
pub use report::{CollectionSummary, ConversionReport, ReportPrinter};
pub use writer::CollectionWriter;

use crate::config::ConverterConfig;
use crate::error::Result;

/// 使用给定配置执行一次完整转换
pub fn convert(config: ConverterConfig) -> Result<ConversionReport> {
    BatchConverter::new(config).run()
}

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_DIR: &str = "./source/";
pub const DEFAULT_TARGET_DIR: &str = "./target/";

/// 转换配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// 源目录，每个子目录是一个 collection
    pub source_dir: PathBuf,

    /// 输出目录，每个 collection 写入 `<name>.json`
    pub target_dir: PathBuf,

    /// 按名称排序子目录和文件；否则沿用目录列举顺序
    pub sort_entries: bool,

    /// 跳过无法解析的文件而不是中止
    pub skip_invalid: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            sort_entries: false,
            skip_invalid: false,
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = dir.into();
        self
    }

    pub fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

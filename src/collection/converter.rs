use crate::collection::report::{CollectionSummary, ConversionReport};
use crate::collection::writer::CollectionWriter;
use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::parser::{PayloadParser, RequestRecord, record_name};
use std::fs;
use std::path::{Path, PathBuf};

/// 读取一个 collection 目录的结果
#[derive(Debug, Default)]
pub struct FolderContents {
    pub records: Vec<RequestRecord>,
    pub skipped: Vec<PathBuf>,
}

/// 批量转换器
///
/// 源目录下的每个子目录是一个 collection，子目录中的每个文件是一个原始请求。
/// 每个 collection 写入 `<target>/<name>.json`。
pub struct BatchConverter {
    config: ConverterConfig,
    parser: PayloadParser,
}

impl BatchConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            parser: PayloadParser::new(),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// 转换所有 collection
    ///
    /// 任何错误都会中止转换；已写入的 collection 文件保留。
    pub fn run(&mut self) -> Result<ConversionReport> {
        let source = self.config.source_dir.clone();
        let target = self.config.target_dir.clone();

        Self::ensure_dir(&source)?;
        Self::ensure_dir(&target)?;

        let mut report = ConversionReport::new();

        for folder in self.list_entries(&source)? {
            if !folder.is_dir() {
                tracing::debug!(path = %folder.display(), "Skipping non-directory entry");
                continue;
            }

            let Some(name) = folder.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };

            let contents = self.convert_folder(&folder)?;
            let output_path = target.join(format!("{}.json", name));
            CollectionWriter::write_atomic(&output_path, &contents.records)?;

            tracing::info!(
                collection = %name,
                records = contents.records.len(),
                output = %output_path.display(),
                "Wrote collection"
            );

            report.add(CollectionSummary {
                name,
                output_path,
                records: contents.records.len(),
                skipped: contents.skipped,
            });
        }

        Ok(report)
    }

    /// 解析一个 collection 目录中的所有文件
    pub fn convert_folder(&mut self, folder: &Path) -> Result<FolderContents> {
        let mut contents = FolderContents::default();

        for path in self.list_entries(folder)? {
            if !path.is_file() {
                tracing::warn!(path = %path.display(), "Skipping non-file entry");
                continue;
            }

            match self.convert_file(&path) {
                Ok(record) => contents.records.push(record),
                Err(ConvertError::Parse { path, source }) if self.config.skip_invalid => {
                    tracing::warn!(path = %path.display(), error = %source, "Skipping malformed request");
                    contents.skipped.push(path);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(contents)
    }

    /// 读取并解析单个文件，名称取自文件名
    pub fn convert_file(&mut self, path: &Path) -> Result<RequestRecord> {
        let payload = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        let record = self
            .parser
            .parse(&payload)
            .map_err(|e| ConvertError::parse(path, e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        tracing::debug!(path = %path.display(), method = %record.method, url = %record.url, "Parsed request");

        Ok(record.with_name(record_name(&file_name)))
    }

    /// 列出目录项，按配置决定是否排序
    fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read_dir = fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ConvertError::io(dir, e))?;
            entries.push(entry.path());
        }

        if self.config.sort_entries {
            entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        Ok(entries)
    }

    fn ensure_dir(dir: &Path) -> Result<()> {
        if !dir.exists() {
            tracing::debug!(path = %dir.display(), "Creating directory");
        }
        fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))
    }
}

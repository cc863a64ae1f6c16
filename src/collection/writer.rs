use crate::error::{ConvertError, Result};
use crate::parser::RequestRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o644;

/// Collection 输出
pub struct CollectionWriter;

impl CollectionWriter {
    /// 序列化为 2 空格缩进的 JSON 数组
    pub fn to_json(records: &[RequestRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    /// 原子写入 collection 文件
    ///
    /// 先写入同目录下的临时文件，再重命名覆盖目标文件，
    /// 失败时目标路径保持原样。
    pub fn write_atomic(path: &Path, records: &[RequestRecord]) -> Result<()> {
        let json = Self::to_json(records)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(dir, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| ConvertError::io(file.path(), e))?;
        file.flush().map_err(|e| ConvertError::io(file.path(), e))?;
        Self::apply_permissions(file.as_file(), path)
            .map_err(|e| ConvertError::io(file.path(), e))?;

        file.persist(path).map_err(|e| ConvertError::Persist {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// 临时文件默认为 0600；沿用已有目标文件的权限，否则使用 0644
    #[cfg(unix)]
    fn apply_permissions(file: &File, target: &Path) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let permissions = match fs::metadata(target) {
            Ok(metadata) => metadata.permissions(),
            Err(_) => fs::Permissions::from_mode(DEFAULT_MODE),
        };
        file.set_permissions(permissions)
    }

    #[cfg(not(unix))]
    fn apply_permissions(_file: &File, _target: &Path) -> std::io::Result<()> {
        Ok(())
    }
}

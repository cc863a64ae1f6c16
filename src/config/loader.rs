use crate::config::types::ConverterConfig;
use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    pub const CONFIG_FILE: &'static str = "httpcollect.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ConverterConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;

        toml::from_str(&content).map_err(|e| {
            ConvertError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// 加载配置
    ///
    /// 显式给出路径时必须能读取并解析；否则按以下顺序查找，找不到则使用默认值：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/httpcollect/
    pub fn load(explicit: Option<&Path>) -> Result<ConverterConfig> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::load_from_path(&path)
            }
            None => Ok(ConverterConfig::default()),
        }
    }

    /// 查找配置文件
    pub fn find_config_file() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_upwards(&current).or_else(Self::user_config_path)
    }

    /// 从 `start` 开始逐级向上查找
    fn find_upwards(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    fn user_config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let config_path = home
            .join(".config")
            .join("httpcollect")
            .join(Self::CONFIG_FILE);

        config_path.is_file().then_some(config_path)
    }
}

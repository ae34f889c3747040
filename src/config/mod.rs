// ==========================================
// 现场维修工单台账系统 - 配置层
// ==========================================
// 职责: 控制台运行配置的加载与默认值
// 存储: JSON 文件(可选;缺省时全部走默认值 + 内置演示数据源)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件解析失败: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

// ==========================================
// ConsoleConfig - 控制台配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// 界面语言("zh-CN" / "en")
    pub locale: String,

    /// 金额显示货币符号(仅展示层使用)
    pub currency_symbol: String,

    /// 工单数据文件(None 时使用内置演示数据源)
    pub orders_file: Option<PathBuf>,

    /// 配件目录数据文件(None 时使用内置演示数据源)
    pub catalog_file: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            currency_symbol: "¥".to_string(),
            orders_file: None,
            catalog_file: None,
        }
    }
}

impl ConsoleConfig {
    /// 从 JSON 文件加载配置
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// 默认配置文件路径(系统配置目录下)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("field-service-console").join("config.json"))
    }

    /// 应用语言设置
    pub fn apply_locale(&self) {
        crate::i18n::set_locale(&self.locale);
    }

    /// 是否配置了文件数据源(工单与目录文件需同时给出)
    pub fn file_source_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.orders_file, &self.catalog_file) {
            (Some(orders), Some(catalog)) => Some((orders.as_path(), catalog.as_path())),
            _ => None,
        }
    }
}

// ==========================================
// 现场维修工单台账系统 - 数据源层
// ==========================================
// 职责: 向核心提供只读的工单列表 / 工程师档案 / 配件目录
// 红线: 核心不得假设单例内存列表;状态字符串在本层解析边界校验,
//       未知状态是致命数据完整性错误,不做静默默认
// ==========================================

pub mod json_file;
pub mod mock;

use crate::domain::order::{EngineerProfile, WorkOrder};
use crate::domain::part::Part;
use thiserror::Error;

// ==========================================
// 数据源错误
// ==========================================
#[derive(Error, Debug)]
pub enum ProviderError {
    /// 未知工单状态(数据完整性错误,整批拒绝)
    #[error("未知工单状态: order_id={order_id}, value={value}")]
    UnknownStatus { order_id: String, value: String },

    /// 未知优先级
    #[error("未知优先级: order_id={order_id}, value={value}")]
    UnknownPriority { order_id: String, value: String },

    /// 配件金额非法(负数)
    #[error("配件金额非法: part_id={part_id}, field={field}, value={value}")]
    InvalidAmount {
        part_id: String,
        field: String,
        value: i64,
    },

    /// 文件读取失败
    #[error("数据文件读取失败: {0}")]
    FileReadError(String),

    /// JSON 解析失败
    #[error("数据文件解析失败: {0}")]
    ParseError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::ParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ProviderResult<T> = Result<T, ProviderError>;

// ==========================================
// Trait: OrderSource - 工单数据源
// ==========================================
// 每次刷新整批读取;核心持有返回值的副本
pub trait OrderSource {
    /// 拉取全部工单
    fn fetch_orders(&self) -> ProviderResult<Vec<WorkOrder>>;

    /// 拉取工程师档案
    fn fetch_profile(&self) -> ProviderResult<EngineerProfile>;
}

// ==========================================
// Trait: PartsSource - 配件目录数据源
// ==========================================
pub trait PartsSource {
    /// 拉取静态配件目录
    fn fetch_catalog(&self) -> ProviderResult<Vec<Part>>;
}

// 重导出实现
pub use json_file::JsonFileSource;
pub use mock::MockDataSource;

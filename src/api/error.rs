// ==========================================
// 现场维修工单台账系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换数据源/引擎错误为用户可读的错误消息
// 红线: 所有错误信息必须包含显式原因(可解释性)
// ==========================================

use crate::domain::types::OrderStatus;
use crate::engine::lifecycle::LifecycleError;
use crate::provider::ProviderError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效的状态转换: action={action} status={status}")]
    InvalidTransition { action: String, status: String },

    #[error("未知操作: {0}")]
    UnknownAction(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    // ==========================================
    // 并发控制错误
    // ==========================================
    /// 乐观并发检查失败: 存储中的状态已与调用方快照不一致
    #[error("工单状态冲突: order_id={order_id}, expected={expected}, actual={actual}")]
    StatusConflict {
        order_id: String,
        expected: OrderStatus,
        actual: OrderStatus,
    },

    // ==========================================
    // 数据源错误
    // ==========================================
    #[error("数据校验失败: {0}")]
    ValidationError(String),

    #[error("数据源错误: {0}")]
    DataSource(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ProviderError 转换
// 目的: 将数据源层的技术错误转换为用户可读的业务错误
// ==========================================
impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            // 数据完整性错误(解析边界拒绝)
            ProviderError::UnknownStatus { .. }
            | ProviderError::UnknownPriority { .. }
            | ProviderError::InvalidAmount { .. } => ApiError::ValidationError(err.to_string()),

            // 读取/解析错误
            ProviderError::FileReadError(msg) => ApiError::DataSource(msg),
            ProviderError::ParseError(msg) => ApiError::DataSource(msg),

            ProviderError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 LifecycleError 转换
// ==========================================
impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::InvalidTransition { action, status } => ApiError::InvalidTransition {
                action: action.as_str().to_string(),
                status: status.as_str().to_string(),
            },
            LifecycleError::MissingCompletionForm(order_id) => {
                ApiError::InvalidInput(format!("缺少完工提交单: order_id={}", order_id))
            }
            LifecycleError::NotTransitionAction(action) => {
                ApiError::InternalError(format!("非状态转换操作误入转换通道: {}", action))
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

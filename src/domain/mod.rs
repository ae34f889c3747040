// ==========================================
// 现场维修工单台账系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod action_log;
pub mod order;
pub mod part;
pub mod types;

// 重导出核心类型
pub use action_log::DispatchLog;
pub use order::{CompletionForm, EngineerProfile, WorkOrder, DEFAULT_AFTER_SALES_STATUS};
pub use part::{format_cents, Part, PartsSelection};
pub use types::{IntentKind, OrderAction, OrderStatus, Priority};

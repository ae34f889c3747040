// ==========================================
// 现场维修工单台账系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 工单生命周期与配件报价核心(展示层为外部协作方)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 数据源层 - 只读数据提供方
pub mod provider;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{IntentKind, OrderAction, OrderStatus, Priority};

// 领域实体
pub use domain::{CompletionForm, DispatchLog, EngineerProfile, Part, PartsSelection, WorkOrder};

// 引擎
pub use engine::{
    ActionDispatcher, CatalogIndex, DispatchResult, LifecycleEngine, LifecycleError,
    PricingAggregator, PrioritySorter, Quote, TransitionContext,
};

// API
pub use api::{ApiError, ApiResult, OrderApi, PartsApi};

// 配置
pub use config::ConsoleConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "现场维修工单台账系统";

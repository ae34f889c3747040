// ==========================================
// 现场维修工单台账系统 - 领域类型定义
// ==========================================
// 依据: 工单生命周期设计 v0.2 - 状态体系
// 红线: 状态枚举封闭,未知状态在解析边界拒绝,不做静默默认
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工单状态 (Order Status)
// ==========================================
// PENDING 为唯一初始状态, COMPLETED 为终态
// 序列化格式: SCREAMING_SNAKE_CASE (与数据源一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,    // 待接单
    ToVisit,    // 待上门
    InProgress, // 处理中
    OnHold,     // 停表中
    AfterSales, // 售后中
    Completed,  // 已完成
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderStatus {
    /// 全部状态(按页签顺序)
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::ToVisit,
        OrderStatus::InProgress,
        OrderStatus::OnHold,
        OrderStatus::AfterSales,
        OrderStatus::Completed,
    ];

    /// 转换为数据源存储的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::ToVisit => "TO_VISIT",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::OnHold => "ON_HOLD",
            OrderStatus::AfterSales => "AFTER_SALES",
            OrderStatus::Completed => "COMPLETED",
        }
    }

    /// 从字符串解析状态
    ///
    /// 未知字符串返回 None,由调用方(数据源边界)决定如何报错
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Some(OrderStatus::Pending),
            "TO_VISIT" => Some(OrderStatus::ToVisit),
            "IN_PROGRESS" => Some(OrderStatus::InProgress),
            "ON_HOLD" => Some(OrderStatus::OnHold),
            "AFTER_SALES" => Some(OrderStatus::AfterSales),
            "COMPLETED" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// 是否为终态(不再推进)
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// 页签显示名称(多语言)
    pub fn label(&self) -> String {
        let key = match self {
            OrderStatus::Pending => "status.pending",
            OrderStatus::ToVisit => "status.to_visit",
            OrderStatus::InProgress => "status.in_progress",
            OrderStatus::OnHold => "status.on_hold",
            OrderStatus::AfterSales => "status.after_sales",
            OrderStatus::Completed => "status.completed",
        };
        crate::i18n::t(key)
    }
}

// ==========================================
// 优先级 (Priority)
// ==========================================
// 顺序: Low < Medium < High < Critical (用于排序与升级展示)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,      // 低
    Medium,   // 中
    High,     // 高
    Critical, // 紧急
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Priority {
    /// 转换为数据源存储的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// 从字符串解析优先级
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

// ==========================================
// 工单操作 (Order Action)
// ==========================================
// 前端手势的闭集,线格式为 snake_case (与 UI 事件名一致)
// 未知操作名解析为 None,调度层以拒绝结果返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    Accept,         // 接单: PENDING -> TO_VISIT
    ConfirmArrival, // 确认到场: TO_VISIT -> IN_PROGRESS (记录开工时间)
    Pause,          // 暂停计时: IN_PROGRESS -> ON_HOLD
    Resume,         // 恢复处理: ON_HOLD -> IN_PROGRESS
    Complete,       // 完工提交: IN_PROGRESS -> COMPLETED / AFTER_SALES
    Parts,          // 打开配件面板(不改状态)
    Guide,          // 打开维修指引(不改状态)
    Support,        // 联系客服(全局兜底,不改状态)
    Navigate,       // 打开导航(不改状态)
    Reassign,       // 工单转派(不改状态)
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderAction {
    /// 全部操作(合法性表穷举用)
    pub const ALL: [OrderAction; 10] = [
        OrderAction::Accept,
        OrderAction::ConfirmArrival,
        OrderAction::Pause,
        OrderAction::Resume,
        OrderAction::Complete,
        OrderAction::Parts,
        OrderAction::Guide,
        OrderAction::Support,
        OrderAction::Navigate,
        OrderAction::Reassign,
    ];

    /// 转换为线格式字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Accept => "accept",
            OrderAction::ConfirmArrival => "confirm_arrival",
            OrderAction::Pause => "pause",
            OrderAction::Resume => "resume",
            OrderAction::Complete => "complete",
            OrderAction::Parts => "parts",
            OrderAction::Guide => "guide",
            OrderAction::Support => "support",
            OrderAction::Navigate => "navigate",
            OrderAction::Reassign => "reassign",
        }
    }

    /// 从线格式字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "accept" => Some(OrderAction::Accept),
            "confirm_arrival" => Some(OrderAction::ConfirmArrival),
            "pause" => Some(OrderAction::Pause),
            "resume" => Some(OrderAction::Resume),
            "complete" => Some(OrderAction::Complete),
            "parts" => Some(OrderAction::Parts),
            "guide" => Some(OrderAction::Guide),
            "support" => Some(OrderAction::Support),
            "navigate" => Some(OrderAction::Navigate),
            "reassign" => Some(OrderAction::Reassign),
            _ => None,
        }
    }

    /// 是否为状态转换类操作(其余为面板意图类)
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            OrderAction::Accept
                | OrderAction::ConfirmArrival
                | OrderAction::Pause
                | OrderAction::Resume
                | OrderAction::Complete
        )
    }

    /// 按钮显示名称(多语言)
    pub fn label(&self) -> String {
        crate::i18n::t(&format!("action.{}", self.as_str()))
    }
}

// ==========================================
// 面板意图 (Intent Kind)
// ==========================================
// 调度结果中的"打开面板"请求,由展示层消费,核心不改状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    CompletionForm, // 完工提交单(complete 未携带表单时)
    Guide,          // 维修指引面板
    Navigation,     // 导航面板
    Parts,          // 配件选择面板
    Support,        // 客服会话
    Reassign,       // 转派面板
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::CompletionForm => write!(f, "COMPLETION_FORM"),
            IntentKind::Guide => write!(f, "GUIDE"),
            IntentKind::Navigation => write!(f, "NAVIGATION"),
            IntentKind::Parts => write!(f, "PARTS"),
            IntentKind::Support => write!(f, "SUPPORT"),
            IntentKind::Reassign => write!(f, "REASSIGN"),
        }
    }
}

// ==========================================
// 现场维修工单台账系统 - 工单领域模型
// ==========================================
// 依据: 工单生命周期设计 v0.2 - 主实体定义
// 红线: id 创建后不可变,状态只能经由生命周期引擎推进
// ==========================================

use crate::domain::types::{OrderStatus, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 售后状态初始值(完工提交标记售后但未填写说明时使用)
pub const DEFAULT_AFTER_SALES_STATUS: &str = "PENDING_REVIEW";

// ==========================================
// WorkOrder - 工单
// ==========================================
// 用途: 数据源创建(初始状态恒为 PENDING),核心只读 + 值替换式更新
// 红线: after_sales_status 仅在 AFTER_SALES 状态有意义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    // ===== 主键 =====
    pub id: String, // 工单号(唯一且稳定)

    // ===== 客户与位置信息 =====
    pub store_name: String,           // 门店名称
    pub address: String,              // 服务地址
    pub distance: Option<String>,     // 距离显示值(展示层口径,不参与计算)
    pub lat: f64,                     // 纬度(导航面板透传)
    pub lng: f64,                     // 经度(导航面板透传)

    // ===== 故障信息 =====
    pub fault_description: String, // 故障描述
    pub equipment_type: String,    // 设备类型(配件目录键,如 HVAC / Refrigeration)

    // ===== 生命周期状态 =====
    pub status: OrderStatus,                  // 工单状态(六态之一)
    pub priority: Priority,                   // 优先级
    pub started_at: Option<DateTime<Utc>>,    // 开工时间(confirm_arrival 时由调用方显式传入)
    pub after_sales_status: Option<String>,   // 售后跟进状态(仅 AFTER_SALES)
}

impl WorkOrder {
    /// 是否允许出现在客服会话的关联工单列表
    ///
    /// 口径: 待接单与处理中的工单
    pub fn is_chat_attachable(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::InProgress)
    }
}

// ==========================================
// CompletionForm - 完工提交单
// ==========================================
// 用途: complete 操作的载荷;是否转售后由表单标记决定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionForm {
    pub solution: String,                  // 处理方案(必填,如 "Part Replaced")
    pub notes: Option<String>,             // 维修备注
    pub needs_after_sales: bool,           // 是否转入售后跟进
    pub after_sales_note: Option<String>,  // 售后说明(转售后时作为初始跟进状态)
}

impl CompletionForm {
    /// 直接完工(不转售后)
    pub fn resolved(solution: &str) -> Self {
        Self {
            solution: solution.to_string(),
            notes: None,
            needs_after_sales: false,
            after_sales_note: None,
        }
    }

    /// 完工并转入售后跟进
    pub fn with_after_sales(solution: &str, note: Option<&str>) -> Self {
        Self {
            solution: solution.to_string(),
            notes: None,
            needs_after_sales: true,
            after_sales_note: note.map(|s| s.to_string()),
        }
    }

    /// 售后初始跟进状态(空白说明回退到默认值)
    pub fn initial_after_sales_status(&self) -> String {
        self.after_sales_note
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_AFTER_SALES_STATUS.to_string())
    }
}

// ==========================================
// EngineerProfile - 工程师档案
// ==========================================
// 用途: 侧边栏展示透传,核心不做任何计算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerProfile {
    pub name: String,            // 姓名
    pub company: String,         // 所属服务商
    pub is_online: bool,         // 在线接单状态
    pub today_orders: i32,       // 今日工单数
    pub balance_cents: i64,      // 账户余额(分)
    pub credit_score: i32,       // 信用分
    pub satisfaction_count: i32, // 好评数
    pub complaint_count: i32,    // 投诉数
}

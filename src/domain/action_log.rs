// ==========================================
// 现场维修工单台账系统 - 调度日志领域模型
// ==========================================
// 依据: 工单生命周期设计 v0.2 - 审计要求
// 红线: 所有成功调度必须留痕(转换与面板意图均记录)
// ==========================================

use crate::domain::types::{OrderAction, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ==========================================
// DispatchLog - 调度日志
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchLog {
    // ===== 主键 =====
    pub log_id: String, // 日志ID (UUID v4)

    // ===== 调度要素 =====
    pub order_id: String,                    // 工单号
    pub action: OrderAction,                 // 执行的操作
    pub actor: String,                       // 操作人(工程师标识)
    pub dispatched_at: DateTime<Utc>,        // 调度时间(由调用方显式传入)

    // ===== 状态变化 =====
    pub status_before: OrderStatus,          // 调度前状态
    pub status_after: Option<OrderStatus>,   // 调度后状态(面板意图为 None)

    // ===== 操作负载 =====
    pub payload_json: Option<JsonValue>,     // 操作参数(如完工提交单)
}

impl DispatchLog {
    /// 创建新的调度日志
    pub fn new(
        order_id: &str,
        action: OrderAction,
        actor: &str,
        dispatched_at: DateTime<Utc>,
        status_before: OrderStatus,
        status_after: Option<OrderStatus>,
    ) -> Self {
        Self {
            log_id: uuid::Uuid::new_v4().to_string(),
            order_id: order_id.to_string(),
            action,
            actor: actor.to_string(),
            dispatched_at,
            status_before,
            status_after,
            payload_json: None,
        }
    }

    /// 附加操作负载(转换为JSON)
    pub fn with_payload<T: serde::Serialize>(mut self, payload: &T) -> Self {
        self.payload_json = serde_json::to_value(payload).ok();
        self
    }

    /// 是否为状态转换记录
    pub fn is_transition(&self) -> bool {
        self.status_after.is_some()
    }
}

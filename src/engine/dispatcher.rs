// ==========================================
// 现场维修工单台账系统 - 操作调度器
// ==========================================
// 依据: 工单生命周期设计 v0.2 - 操作路由
// 职责: (操作名, 工单) -> 状态转换 / 面板意图 / 拒绝
// 红线: 所有规则输出 reason;拒绝是正常结果,不走错误通道
// ==========================================

use crate::domain::order::WorkOrder;
use crate::domain::types::{IntentKind, OrderAction, OrderStatus};
use crate::engine::lifecycle::{LifecycleEngine, TransitionContext};
use crate::i18n;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// DispatchResult - 调度结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchResult {
    /// 状态已转换;调用方用新值替换存储中的工单
    Transitioned { order: WorkOrder },

    /// 请求展示层打开面板,工单状态不变
    Intent { intent: IntentKind, order: WorkOrder },

    /// 操作被拒绝(未知操作或当前状态不允许),向用户提示 reason
    Rejected {
        action: String,
        status: OrderStatus,
        reason: String,
    },
}

impl DispatchResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, DispatchResult::Rejected { .. })
    }
}

// ==========================================
// ActionDispatcher - 操作调度器
// ==========================================
pub struct ActionDispatcher {
    lifecycle: LifecycleEngine,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self {
            lifecycle: LifecycleEngine::new(),
        }
    }

    pub fn lifecycle(&self) -> &LifecycleEngine {
        &self.lifecycle
    }

    /// 调度一次用户操作
    ///
    /// 路由规则:
    /// 1. 未知操作名 -> Rejected
    /// 2. 操作对当前状态不合法 -> Rejected
    /// 3. complete 未携带完工提交单 -> Intent(COMPLETION_FORM) (先弹表单)
    /// 4. 转换类操作 -> Transitioned(新工单值)
    /// 5. 意图类操作 -> Intent(对应面板)
    ///
    /// 给定 ctx.now 后结果确定;意图与拒绝可重复调用无副作用
    #[instrument(skip(self, order, ctx), fields(order_id = %order.id, status = %order.status))]
    pub fn dispatch(
        &self,
        action_name: &str,
        order: &WorkOrder,
        ctx: &TransitionContext,
    ) -> DispatchResult {
        let Some(action) = OrderAction::from_str(action_name) else {
            tracing::warn!(action = action_name, "未知操作名,拒绝调度");
            return DispatchResult::Rejected {
                action: action_name.to_string(),
                status: order.status,
                reason: i18n::t_with_args("dispatch.unknown_action", &[("action", action_name)]),
            };
        };

        if !self.lifecycle.is_action_valid(action, order.status) {
            return DispatchResult::Rejected {
                action: action_name.to_string(),
                status: order.status,
                reason: i18n::t_with_args(
                    "dispatch.invalid_action_for_status",
                    &[("action", action.as_str()), ("status", order.status.as_str())],
                ),
            };
        }

        // complete 未带表单时先请求展示层弹出完工提交单
        if action == OrderAction::Complete && ctx.completion.is_none() {
            return DispatchResult::Intent {
                intent: IntentKind::CompletionForm,
                order: order.clone(),
            };
        }

        if action.is_transition() {
            match self.lifecycle.transition(order, action, ctx) {
                Ok(next) => DispatchResult::Transitioned { order: next },
                Err(err) => DispatchResult::Rejected {
                    action: action_name.to_string(),
                    status: order.status,
                    reason: err.to_string(),
                },
            }
        } else {
            DispatchResult::Intent {
                intent: Self::intent_kind(action),
                order: order.clone(),
            }
        }
    }

    /// 意图类操作对应的面板
    fn intent_kind(action: OrderAction) -> IntentKind {
        match action {
            OrderAction::Guide => IntentKind::Guide,
            OrderAction::Navigate => IntentKind::Navigation,
            OrderAction::Parts => IntentKind::Parts,
            OrderAction::Support => IntentKind::Support,
            OrderAction::Reassign => IntentKind::Reassign,
            // 转换类操作不会走到这里(dispatch 已分流)
            OrderAction::Accept
            | OrderAction::ConfirmArrival
            | OrderAction::Pause
            | OrderAction::Resume
            | OrderAction::Complete => IntentKind::CompletionForm,
        }
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Priority;
    use chrono::Utc;

    fn order(status: OrderStatus) -> WorkOrder {
        WorkOrder {
            id: "WO-D".to_string(),
            store_name: "Store".to_string(),
            address: "Addr".to_string(),
            distance: None,
            lat: 0.0,
            lng: 0.0,
            fault_description: "desc".to_string(),
            equipment_type: "HVAC".to_string(),
            status,
            priority: Priority::Low,
            started_at: None,
            after_sales_status: None,
        }
    }

    #[test]
    fn test_unknown_action_rejected() {
        let dispatcher = ActionDispatcher::new();
        let ctx = TransitionContext::at(Utc::now());
        let result = dispatcher.dispatch("warp_drive", &order(OrderStatus::Pending), &ctx);
        assert!(result.is_rejected());
    }

    #[test]
    fn test_complete_without_form_opens_completion_form() {
        let dispatcher = ActionDispatcher::new();
        let ctx = TransitionContext::at(Utc::now());
        match dispatcher.dispatch("complete", &order(OrderStatus::InProgress), &ctx) {
            DispatchResult::Intent { intent, order } => {
                assert_eq!(intent, IntentKind::CompletionForm);
                assert_eq!(order.status, OrderStatus::InProgress);
            }
            other => panic!("expected completion-form intent, got {:?}", other),
        }
    }

    #[test]
    fn test_intent_is_idempotent() {
        let dispatcher = ActionDispatcher::new();
        let ctx = TransitionContext::at(Utc::now());
        let o = order(OrderStatus::InProgress);
        for _ in 0..3 {
            match dispatcher.dispatch("guide", &o, &ctx) {
                DispatchResult::Intent { intent, order } => {
                    assert_eq!(intent, IntentKind::Guide);
                    assert_eq!(order.status, OrderStatus::InProgress);
                }
                other => panic!("expected guide intent, got {:?}", other),
            }
        }
    }
}

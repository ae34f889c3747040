// ==========================================
// 现场维修工单台账系统 - 工单生命周期引擎
// ==========================================
// 依据: 工单生命周期设计 v0.2 - 状态转换表
// 红线: 合法性判定纯函数且全域有定义;转换只产出新值,不原地修改
// ==========================================
// 职责: 状态 -> 合法操作集 / 下一状态 的唯一事实层
// 输入: WorkOrder + OrderAction + TransitionContext
// 输出: 新 WorkOrder 值(调用方负责替换存储)
// ==========================================

use crate::domain::order::{CompletionForm, WorkOrder};
use crate::domain::types::{OrderAction, OrderStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

// ==========================================
// 生命周期错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// 操作对当前状态不合法(可恢复,向用户提示后忽略)
    #[error("无效的状态转换: action={action} status={status}")]
    InvalidTransition {
        action: OrderAction,
        status: OrderStatus,
    },

    /// complete 必须携带完工提交单
    #[error("缺少完工提交单: order_id={0}")]
    MissingCompletionForm(String),

    /// 面板意图类操作不产生状态转换,不应调用 transition
    #[error("非状态转换操作: {0}")]
    NotTransitionAction(OrderAction),
}

// ==========================================
// TransitionContext - 转换上下文
// ==========================================
// "now" 由调用方显式传入,保证 transition 可确定性重放
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub now: DateTime<Utc>,                   // 当前时间(confirm_arrival 开工时间戳)
    pub completion: Option<&'a CompletionForm>, // 完工提交单(仅 complete 需要)
}

impl<'a> TransitionContext<'a> {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now, completion: None }
    }

    pub fn with_completion(now: DateTime<Utc>, form: &'a CompletionForm) -> Self {
        Self { now, completion: Some(form) }
    }
}

// ==========================================
// LifecycleEngine - 生命周期引擎
// ==========================================
pub struct LifecycleEngine;

impl LifecycleEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 合法性判定
    // ==========================================

    /// 判定操作在给定状态下是否合法
    ///
    /// 纯函数,对所有 (action, status) 组合有定义:
    /// - accept: 仅 PENDING
    /// - confirm_arrival: 仅 TO_VISIT
    /// - pause / resume: IN_PROGRESS / ON_HOLD
    /// - complete: 仅 IN_PROGRESS
    /// - parts: TO_VISIT 与 IN_PROGRESS
    /// - guide / reassign: 仅 IN_PROGRESS
    /// - support: 所有状态(全局兜底入口)
    /// - navigate: 除 COMPLETED 外所有状态
    pub fn is_action_valid(&self, action: OrderAction, status: OrderStatus) -> bool {
        use OrderAction::*;
        use OrderStatus::*;

        match action {
            Accept => status == Pending,
            ConfirmArrival => status == ToVisit,
            Pause => status == InProgress,
            Resume => status == OnHold,
            Complete => status == InProgress,
            Parts => matches!(status, ToVisit | InProgress),
            Guide => status == InProgress,
            Support => true,
            Navigate => status != Completed,
            Reassign => status == InProgress,
        }
    }

    /// 给定状态下的合法操作集(按固定顺序,供展示层渲染按钮)
    pub fn valid_actions(&self, status: OrderStatus) -> Vec<OrderAction> {
        OrderAction::ALL
            .into_iter()
            .filter(|a| self.is_action_valid(*a, status))
            .collect()
    }

    /// 状态对应的主操作(详情页底部大按钮)
    pub fn primary_action(&self, status: OrderStatus) -> OrderAction {
        match status {
            OrderStatus::Pending => OrderAction::Accept,
            OrderStatus::ToVisit => OrderAction::ConfirmArrival,
            OrderStatus::InProgress => OrderAction::Complete,
            OrderStatus::OnHold => OrderAction::Resume,
            OrderStatus::AfterSales | OrderStatus::Completed => OrderAction::Support,
        }
    }

    // ==========================================
    // 状态转换
    // ==========================================

    /// 执行状态转换,返回新工单值
    ///
    /// 转换表:
    /// - accept:           PENDING -> TO_VISIT
    /// - confirm_arrival:  TO_VISIT -> IN_PROGRESS (记录 started_at = ctx.now)
    /// - pause:            IN_PROGRESS -> ON_HOLD
    /// - resume:           ON_HOLD -> IN_PROGRESS
    /// - complete:         IN_PROGRESS -> COMPLETED,
    ///                     或表单标记售后时 -> AFTER_SALES (初始化 after_sales_status)
    ///
    /// 原工单不被修改;调用方持有返回值并替换存储副本
    #[instrument(skip(self, order, ctx), fields(order_id = %order.id, action = %action, from = %order.status))]
    pub fn transition(
        &self,
        order: &WorkOrder,
        action: OrderAction,
        ctx: &TransitionContext,
    ) -> Result<WorkOrder, LifecycleError> {
        if !self.is_action_valid(action, order.status) {
            return Err(LifecycleError::InvalidTransition {
                action,
                status: order.status,
            });
        }

        let mut next = order.clone();
        match action {
            OrderAction::Accept => {
                next.status = OrderStatus::ToVisit;
            }
            OrderAction::ConfirmArrival => {
                next.status = OrderStatus::InProgress;
                next.started_at = Some(ctx.now);
            }
            OrderAction::Pause => {
                next.status = OrderStatus::OnHold;
            }
            OrderAction::Resume => {
                next.status = OrderStatus::InProgress;
            }
            OrderAction::Complete => {
                let form = ctx
                    .completion
                    .ok_or_else(|| LifecycleError::MissingCompletionForm(order.id.clone()))?;
                if form.needs_after_sales {
                    next.status = OrderStatus::AfterSales;
                    next.after_sales_status = Some(form.initial_after_sales_status());
                } else {
                    next.status = OrderStatus::Completed;
                }
            }
            other => return Err(LifecycleError::NotTransitionAction(other)),
        }

        // after_sales_status 仅在 AFTER_SALES 状态有意义
        if next.status != OrderStatus::AfterSales {
            next.after_sales_status = None;
        }

        tracing::debug!(to = %next.status, "工单状态转换完成");
        Ok(next)
    }
}

impl Default for LifecycleEngine {
    fn default() -> Self {
        Self::new()
    }
}

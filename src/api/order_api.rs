// ==========================================
// 现场维修工单台账系统 - 工单 API
// ==========================================
// 职责: 持有工单列表副本,暴露页签查询/计数/操作调度
// 红线: 状态变更只能经由 dispatch;替换值,不原地改;
//       每次成功调度留痕(调度日志)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::action_log::DispatchLog;
use crate::domain::order::{CompletionForm, EngineerProfile, WorkOrder};
use crate::domain::types::{OrderAction, OrderStatus};
use crate::engine::dispatcher::{ActionDispatcher, DispatchResult};
use crate::engine::lifecycle::TransitionContext;
use crate::engine::priority::PrioritySorter;
use crate::provider::OrderSource;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// OrderApi - 工单 API
// ==========================================
pub struct OrderApi {
    source: Box<dyn OrderSource>,
    dispatcher: ActionDispatcher,
    sorter: PrioritySorter,
    orders: Vec<WorkOrder>,
    dispatch_logs: Vec<DispatchLog>,
}

impl OrderApi {
    /// 创建实例并完成首次拉取
    pub fn new(source: Box<dyn OrderSource>) -> ApiResult<Self> {
        let mut api = Self {
            source,
            dispatcher: ActionDispatcher::new(),
            sorter: PrioritySorter::new(),
            orders: Vec::new(),
            dispatch_logs: Vec::new(),
        };
        api.refresh()?;
        Ok(api)
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 从数据源重新拉取工单列表
    ///
    /// 本地已调度的状态变更会被数据源快照覆盖(数据源是事实层)
    #[instrument(skip(self))]
    pub fn refresh(&mut self) -> ApiResult<()> {
        self.orders = self.source.fetch_orders()?;
        tracing::info!(count = self.orders.len(), "工单列表刷新完成");
        Ok(())
    }

    /// 全部工单(数据源顺序)
    pub fn orders(&self) -> &[WorkOrder] {
        &self.orders
    }

    /// 按工单号查询
    pub fn get(&self, order_id: &str) -> ApiResult<&WorkOrder> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ApiError::NotFound {
                entity: "WorkOrder".to_string(),
                id: order_id.to_string(),
            })
    }

    /// 按状态页签查询(页签内按优先级降序)
    pub fn list_by_status(&self, status: OrderStatus) -> Vec<WorkOrder> {
        let mut filtered: Vec<WorkOrder> = self
            .orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect();
        self.sorter.sort_for_tab(&mut filtered);
        filtered
    }

    /// 单状态计数
    pub fn count(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// 全状态计数(页签角标;含零计数状态)
    pub fn count_by_status(&self) -> BTreeMap<OrderStatus, usize> {
        let mut counts: BTreeMap<OrderStatus, usize> =
            OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for order in &self.orders {
            *counts.entry(order.status).or_insert(0) += 1;
        }
        counts
    }

    /// 可挂入客服会话的工单(待接单 + 处理中)
    pub fn chat_attachable_orders(&self) -> Vec<WorkOrder> {
        self.orders
            .iter()
            .filter(|o| o.is_chat_attachable())
            .cloned()
            .collect()
    }

    /// 工程师档案
    pub fn profile(&self) -> ApiResult<EngineerProfile> {
        Ok(self.source.fetch_profile()?)
    }

    // ==========================================
    // 操作调度
    // ==========================================

    /// 调度一次用户操作
    ///
    /// 乐观并发: expected_status 为调用方(界面快照)认定的当前状态;
    /// 与存储状态不一致时返回 StatusConflict,不进入状态机
    ///
    /// 结果语义:
    /// - Transitioned: 存储副本已替换为新值,并写入调度日志
    /// - Intent: 状态不变,写入调度日志(含面板种类)
    /// - Rejected: 可恢复,向用户提示 reason;以 Ok 返回而非错误通道
    #[instrument(skip(self, completion), fields(order_id = order_id, action = action_name))]
    pub fn dispatch(
        &mut self,
        order_id: &str,
        action_name: &str,
        expected_status: OrderStatus,
        now: DateTime<Utc>,
        completion: Option<&CompletionForm>,
        actor: &str,
    ) -> ApiResult<DispatchResult> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| ApiError::NotFound {
                entity: "WorkOrder".to_string(),
                id: order_id.to_string(),
            })?;

        let stored = &self.orders[index];
        if stored.status != expected_status {
            return Err(ApiError::StatusConflict {
                order_id: order_id.to_string(),
                expected: expected_status,
                actual: stored.status,
            });
        }

        let ctx = TransitionContext {
            now,
            completion,
        };
        let result = self.dispatcher.dispatch(action_name, stored, &ctx);

        match &result {
            DispatchResult::Transitioned { order: next } => {
                let mut log = DispatchLog::new(
                    order_id,
                    // dispatch 成功产出转换,操作名必然可解析
                    OrderAction::from_str(action_name).ok_or_else(|| {
                        ApiError::InternalError(format!("操作名解析失败: {}", action_name))
                    })?,
                    actor,
                    now,
                    expected_status,
                    Some(next.status),
                );
                if let Some(form) = completion {
                    log = log.with_payload(form);
                }
                self.dispatch_logs.push(log);
                self.orders[index] = next.clone();
                tracing::info!(to = %next.status, "工单状态已更新");
            }
            DispatchResult::Intent { intent, .. } => {
                if let Some(action) = OrderAction::from_str(action_name) {
                    self.dispatch_logs.push(
                        DispatchLog::new(order_id, action, actor, now, expected_status, None)
                            .with_payload(intent),
                    );
                }
            }
            DispatchResult::Rejected { reason, .. } => {
                tracing::warn!(reason = reason.as_str(), "操作被拒绝");
            }
        }

        Ok(result)
    }

    /// 调度日志(审计追踪)
    pub fn dispatch_logs(&self) -> &[DispatchLog] {
        &self.dispatch_logs
    }
}

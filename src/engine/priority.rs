// ==========================================
// 现场维修工单台账系统 - 页签内排序引擎
// ==========================================
// 职责: 同一状态页签内的工单排序
// 输入: 已按状态过滤的工单列表
// 输出: 排序后的工单列表
// ==========================================

use crate::domain::order::WorkOrder;
use std::cmp::Ordering;

// ==========================================
// PrioritySorter - 页签内排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎,不需要注入依赖
}

impl PrioritySorter {
    pub fn new() -> Self {
        Self {}
    }

    /// 排序工单列表
    ///
    /// 排序键:
    /// 1) priority 降序 (Critical 优先)
    /// 2) id 升序 (稳定展示顺序)
    pub fn sort_for_tab(&self, orders: &mut [WorkOrder]) {
        orders.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &WorkOrder, b: &WorkOrder) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{OrderStatus, Priority};

    fn order(id: &str, priority: Priority) -> WorkOrder {
        WorkOrder {
            id: id.to_string(),
            store_name: "Store".to_string(),
            address: "Addr".to_string(),
            distance: None,
            lat: 0.0,
            lng: 0.0,
            fault_description: "desc".to_string(),
            equipment_type: "HVAC".to_string(),
            status: OrderStatus::Pending,
            priority,
            started_at: None,
            after_sales_status: None,
        }
    }

    #[test]
    fn test_critical_first_then_id() {
        let sorter = PrioritySorter::new();
        let mut orders = vec![
            order("WO-3", Priority::Low),
            order("WO-2", Priority::Critical),
            order("WO-1", Priority::Low),
            order("WO-4", Priority::High),
        ];
        sorter.sort_for_tab(&mut orders);

        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["WO-2", "WO-4", "WO-1", "WO-3"]);
    }
}

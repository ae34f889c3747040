// ==========================================
// 现场维修工单台账系统 - 配件领域模型
// ==========================================
// 依据: 配件报价设计 v0.2 - 目录与选择集
// 红线: 金额一律使用整数最小货币单位(分),不得引入浮点累加
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Part - 配件目录行
// ==========================================
// 用途: 静态目录,核心只读
// 红线: 每个配件归属且仅归属一个设备类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub id: String,                   // 配件号(唯一)
    pub name: String,                 // 配件名称
    pub equipment_type: String,       // 所属设备类型(目录分组键)
    pub unit_price_cents: i64,        // 配件单价(分,非负)
    pub installation_price_cents: i64, // 安装费(分,非负)
    pub shipping_fee_cents: i64,      // 运费(分,非负)
}

// ==========================================
// PartsSelection - 配件选择集(会话级)
// ==========================================
// 生命周期: 配件面板打开时按工单设备类型创建,关闭或切单即废弃
// 红线: 选中 id 必须属于当前设备类型;切换类型时整体清空,不允许跨类残留
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartsSelection {
    pub equipment_type: String,              // 当前浏览的设备类型
    pub selected_part_ids: BTreeSet<String>, // 选中配件号集合(无序语义,集合去重)
}

impl PartsSelection {
    /// 按设备类型创建空选择集
    pub fn new(equipment_type: &str) -> Self {
        Self {
            equipment_type: equipment_type.to_string(),
            selected_part_ids: BTreeSet::new(),
        }
    }

    /// 选入配件(重复选入不改变集合)
    pub fn select(&mut self, part_id: &str) {
        self.selected_part_ids.insert(part_id.to_string());
    }

    /// 取消选中
    pub fn deselect(&mut self, part_id: &str) {
        self.selected_part_ids.remove(part_id);
    }

    /// 勾选切换,返回切换后是否选中
    pub fn toggle(&mut self, part_id: &str) -> bool {
        if self.selected_part_ids.remove(part_id) {
            false
        } else {
            self.selected_part_ids.insert(part_id.to_string());
            true
        }
    }

    /// 切换设备类型
    ///
    /// 类型实际变化时原子清空选择集;同类型切换保持选择不动
    pub fn switch_equipment_type(&mut self, equipment_type: &str) {
        if self.equipment_type != equipment_type {
            self.equipment_type = equipment_type.to_string();
            self.selected_part_ids.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected_part_ids.is_empty()
    }
}

// ==========================================
// 金额格式化
// ==========================================

/// 分转显示金额字符串(两位小数)
///
/// 仅用于展示;内部计算始终保持整数分
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_set_semantics() {
        let mut sel = PartsSelection::new("HVAC");
        sel.select("P-001");
        sel.select("P-001");
        assert_eq!(sel.selected_part_ids.len(), 1);

        assert!(!sel.toggle("P-001")); // 再次切换 -> 取消
        assert!(sel.is_empty());
        assert!(sel.toggle("P-002")); // 切换 -> 选中
    }

    #[test]
    fn test_switch_type_clears_atomically() {
        let mut sel = PartsSelection::new("HVAC");
        sel.select("P-001");
        sel.select("P-002");

        sel.switch_equipment_type("Refrigeration");
        assert_eq!(sel.equipment_type, "Refrigeration");
        assert!(sel.selected_part_ids.is_empty());
    }

    #[test]
    fn test_switch_same_type_keeps_selection() {
        let mut sel = PartsSelection::new("HVAC");
        sel.select("P-001");
        sel.switch_equipment_type("HVAC");
        assert_eq!(sel.selected_part_ids.len(), 1);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(16000), "160.00");
        assert_eq!(format_cents(305), "3.05");
        assert_eq!(format_cents(-1250), "-12.50");
    }
}

// ==========================================
// 现场维修工单台账系统 - 配件目录索引
// ==========================================
// 依据: 配件报价设计 v0.2 - 目录索引
// 职责: 按设备类型分组静态目录,提供 O(1) 类目查询
// ==========================================

use crate::domain::part::Part;
use std::collections::HashMap;

// ==========================================
// CatalogIndex - 配件目录索引
// ==========================================
// 构建一次,之后只读;类目内保持源目录相对顺序
pub struct CatalogIndex {
    by_type: HashMap<String, Vec<Part>>, // 设备类型 -> 配件列表(源顺序)
    by_id: HashMap<String, Part>,        // 配件号 -> 配件
    type_order: Vec<String>,             // 设备类型首次出现顺序
}

impl CatalogIndex {
    /// 从静态目录构建索引
    ///
    /// 重复配件号保留首条并告警(目录导入层应已阻断重复)
    pub fn build(parts: Vec<Part>) -> Self {
        let mut by_type: HashMap<String, Vec<Part>> = HashMap::new();
        let mut by_id: HashMap<String, Part> = HashMap::new();
        let mut type_order: Vec<String> = Vec::new();

        for part in parts {
            if by_id.contains_key(&part.id) {
                tracing::warn!(part_id = %part.id, "目录中配件号重复,保留首条");
                continue;
            }
            if !by_type.contains_key(&part.equipment_type) {
                type_order.push(part.equipment_type.clone());
            }
            by_id.insert(part.id.clone(), part.clone());
            by_type.entry(part.equipment_type.clone()).or_default().push(part);
        }

        Self {
            by_type,
            by_id,
            type_order,
        }
    }

    /// 按设备类型查询配件列表
    ///
    /// 未知类型返回空列表(类目可以合法为空,不报错)
    pub fn by_type(&self, equipment_type: &str) -> &[Part] {
        self.by_type
            .get(equipment_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 按配件号查询
    pub fn find(&self, part_id: &str) -> Option<&Part> {
        self.by_id.get(part_id)
    }

    /// 按配件号查询,并要求归属指定设备类型
    pub fn find_in_type(&self, equipment_type: &str, part_id: &str) -> Option<&Part> {
        self.by_id
            .get(part_id)
            .filter(|p| p.equipment_type == equipment_type)
    }

    /// 已知设备类型列表(首次出现顺序)
    pub fn equipment_types(&self) -> &[String] {
        &self.type_order
    }

    /// 目录配件总数
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, equipment_type: &str) -> Part {
        Part {
            id: id.to_string(),
            name: format!("part {}", id),
            equipment_type: equipment_type.to_string(),
            unit_price_cents: 100,
            installation_price_cents: 50,
            shipping_fee_cents: 10,
        }
    }

    #[test]
    fn test_by_type_preserves_source_order() {
        let index = CatalogIndex::build(vec![
            part("P-1", "HVAC"),
            part("P-2", "Refrigeration"),
            part("P-3", "HVAC"),
            part("P-4", "HVAC"),
        ]);

        let hvac: Vec<_> = index.by_type("HVAC").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(hvac, vec!["P-1", "P-3", "P-4"]);
        assert_eq!(index.equipment_types(), &["HVAC".to_string(), "Refrigeration".to_string()]);
    }

    #[test]
    fn test_unknown_type_is_empty_not_error() {
        let index = CatalogIndex::build(vec![part("P-1", "HVAC")]);
        assert!(index.by_type("Submarine").is_empty());
    }

    #[test]
    fn test_find_in_type_enforces_category() {
        let index = CatalogIndex::build(vec![part("P-1", "HVAC")]);
        assert!(index.find_in_type("HVAC", "P-1").is_some());
        assert!(index.find_in_type("Refrigeration", "P-1").is_none());
        assert!(index.find("P-1").is_some());
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut dup = part("P-1", "Refrigeration");
        dup.unit_price_cents = 999;
        let index = CatalogIndex::build(vec![part("P-1", "HVAC"), dup]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.find("P-1").unwrap().equipment_type, "HVAC");
    }
}
